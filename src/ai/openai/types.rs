//! OpenAI chat-completion response payloads.

use super::arguments::{deserialize_arguments, Arguments};
use crate::ai::DecodableResponse;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Top-level chat completion response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatCompletionResponseBody {
    /// One entry per requested completion (`n` on the request), in vendor order.
    pub choices: Vec<ChatChoice>,
    /// Unix timestamp (seconds) of when the completion was created.
    pub created: i64,
    /// The model used for the completion.
    pub model: String,
}

impl DecodableResponse for ChatCompletionResponseBody {
    const PROVIDER: &'static str = "OpenAI";
}

impl ChatCompletionResponseBody {
    /// Text content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }

    /// All tool calls across every choice, in order.
    pub fn tool_calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.choices
            .iter()
            .flat_map(|choice| choice.message.tool_calls.iter().flatten())
    }

    /// `created` as a UTC timestamp; `None` if out of chrono's range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Single choice item returned by chat completions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatChoice {
    /// `stop`, `length`, `content_filter`, `tool_calls` or `function_call`.
    /// Kept as a string since OpenAI adds values over time.
    pub finish_reason: Option<String>,
    pub message: ChoiceMessage,
}

/// Message generated by the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    /// Absent when the message only carries tool calls.
    pub content: Option<String>,
    pub role: String,
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// Tool call generated by the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCall {
    pub id: Option<String>,
    /// Currently always `function`.
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionCall,
}

/// The function the model instructs the caller to invoke.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Parsed arguments object. `None` when the model sent nothing usable;
    /// the model can emit invalid JSON, so validate before calling anything.
    #[serde(default, deserialize_with = "deserialize_arguments")]
    pub arguments: Option<Arguments>,
}

impl FunctionCall {
    /// Deserialize the arguments into a caller-defined type.
    ///
    /// Returns `Ok(None)` when there are no usable arguments.
    pub fn arguments_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let Some(arguments) = &self.arguments else {
            return Ok(None);
        };

        serde_json::from_value(serde_json::Value::Object(arguments.clone()))
            .map(Some)
            .map_err(|e| Error::InvalidArguments {
                function: self.name.clone(),
                source: e,
            })
    }
}
