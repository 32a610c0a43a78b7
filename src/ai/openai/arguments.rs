//! Double decode of tool-call `arguments`.
//!
//! OpenAI sends function arguments as a JSON object serialized *into a
//! string*. The wire value is captured raw so the outer decode never looks
//! inside it. Stage one decodes the raw value as a string, stage two parses
//! that string as a JSON object. Any failure in either stage collapses to
//! `None` so the caller still receives the function name.

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

/// Dynamic argument object produced by a tool call.
pub type Arguments = Map<String, Value>;

/// Serde adapter for `FunctionCall::arguments`. Never fails on the value itself.
pub(crate) fn deserialize_arguments<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Arguments>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Box<RawValue>> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_arguments))
}

/// Parse a raw wire `arguments` value into an object, absorbing every failure.
pub fn parse_arguments(raw: &RawValue) -> Option<Arguments> {
    let text = match serde_json::from_str::<String>(raw.get()) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Tool-call arguments are not a decodable string: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            tracing::debug!("Tool-call arguments parsed to {}, expected object", kind(&other));
            None
        }
        Err(e) => {
            tracing::debug!("Tool-call arguments are not valid JSON: {}", e);
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
