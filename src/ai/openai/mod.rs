pub mod arguments;
pub mod types;

pub use arguments::{parse_arguments, Arguments};
pub use types::{ChatChoice, ChatCompletionResponseBody, ChoiceMessage, FunctionCall, ToolCall};

use crate::ai::DecodableResponse;
use crate::Result;

/// Decode a chat completion body fetched by the caller's HTTP client.
pub fn decode_chat_completion(bytes: &[u8]) -> Result<ChatCompletionResponseBody> {
    ChatCompletionResponseBody::decode(bytes)
}
