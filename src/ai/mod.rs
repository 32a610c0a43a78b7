//! Wire payloads for third-party AI provider APIs
//!
//! Decodes OpenAI chat completion responses and encodes Stability AI image
//! generation requests. Transport, auth, and retries belong to the caller's
//! HTTP client.

pub mod decode;
pub mod multipart;
pub mod openai;
pub mod stability;

pub use decode::DecodableResponse;
pub use multipart::{FormField, MultipartFormEncodable};
