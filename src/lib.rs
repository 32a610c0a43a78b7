//! Typed request/response payloads for third-party AI provider APIs
//!
//! Parses OpenAI chat completion bodies (including tool-call arguments that
//! arrive as JSON inside a string) and turns Stability AI image generation
//! requests into multipart form fields.

pub mod ai;
pub mod error;

pub use error::{Error, Result};
