//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The vendor body was not valid JSON, or a required field was missing or mis-typed.
    #[error("Malformed {provider} response: {source}")]
    MalformedResponse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Arguments for function '{function}' do not match the expected shape: {source}")]
    InvalidArguments {
        function: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
