//! Shared decoding entry point for vendor response bodies.

use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// A vendor response body that can be decoded from raw bytes.
///
/// Implementors only name their provider; the default [`decode`](Self::decode)
/// does the structural JSON decode and maps any failure to
/// [`Error::MalformedResponse`]. No partial value is ever returned.
pub trait DecodableResponse: DeserializeOwned {
    /// Provider name used in logs and errors.
    const PROVIDER: &'static str;

    fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            tracing::error!(
                "Failed to parse {} response: {}\nBody: {}",
                Self::PROVIDER,
                e,
                String::from_utf8_lossy(bytes)
            );
            Error::MalformedResponse {
                provider: Self::PROVIDER,
                source: e,
            }
        })
    }
}
