//! Error handling utilities for Tauri commands.

use mediadock_core::{Error, ErrorKind};
use tracing::error;

/// Structured error response for Tauri IPC.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Error category for programmatic handling.
    pub kind: ErrorKind,
    /// Whether the same call could succeed if retried.
    pub retryable: bool,
}

impl From<&Error> for ErrorResponse {
    fn from(e: &Error) -> Self {
        Self {
            message: e.to_string(),
            kind: e.kind(),
            retryable: e.is_retryable(),
        }
    }
}

/// Convert a core error to the string Tauri sends to the frontend.
///
/// The string is a JSON-encoded [`ErrorResponse`], or the plain message if
/// serialization fails.
pub fn map_err(e: Error) -> String {
    let kind = e.kind();
    error!("Command error [kind={:?}]: {}", kind, e);

    let response = ErrorResponse::from(&e);
    serde_json::to_string(&response).unwrap_or_else(|_| e.to_string())
}
