//! Protocol error types.

use thiserror::Error;

/// Errors that can occur while decoding or encoding wire messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unknown message kind: {0}")]
    UnknownKind(String),

    #[error("Bad {kind} payload: {reason}")]
    BadPayload {
        kind: &'static str,
        #[source]
        reason: serde_json::Error,
    },
}
