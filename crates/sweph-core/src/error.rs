//! Error types for bridge invocations

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the invocation contract.
///
/// The bridge never interprets a failure reported by the port: the payload
/// travels verbatim from the native side to the caller. The only locally
/// produced condition is [`DispatchError::ChannelClosed`], raised by the
/// future adapter when a port drops both continuations without firing
/// either one.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The port reported failure with an opaque payload
    #[error("dispatch failed: {0}")]
    Failure(Value),

    /// The port dropped the invocation without a terminal callback
    #[error("dispatch port dropped the invocation without completing it")]
    ChannelClosed,
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, DispatchError>;

impl DispatchError {
    /// Wrap an opaque error payload from the port
    pub fn failure(payload: impl Into<Value>) -> Self {
        Self::Failure(payload.into())
    }

    /// The payload carried by a `Failure`, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Failure(payload) => Some(payload),
            Self::ChannelClosed => None,
        }
    }
}
