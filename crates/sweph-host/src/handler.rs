//! Service handler abstraction for the native side of the bridge

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors a service handler can report for one method call.
///
/// Whatever the variant, the caller on the far side of the bridge only
/// ever sees the opaque payload produced by [`HandlerError::to_payload`].
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HandlerError {
    /// The service has no method under this name
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// No handler is registered under this service name
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The positional arguments did not match what the method expects
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// The method ran and failed
    #[error("operation failed: {0}")]
    Failed(String),
}

impl HandlerError {
    /// Create an UnknownMethod error
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod(name.into())
    }

    /// Create an UnknownService error
    pub fn unknown_service(name: impl Into<String>) -> Self {
        Self::UnknownService(name.into())
    }

    /// Create an InvalidArgs error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a Failed error
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    fn code(&self) -> u32 {
        match self {
            Self::UnknownMethod(_) => 1,
            Self::UnknownService(_) => 2,
            Self::InvalidArgs(_) => 3,
            Self::Failed(_) => 4,
        }
    }

    /// The opaque error payload delivered to the caller's error continuation
    pub fn to_payload(&self) -> Value {
        json!({
            "code": self.code(),
            "message": self.to_string(),
        })
    }
}

/// A native service reachable through the bridge.
///
/// The analog of the original plugin's `execute(action, args)` entry
/// point: one handler owns one service name and routes method names
/// internally. Handlers are stateless across calls as far as the bridge
/// is concerned; any state they keep is their own business.
#[async_trait]
pub trait ServiceHandler: Send + Sync {
    /// The service name this handler answers for
    fn service_name(&self) -> &str;

    /// Run one method with positional arguments
    async fn execute(&self, method: &str, args: &[Value]) -> Result<Value, HandlerError>;
}
