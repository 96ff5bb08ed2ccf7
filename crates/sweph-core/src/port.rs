//! The dispatch seam between the typed proxy and the native side

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::invocation::Invocation;

/// A caller-supplied function fired once when a result becomes available.
pub type Continuation = Box<dyn FnOnce(Value) + Send + 'static>;

/// The success/error continuation pair attached to one invocation.
///
/// At most one of the two fires, and at most once: both terminal methods
/// consume the pair. A pair dropped without completing is a contract
/// violation on the port's side and is logged.
pub struct CallbackPair {
    inner: Option<(Continuation, Continuation)>,
}

impl CallbackPair {
    pub fn new(on_success: Continuation, on_error: Continuation) -> Self {
        Self {
            inner: Some((on_success, on_error)),
        }
    }

    /// Deliver a success payload to the caller
    pub fn resolve(mut self, payload: Value) {
        if let Some((on_success, _)) = self.inner.take() {
            on_success(payload);
        }
    }

    /// Deliver an opaque error payload to the caller
    pub fn reject(mut self, payload: Value) {
        if let Some((_, on_error)) = self.inner.take() {
            on_error(payload);
        }
    }
}

impl Drop for CallbackPair {
    fn drop(&mut self) {
        if self.inner.is_some() {
            warn!("callback pair dropped without a terminal result");
        }
    }
}

impl std::fmt::Debug for CallbackPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackPair")
            .field("pending", &self.inner.is_some())
            .finish()
    }
}

/// Generic remote-procedure dispatch primitive.
///
/// Production binds this to the real native transport; tests bind an
/// in-memory fake. The port owes each invocation exactly one terminal
/// callback, on its own schedule: `invoke` returns once the invocation
/// has been submitted, not once it has completed. No ordering is
/// guaranteed between concurrent invocations and submission cannot be
/// withdrawn.
#[async_trait]
pub trait DispatchPort: Send + Sync {
    /// Submit one invocation together with its continuation pair
    async fn invoke(&self, invocation: Invocation, callbacks: CallbackPair);
}
