//! Typed proxy for the SwissEph service

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use sweph_core::{CallbackPair, Continuation, DispatchError, DispatchPort, Invocation, Result};

/// In-process entry point for the SwissEph remote operations.
///
/// Each operation issues exactly one invocation against the configured
/// port and holds no state between calls: concurrent calls do not
/// interfere and complete in whatever order the port delivers them.
/// Both a dual-callback form and a future-returning form are exposed;
/// the future form is a thin adapter over the same callback contract.
#[derive(Clone)]
pub struct SwissEphProxy {
    port: Arc<dyn DispatchPort>,
}

impl SwissEphProxy {
    /// Create a proxy bound to the given dispatch port
    pub fn new(port: Arc<dyn DispatchPort>) -> Self {
        Self { port }
    }

    /// Call the `greet` method with the given name.
    ///
    /// Exactly one of the two continuations fires later, on the port's
    /// schedule. No local validation is performed on `name`; failures of
    /// any kind arrive through `on_error`.
    pub async fn greet(
        &self,
        name: impl Into<String>,
        on_success: Continuation,
        on_error: Continuation,
    ) {
        self.dispatch("greet", vec![Value::String(name.into())], on_success, on_error)
            .await;
    }

    /// Call the `computeChart` method with the given ephemeris data path.
    ///
    /// The path is forwarded as-is: no existence or format check happens
    /// on this side of the bridge.
    pub async fn compute_chart(
        &self,
        ephe_path: impl Into<String>,
        on_success: Continuation,
        on_error: Continuation,
    ) {
        self.dispatch(
            "computeChart",
            vec![Value::String(ephe_path.into())],
            on_success,
            on_error,
        )
        .await;
    }

    /// Future-returning form of [`greet`](Self::greet)
    pub async fn greet_async(&self, name: impl Into<String>) -> Result<Value> {
        self.call("greet", vec![Value::String(name.into())]).await
    }

    /// Future-returning form of [`compute_chart`](Self::compute_chart)
    pub async fn compute_chart_async(&self, ephe_path: impl Into<String>) -> Result<Value> {
        self.call("computeChart", vec![Value::String(ephe_path.into())])
            .await
    }

    async fn dispatch(
        &self,
        method: &'static str,
        args: Vec<Value>,
        on_success: Continuation,
        on_error: Continuation,
    ) {
        debug!(method, "issuing SwissEph invocation");
        self.port
            .invoke(
                Invocation::swiss_eph(method, args),
                CallbackPair::new(on_success, on_error),
            )
            .await;
    }

    /// Adapt the callback contract into a resolve-exactly-once future.
    ///
    /// The oneshot sender is shared between the two continuations; the
    /// receiver closing without a value means the port dropped the
    /// invocation, which surfaces as [`DispatchError::ChannelClosed`].
    async fn call(&self, method: &'static str, args: Vec<Value>) -> Result<Value> {
        let (tx, rx) = oneshot::channel::<std::result::Result<Value, Value>>();
        let tx = Arc::new(Mutex::new(Some(tx)));
        let tx_err = Arc::clone(&tx);

        let on_success: Continuation = Box::new(move |payload| {
            match tx.lock().map(|mut slot| slot.take()) {
                Ok(Some(sender)) => {
                    let _ = sender.send(Ok(payload));
                }
                _ => warn!("success continuation fired after completion"),
            }
        });
        let on_error: Continuation = Box::new(move |payload| {
            match tx_err.lock().map(|mut slot| slot.take()) {
                Ok(Some(sender)) => {
                    let _ = sender.send(Err(payload));
                }
                _ => warn!("error continuation fired after completion"),
            }
        });

        self.dispatch(method, args, on_success, on_error).await;

        match rx.await {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(payload)) => Err(DispatchError::Failure(payload)),
            Err(_) => Err(DispatchError::ChannelClosed),
        }
    }
}

impl std::fmt::Debug for SwissEphProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwissEphProxy").finish_non_exhaustive()
    }
}
