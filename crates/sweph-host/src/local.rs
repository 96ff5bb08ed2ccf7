//! In-process dispatch port backed by a handler registry

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use sweph_core::{CallbackPair, DispatchPort, Invocation};

use crate::registry::HandlerRegistry;

/// Binds a [`HandlerRegistry`] behind the [`DispatchPort`] seam.
///
/// `invoke` returns as soon as the handler task is spawned; the terminal
/// callback fires later from that task. Completion order across
/// concurrent invocations is whatever the runtime schedules - the port
/// imposes no serialization, matching the bridge contract.
#[derive(Clone, Debug)]
pub struct LocalPort {
    registry: Arc<HandlerRegistry>,
}

impl LocalPort {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

#[async_trait]
impl DispatchPort for LocalPort {
    async fn invoke(&self, invocation: Invocation, callbacks: CallbackPair) {
        debug!(
            service = %invocation.service,
            method = %invocation.method,
            "dispatching invocation"
        );

        let registry = Arc::clone(&self.registry);
        tokio::spawn(async move {
            let outcome = registry
                .execute(&invocation.service, &invocation.method, &invocation.args)
                .await;
            match outcome {
                Ok(payload) => {
                    debug!(method = %invocation.method, "invocation succeeded");
                    callbacks.resolve(payload);
                }
                Err(err) => {
                    debug!(method = %invocation.method, error = %err, "invocation failed");
                    callbacks.reject(err.to_payload());
                }
            }
        });
    }
}
