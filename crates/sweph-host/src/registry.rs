//! Handler registry and service-level dispatch

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::handler::{HandlerError, ServiceHandler};

/// Routes invocations to the handler registered under their service name.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ServiceHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own service name.
    ///
    /// Registering a second handler for the same service replaces the
    /// first one.
    pub fn register(&mut self, handler: Arc<dyn ServiceHandler>) {
        self.handlers
            .insert(handler.service_name().to_string(), handler);
    }

    /// Execute one method on the named service
    pub async fn execute(
        &self,
        service: &str,
        method: &str,
        args: &[Value],
    ) -> Result<Value, HandlerError> {
        match self.handlers.get(service) {
            Some(handler) => handler.execute(method, args).await,
            None => Err(HandlerError::unknown_service(service)),
        }
    }

    /// List registered service names
    pub fn services(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("services", &self.services())
            .finish()
    }
}
