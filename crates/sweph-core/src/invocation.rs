//! The invocation tuple submitted to a dispatch port

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service name under which the native SwissEph implementation registers.
pub const SWISS_EPH_SERVICE: &str = "SwissEph";

/// One `(service, method, args)` tuple handed to a [`DispatchPort`].
///
/// Created transiently per call and consumed by the port; neither the
/// proxy nor the port retains it afterwards. Arguments are positional and
/// opaque: the bridge never inspects them.
///
/// [`DispatchPort`]: crate::port::DispatchPort
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invocation {
    /// Name of the native service handling this call
    pub service: String,
    /// Method name within the service, e.g. `"greet"` or `"computeChart"`
    pub method: String,
    /// Positional arguments, passed through unvalidated
    pub args: Vec<Value>,
}

impl Invocation {
    /// Build an invocation for an arbitrary service and method
    pub fn new(
        service: impl Into<String>,
        method: impl Into<String>,
        args: Vec<Value>,
    ) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            args,
        }
    }

    /// Build an invocation addressed to the SwissEph service
    pub fn swiss_eph(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self::new(SWISS_EPH_SERVICE, method, args)
    }
}
