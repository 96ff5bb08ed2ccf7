//! Built-in handler for the SwissEph service

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use serde_json::{json, Value};

use sweph_core::SWISS_EPH_SERVICE;

use crate::handler::{HandlerError, ServiceHandler};

/// Pluggable chart computation backend.
///
/// Takes the ephemeris data path the caller supplied and produces the
/// chart text. The actual astronomical computation lives behind this
/// seam; this crate never performs it.
pub type ChartEngine = Box<
    dyn Fn(String) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send>>
        + Send
        + Sync,
>;

/// Handler answering for the "SwissEph" service.
///
/// Methods mirror the original plugin surface:
/// - `greet` takes a name and returns `"Hello, <name>"`.
/// - `computeChart` takes an ephemeris data path and delegates to the
///   attached [`ChartEngine`]; without one the call fails.
#[derive(Default)]
pub struct SwissEphHandler {
    engine: Option<ChartEngine>,
}

impl SwissEphHandler {
    /// Handler with no chart engine; `computeChart` reports failure
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler with a chart engine attached
    pub fn with_engine(engine: ChartEngine) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    fn string_arg<'a>(args: &'a [Value], method: &str) -> Result<&'a str, HandlerError> {
        args.first().and_then(Value::as_str).ok_or_else(|| {
            HandlerError::invalid_args(format!("{method} expects a string as first argument"))
        })
    }
}

impl std::fmt::Debug for SwissEphHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwissEphHandler")
            .field("has_engine", &self.engine.is_some())
            .finish()
    }
}

#[async_trait]
impl ServiceHandler for SwissEphHandler {
    fn service_name(&self) -> &str {
        SWISS_EPH_SERVICE
    }

    async fn execute(&self, method: &str, args: &[Value]) -> Result<Value, HandlerError> {
        match method {
            "greet" => {
                let name = Self::string_arg(args, "greet")?;
                Ok(json!(format!("Hello, {name}")))
            }
            "computeChart" => {
                let ephe_path = Self::string_arg(args, "computeChart")?;
                match &self.engine {
                    Some(engine) => engine(ephe_path.to_string())
                        .await
                        .map(|chart| json!(chart))
                        .map_err(HandlerError::failed),
                    None => Err(HandlerError::failed("no chart engine attached")),
                }
            }
            other => Err(HandlerError::unknown_method(other)),
        }
    }
}
