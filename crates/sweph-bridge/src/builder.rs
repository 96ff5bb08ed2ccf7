//! Builder for configuring and creating SwissEph proxies

use std::sync::Arc;

use anyhow::Result;

use sweph_core::DispatchPort;

use crate::proxy::SwissEphProxy;

/// Builder for a [`SwissEphProxy`] bound to a dispatch port.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use sweph_bridge::BridgeBuilder;
/// # fn port() -> Arc<dyn sweph_core::DispatchPort> { unimplemented!() }
///
/// # fn main() -> anyhow::Result<()> {
/// let proxy = BridgeBuilder::new().port(port()).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BridgeBuilder {
    port: Option<Arc<dyn DispatchPort>>,
}

impl BridgeBuilder {
    /// Create a new builder with no port configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch port the proxy will submit invocations to
    pub fn port(mut self, port: Arc<dyn DispatchPort>) -> Self {
        self.port = Some(port);
        self
    }

    /// Validate the configuration and create the proxy
    pub fn build(self) -> Result<SwissEphProxy> {
        let port = self
            .port
            .ok_or_else(|| anyhow::anyhow!("a dispatch port is required"))?;
        Ok(SwissEphProxy::new(port))
    }
}

impl std::fmt::Debug for BridgeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeBuilder")
            .field("has_port", &self.port.is_some())
            .finish()
    }
}
