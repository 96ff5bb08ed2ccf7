//! # Sweph
//!
//! Typed bridge to the SwissEph native service.
//!
//! The original plugin split in two: a thin proxy on the caller side
//! forwarding `(service, method, args)` tuples, and a native handler on
//! the host side answering them. This crate wires both halves together
//! behind a single dispatch seam, so production can bind a real native
//! transport while tests bind an in-memory fake.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sweph::local_bridge;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let proxy = local_bridge();
//!     let greeting = proxy.greet_async("Ada").await?;
//!     assert_eq!(greeting, "Hello, Ada");
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

// Re-export the invocation contract
pub use sweph_core as core;

// Re-export the host side
pub use sweph_host as host;

// Re-export the caller side
pub use sweph_bridge as bridge;

pub use sweph_bridge::{BridgeBuilder, SwissEphProxy};
pub use sweph_core::{DispatchError, DispatchPort, Invocation};
pub use sweph_host::{ChartEngine, HandlerRegistry, LocalPort, SwissEphHandler};

/// Prelude module for convenient imports
pub mod prelude {
    pub use sweph_bridge::{BridgeBuilder, SwissEphProxy};
    pub use sweph_core::{
        CallbackPair, Continuation, DispatchError, DispatchPort, Invocation, Result,
        SWISS_EPH_SERVICE,
    };
    pub use sweph_host::{
        ChartEngine, HandlerError, HandlerRegistry, LocalPort, ServiceHandler, SwissEphHandler,
    };
}

/// Proxy bound to an in-process port with the built-in SwissEph handler.
///
/// `computeChart` has no engine attached and reports failure; use
/// [`local_bridge_with_engine`] to attach one.
pub fn local_bridge() -> SwissEphProxy {
    let mut registry = HandlerRegistry::new();
    registry.register(Arc::new(SwissEphHandler::new()));
    SwissEphProxy::new(Arc::new(LocalPort::new(registry)))
}

/// Proxy bound to an in-process port with a chart engine attached
pub fn local_bridge_with_engine(engine: ChartEngine) -> SwissEphProxy {
    let mut registry = HandlerRegistry::new();
    registry.register(Arc::new(SwissEphHandler::with_engine(engine)));
    SwissEphProxy::new(Arc::new(LocalPort::new(registry)))
}
