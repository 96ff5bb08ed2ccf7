//! # Sweph Bridge
//!
//! Caller side of the SwissEph bridge: a typed proxy exposing the two
//! remote operations (`greet` and `computeChart`) over any
//! [`DispatchPort`](sweph_core::DispatchPort) implementation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use sweph_bridge::SwissEphProxy;
//! # fn port() -> Arc<dyn sweph_core::DispatchPort> { unimplemented!() }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let proxy = SwissEphProxy::new(port());
//!     let greeting = proxy.greet_async("Ada").await?;
//!     println!("{greeting}");
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod proxy;

pub use builder::BridgeBuilder;
pub use proxy::SwissEphProxy;
