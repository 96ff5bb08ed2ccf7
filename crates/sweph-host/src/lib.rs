//! Host side of the SwissEph bridge
//!
//! Everything the native runtime would normally provide, in-process: a
//! [`ServiceHandler`] trait for native services, a [`HandlerRegistry`]
//! routing `(service, method)` pairs, and [`LocalPort`] binding the
//! registry behind the dispatch seam. The built-in [`SwissEphHandler`]
//! covers the "SwissEph" service itself.

pub mod handler;
pub mod local;
pub mod registry;
pub mod swisseph;

pub use handler::{HandlerError, ServiceHandler};
pub use local::LocalPort;
pub use registry::HandlerRegistry;
pub use swisseph::{ChartEngine, SwissEphHandler};
