//! Bridge-invocation contract for the SwissEph dispatch port
//!
//! This crate defines the seam everything else plugs into: the
//! [`Invocation`] tuple, the [`CallbackPair`] continuation contract and
//! the [`DispatchPort`] trait. Production binds the port to a real native
//! transport, tests bind an in-memory fake; the contract is the same in
//! both directions - exactly one terminal callback per invocation, with
//! opaque JSON payloads in both the success and the error case.

pub mod error;
pub mod invocation;
pub mod port;

pub use error::{DispatchError, Result};
pub use invocation::{Invocation, SWISS_EPH_SERVICE};
pub use port::{CallbackPair, Continuation, DispatchPort};
