//! Photon runtime core.
//!
//! Runtime values, their types, and the interop protocol through which an
//! embedding host inspects and invokes them:
//!
//! - [`values`]: the closed set of value kinds ([`values::Value`]).
//! - [`types`]: types, their method tables, and the built-in singletons.
//! - [`interop`]: the capability protocol every value answers.
//! - [`dispatch`]: member dispatch for raw host values.
//! - [`diagnostics`]: source locations and located errors.

pub mod diagnostics;
pub mod dispatch;
pub mod errors;
pub mod interop;
pub mod types;
pub mod values;

pub use errors::Error;
