//! Source locations and located diagnostics.
//!
//! The lexer, parser and evaluator live outside this crate; they attach
//! [`Location`]s to the nodes they build and report failures as
//! [`PhotonError`]s.

pub mod error;
pub mod location;

pub use error::{PhotonError, PhotonErrorKind};
pub use location::{Location, LocationError};
