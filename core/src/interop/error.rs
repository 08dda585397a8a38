//! Errors raised by the interop protocol.
//!
//! # Error Categories
//!
//! - **Caller errors**: the host asked for something the value does not
//!   support (`UnknownMember`, `UnsupportedRepresentation`, ...). These are
//!   contract violations on the caller's side and can be reported normally.
//!
//! - **Internal failures**: a registered callable failed while running.
//!   This points at a broken method table and is fatal; see
//!   [`InteropError::is_fatal`].

use thiserror::Error;

use crate::{
    diagnostics::{Location, PhotonError},
    dispatch::HostKind,
    interop::NumericWidth,
};

#[derive(Debug, Error)]
pub enum InteropError {
    /// The receiver has no invocable member with this name.
    #[error("unknown member '{member}'")]
    UnknownMember { member: String },

    /// The value does not fit in the requested numeric representation.
    #[error("value does not fit in {width}")]
    UnsupportedRepresentation { width: NumericWidth },

    /// A fixed-arity member was invoked with the wrong number of arguments.
    #[error("member '{member}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        member: String,
        expected: usize,
        actual: usize,
    },

    /// The receiver is not a value the member was registered for.
    #[error("receiver of member '{member}' must be {expected}")]
    InvalidReceiver {
        member: String,
        expected: &'static str,
    },

    /// An argument has a kind the member cannot accept. `index` counts only
    /// the arguments, never the receiver.
    #[error("argument {index} of member '{member}' must be {expected}")]
    UnsupportedType {
        member: String,
        index: usize,
        expected: &'static str,
    },

    /// No member dispatch exists yet for this unboxed receiver kind.
    #[error("member '{member}' is not supported on unboxed {kind} receivers")]
    UnsupportedReceiver { kind: HostKind, member: String },

    /// A callable from a method table failed while running.
    #[error("internal dispatch failure in {type_name}.{member}")]
    InternalDispatchFailure {
        type_name: &'static str,
        member: String,
        #[source]
        source: Box<InteropError>,
    },
}

impl InteropError {
    /// Fatal errors signal a registration bug and must not be recovered from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, InteropError::InternalDispatchFailure { .. })
    }

    /// Attach a source location, producing an evaluation diagnostic.
    pub fn at(&self, location: Option<Location>) -> PhotonError {
        PhotonError::eval(self.to_string(), location)
    }
}
