//! Crate-level error type.
//!
//! Each layer reports its own error enum; [`Error`] collects them for hosts
//! that want a single type to propagate with `?`.

use thiserror::Error;

use crate::{
    diagnostics::{LocationError, PhotonError},
    interop::InteropError,
    types::RegistrationError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Interop(#[from] InteropError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Diagnostic(#[from] PhotonError),
}

impl Error {
    /// Whether the error signals a bug in the runtime's own registrations.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Interop(err) => err.is_fatal(),
            Error::Registration(_) => true,
            Error::Location(_) | Error::Diagnostic(_) => false,
        }
    }
}
