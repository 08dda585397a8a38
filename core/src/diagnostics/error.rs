//! Located diagnostics reported by the evaluator and the type checker.

use core::fmt;

use crate::diagnostics::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotonErrorKind {
    /// Raised while reducing a value.
    Eval,
    /// Raised while checking types.
    Type,
}

impl fmt::Display for PhotonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotonErrorKind::Eval => write!(f, "evaluation error"),
            PhotonErrorKind::Type => write!(f, "type error"),
        }
    }
}

/// A diagnostic message with an optional source location.
///
/// Displays as `"<message> @ <location>"`, or just the message when no
/// location is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotonError {
    kind: PhotonErrorKind,
    message: String,
    location: Option<Location>,
}

impl PhotonError {
    pub fn new(kind: PhotonErrorKind, message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            kind,
            message: message.into(),
            location,
        }
    }

    pub fn eval(message: impl Into<String>, location: Option<Location>) -> Self {
        Self::new(PhotonErrorKind::Eval, message, location)
    }

    pub fn type_error(message: impl Into<String>, location: Option<Location>) -> Self {
        Self::new(PhotonErrorKind::Type, message, location)
    }

    pub fn kind(&self) -> PhotonErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl fmt::Display for PhotonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} @ {}", self.message, location),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for PhotonError {}
