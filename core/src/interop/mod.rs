//! Host interoperability protocol.
//!
//! Every runtime value answers the same small set of capability queries
//! ("is this a number?", "which members can be invoked?") and can be asked
//! to invoke a member by name. Hosts only ever talk to values through
//! [`Interop`], so new value kinds can be added without changing callers.
//!
//! Queries never fail. Only [`Interop::as_width`] and
//! [`Interop::invoke_member`] return errors, and callers are expected to
//! check the matching query first.

pub mod error;


use core::fmt;

pub use error::InteropError;

use crate::{types::Type, values::Value};

/// Lazily produced member names.
pub type Members<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Numeric representations a host may ask a value for.
///
/// There are no widening or narrowing conversions: a value fits only in its
/// native width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericWidth {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl NumericWidth {
    pub const ALL: [NumericWidth; 6] = [
        NumericWidth::Byte,
        NumericWidth::Short,
        NumericWidth::Int,
        NumericWidth::Long,
        NumericWidth::Float,
        NumericWidth::Double,
    ];
}

impl fmt::Display for NumericWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericWidth::Byte => "byte",
            NumericWidth::Short => "short",
            NumericWidth::Int => "int",
            NumericWidth::Long => "long",
            NumericWidth::Float => "float",
            NumericWidth::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// A number in one specific host representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl NumericValue {
    pub fn width(&self) -> NumericWidth {
        match self {
            NumericValue::Byte(_) => NumericWidth::Byte,
            NumericValue::Short(_) => NumericWidth::Short,
            NumericValue::Int(_) => NumericWidth::Int,
            NumericValue::Long(_) => NumericWidth::Long,
            NumericValue::Float(_) => NumericWidth::Float,
            NumericValue::Double(_) => NumericWidth::Double,
        }
    }
}

/// Capability protocol implemented by every runtime value.
///
/// The default methods describe a value with no capabilities at all; kinds
/// override only what they support.
pub trait Interop {
    /// The type of this value. Never fails.
    fn type_of(&self) -> &'static Type;

    fn is_number(&self) -> bool {
        false
    }

    /// Whether the value can be represented exactly in `width`.
    ///
    /// At most one width answers `true` for a given value.
    fn fits_in(&self, width: NumericWidth) -> bool {
        let _ = width;
        false
    }

    /// The value in the requested representation.
    ///
    /// Fails with [`InteropError::UnsupportedRepresentation`] whenever
    /// [`Interop::fits_in`] is false for `width`.
    fn as_width(&self, width: NumericWidth) -> Result<NumericValue, InteropError> {
        Err(InteropError::UnsupportedRepresentation { width })
    }

    fn has_members(&self) -> bool {
        false
    }

    /// Names of the members this value exposes.
    ///
    /// No member is currently considered internal, so `include_internal`
    /// does not change the result.
    fn members(&self, include_internal: bool) -> Members<'_> {
        let _ = include_internal;
        Box::new(core::iter::empty())
    }

    fn is_member_invocable(&self, member: &str) -> bool {
        let _ = member;
        false
    }

    /// Invoke `member` with positional `args`.
    ///
    /// Fails with [`InteropError::UnknownMember`] if
    /// [`Interop::is_member_invocable`] is false for `member`.
    fn invoke_member(&self, member: &str, args: &[Value]) -> Result<Value, InteropError> {
        let _ = args;
        Err(InteropError::UnknownMember {
            member: member.to_string(),
        })
    }
}
