//! Directly boxed integers.
//!
//! `PhotonInt` answers the interop protocol itself instead of going through
//! a [`PObject`](crate::values::PObject) and the `Int` method table.

use crate::{
    interop::{Interop, InteropError, Members, NumericValue, NumericWidth},
    types::{INT_TYPE, Type},
    values::Value,
};

const PLUS: &str = "+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotonInt(i32);

impl PhotonInt {
    /// The only representation a `PhotonInt` fits in.
    pub const NATIVE_WIDTH: NumericWidth = NumericWidth::Int;

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for PhotonInt {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Interop for PhotonInt {
    fn type_of(&self) -> &'static Type {
        &INT_TYPE
    }

    fn is_number(&self) -> bool {
        true
    }

    fn fits_in(&self, width: NumericWidth) -> bool {
        width == Self::NATIVE_WIDTH
    }

    fn as_width(&self, width: NumericWidth) -> Result<NumericValue, InteropError> {
        match width {
            NumericWidth::Int => Ok(NumericValue::Int(self.0)),
            _ => Err(InteropError::UnsupportedRepresentation { width }),
        }
    }

    fn has_members(&self) -> bool {
        true
    }

    fn members(&self, _include_internal: bool) -> Members<'_> {
        Box::new(core::iter::once(PLUS))
    }

    fn is_member_invocable(&self, member: &str) -> bool {
        member == PLUS
    }

    fn invoke_member(&self, member: &str, args: &[Value]) -> Result<Value, InteropError> {
        if member != PLUS {
            return Err(InteropError::UnknownMember {
                member: member.to_string(),
            });
        }

        let [other] = args else {
            return Err(InteropError::ArityMismatch {
                member: member.to_string(),
                expected: 1,
                actual: args.len(),
            });
        };
        let Some(other) = other.as_photon_int() else {
            return Err(InteropError::UnsupportedType {
                member: member.to_string(),
                index: 0,
                expected: "an Int",
            });
        };

        tracing::trace!(lhs = self.0, rhs = other.0, "PhotonInt +");
        Ok(Value::Int(PhotonInt(self.0.wrapping_add(other.0))))
    }
}
