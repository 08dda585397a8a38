use crate::{
    interop::{Interop, InteropError, Members, NumericValue, NumericWidth},
    types::Type,
    values::{PCall, PObject, PhotonInt},
};

/// A runtime value.
///
/// The set of kinds is closed; hosts interact with any of them through
/// [`Interop`], which `Value` forwards to the wrapped kind.
#[derive(Debug)]
pub enum Value {
    /// A host payload tagged with its owning type.
    Object(PObject),
    /// A directly boxed 32-bit integer.
    Int(PhotonInt),
    /// A call expression the evaluator has not resolved yet.
    Call(PCall),
    /// A type used as a value.
    Type(&'static Type),
}

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    pub fn object<T>(payload: T, ty: &'static Type) -> Self
    where
        T: core::any::Any + Send + Sync,
    {
        Value::Object(PObject::new(payload, ty))
    }

    pub fn int(value: i32) -> Self {
        Value::Int(PhotonInt::new(value))
    }

    pub fn call() -> Self {
        Value::Call(PCall)
    }

    pub fn of_type(ty: &'static Type) -> Self {
        Value::Type(ty)
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn as_object(&self) -> Option<&PObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_photon_int(&self) -> Option<&PhotonInt> {
        match self {
            Value::Int(int) => Some(int),
            _ => None,
        }
    }

    /// The integer held by a [`PhotonInt`].
    pub fn as_int(&self) -> Option<i32> {
        self.as_photon_int().map(PhotonInt::value)
    }

    pub fn as_type(&self) -> Option<&'static Type> {
        match self {
            Value::Type(ty) => Some(*ty),
            _ => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Value::Call(_))
    }

    /// Reduce to a concrete value.
    ///
    /// Every kind reduces to itself except an unresolved call, which yields
    /// nothing until the evaluator replaces it.
    pub fn reduce(self) -> Option<Value> {
        match self {
            Value::Call(call) => call.reduce(),
            other => Some(other),
        }
    }

    fn as_interop(&self) -> &dyn Interop {
        match self {
            Value::Object(obj) => obj,
            Value::Int(int) => int,
            Value::Call(call) => call,
            Value::Type(ty) => *ty,
        }
    }
}

impl Interop for Value {
    fn type_of(&self) -> &'static Type {
        self.as_interop().type_of()
    }

    fn is_number(&self) -> bool {
        self.as_interop().is_number()
    }

    fn fits_in(&self, width: NumericWidth) -> bool {
        self.as_interop().fits_in(width)
    }

    fn as_width(&self, width: NumericWidth) -> Result<NumericValue, InteropError> {
        self.as_interop().as_width(width)
    }

    fn has_members(&self) -> bool {
        self.as_interop().has_members()
    }

    fn members(&self, include_internal: bool) -> Members<'_> {
        self.as_interop().members(include_internal)
    }

    fn is_member_invocable(&self, member: &str) -> bool {
        self.as_interop().is_member_invocable(member)
    }

    fn invoke_member(&self, member: &str, args: &[Value]) -> Result<Value, InteropError> {
        self.as_interop().invoke_member(member, args)
    }
}

impl From<PObject> for Value {
    fn from(obj: PObject) -> Self {
        Value::Object(obj)
    }
}

impl From<PhotonInt> for Value {
    fn from(int: PhotonInt) -> Self {
        Value::Int(int)
    }
}

impl From<PCall> for Value {
    fn from(call: PCall) -> Self {
        Value::Call(call)
    }
}

impl From<&'static Type> for Value {
    fn from(ty: &'static Type) -> Self {
        Value::Type(ty)
    }
}
