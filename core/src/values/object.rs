//! The object wrapper: a host payload paired with its owning type.

use core::any::Any;
use core::fmt;

use crate::{
    interop::{Interop, InteropError, Members},
    types::Type,
    values::Value,
};

/// A host payload tagged with the type whose method table it answers to.
///
/// The object owns its payload. The type is a shared, process-wide
/// singleton.
pub struct PObject {
    payload: Box<dyn Any + Send + Sync>,
    ty: &'static Type,
}

impl PObject {
    pub fn new<T>(payload: T, ty: &'static Type) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            payload: Box::new(payload),
            ty,
        }
    }

    pub fn ty(&self) -> &'static Type {
        self.ty
    }

    /// The payload, if it is a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Take the payload out, giving the object back if it is not a `T`.
    pub fn into_payload<T: Any>(self) -> Result<T, Self> {
        let ty = self.ty;
        match self.payload.downcast::<T>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload, ty }),
        }
    }
}

impl fmt::Debug for PObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PObject<{}>", self.ty.name())
    }
}

impl Interop for PObject {
    fn type_of(&self) -> &'static Type {
        self.ty
    }

    fn has_members(&self) -> bool {
        true
    }

    fn members(&self, _include_internal: bool) -> Members<'_> {
        Box::new(self.ty.methods().names())
    }

    fn is_member_invocable(&self, member: &str) -> bool {
        self.ty.methods().contains(member)
    }

    fn invoke_member(&self, member: &str, args: &[Value]) -> Result<Value, InteropError> {
        let Some(method) = self.ty.methods().get(member) else {
            return Err(InteropError::UnknownMember {
                member: member.to_string(),
            });
        };

        if method.arity() != args.len() {
            return Err(InteropError::ArityMismatch {
                member: member.to_string(),
                expected: method.arity(),
                actual: args.len(),
            });
        }

        tracing::trace!(type_name = self.ty.name(), member, args = args.len(), "invoke member");

        method.call(self, args).map_err(|source| {
            tracing::error!(
                type_name = self.ty.name(),
                member,
                error = %source,
                "registered member failed"
            );
            InteropError::InternalDispatchFailure {
                type_name: self.ty.name(),
                member: member.to_string(),
                source: Box::new(source),
            }
        })
    }
}
