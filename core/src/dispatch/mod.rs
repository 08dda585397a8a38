//! Member dispatch on unboxed host values.
//!
//! Values that flow through evaluation as plain host data (a bare integer,
//! a string) have no [`PObject`](crate::values::PObject) and therefore no
//! method table. The [`DispatchRegistry`] handles them instead: it holds at
//! most one specialization per [`HostKind`] and falls back to "not handled"
//! for every kind without one.
//!
//! New primitive kinds gain members by registering a specialization; the
//! registry itself never changes.

mod integer;


use core::fmt;

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::{
    interop::{Interop, InteropError},
    types::{INT_TYPE, ROOT_TYPE, STRING_TYPE, Type},
    values::Value,
};

static DEFAULT_REGISTRY: Lazy<DispatchRegistry> =
    Lazy::new(|| DispatchRegistry::builder().with_defaults().build());

/// Discriminant of the closed set of host receiver kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    Int,
    Long,
    Double,
    Bool,
    Str,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostKind::Int => "int",
            HostKind::Long => "long",
            HostKind::Double => "double",
            HostKind::Bool => "bool",
            HostKind::Str => "string",
        };
        write!(f, "{}", name)
    }
}

/// A raw host value that is not wrapped in a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    Str(String),
}

impl HostValue {
    pub fn kind(&self) -> HostKind {
        match self {
            HostValue::Int(_) => HostKind::Int,
            HostValue::Long(_) => HostKind::Long,
            HostValue::Double(_) => HostKind::Double,
            HostValue::Bool(_) => HostKind::Bool,
            HostValue::Str(_) => HostKind::Str,
        }
    }

    /// The language type a host value is seen as.
    pub fn type_of(&self) -> &'static Type {
        match self {
            HostValue::Int(_) => &INT_TYPE,
            HostValue::Str(_) => &STRING_TYPE,
            _ => &ROOT_TYPE,
        }
    }
}

/// Something a member can be invoked on.
#[derive(Debug, Clone, Copy)]
pub enum Receiver<'a> {
    Value(&'a Value),
    Host(&'a HostValue),
}

/// Outcome of dispatching on a host value.
#[derive(Debug)]
pub enum Dispatched {
    Handled(Value),
    /// No specialization exists for the receiver's kind.
    NotHandled,
}

/// Member implementation for one host receiver kind.
pub type Specialization =
    fn(receiver: &HostValue, member: &str, args: &[Value]) -> Result<Value, InteropError>;

/// Specializations keyed by receiver kind, with a "not handled" fallback.
///
/// Registries are immutable once built and safe to share between threads.
#[derive(Default)]
pub struct DispatchRegistry {
    specializations: HashMap<HostKind, Specialization>,
}

impl DispatchRegistry {
    pub fn builder() -> DispatchRegistryBuilder {
        DispatchRegistryBuilder::default()
    }

    /// The process-wide registry with the built-in specializations.
    pub fn global() -> &'static DispatchRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn specialization(&self, kind: HostKind) -> Option<Specialization> {
        self.specializations.get(&kind).copied()
    }

    pub fn handles(&self, kind: HostKind) -> bool {
        self.specializations.contains_key(&kind)
    }

    /// Dispatch `member` on a raw host value.
    ///
    /// The specialization is selected purely by the receiver's kind.
    pub fn invoke_member(
        &self,
        receiver: &HostValue,
        member: &str,
        args: &[Value],
    ) -> Result<Dispatched, InteropError> {
        let kind = receiver.kind();
        match self.specializations.get(&kind) {
            Some(specialization) => {
                tracing::trace!(%kind, member, "host dispatch");
                specialization(receiver, member, args).map(Dispatched::Handled)
            }
            None => Ok(Dispatched::NotHandled),
        }
    }

    /// Invoke `member` on either a wrapped value or a raw host value.
    ///
    /// Wrapped values use their own interop protocol. Host values go through
    /// the registry; an unhandled kind fails with
    /// [`InteropError::UnknownMember`].
    pub fn invoke(
        &self,
        receiver: Receiver<'_>,
        member: &str,
        args: &[Value],
    ) -> Result<Value, InteropError> {
        match receiver {
            Receiver::Value(value) => value.invoke_member(member, args),
            Receiver::Host(host) => match self.invoke_member(host, member, args)? {
                Dispatched::Handled(value) => Ok(value),
                Dispatched::NotHandled => Err(InteropError::UnknownMember {
                    member: member.to_string(),
                }),
            },
        }
    }
}

impl fmt::Debug for DispatchRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.specializations.keys()).finish()
    }
}

#[derive(Default)]
pub struct DispatchRegistryBuilder {
    specializations: HashMap<HostKind, Specialization>,
}

impl DispatchRegistryBuilder {
    /// Register the built-in specializations.
    pub fn with_defaults(self) -> Self {
        self.specialize(HostKind::Int, integer::invoke_member)
    }

    /// Register `specialization` for `kind`, replacing any earlier one.
    pub fn specialize(mut self, kind: HostKind, specialization: Specialization) -> Self {
        if self.specializations.insert(kind, specialization).is_some() {
            tracing::debug!(%kind, "replaced host specialization");
        }
        self
    }

    pub fn build(self) -> DispatchRegistry {
        tracing::debug!(kinds = self.specializations.len(), "built dispatch registry");
        DispatchRegistry {
            specializations: self.specializations,
        }
    }
}
