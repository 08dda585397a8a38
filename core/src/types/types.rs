use core::fmt;

use crate::{
    interop::Interop,
    types::{ROOT_TYPE, method_table::MethodTable},
};

/// A runtime type: a name plus an immutable table of native members.
///
/// Types are process-wide singletons compared by identity; two distinct
/// `Type` instances are never equal, even if they share a name.
pub struct Type {
    name: &'static str,
    methods: MethodTable,
}

impl Type {
    pub fn new(name: &'static str, methods: MethodTable) -> Self {
        Self { name, methods }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Identity comparison.
    pub fn is(&self, other: &Type) -> bool {
        core::ptr::eq(self, other)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// Types are typed by the root type and are never invocation receivers, so
// every other capability keeps its default.
impl Interop for Type {
    fn type_of(&self) -> &'static Type {
        &ROOT_TYPE
    }
}
