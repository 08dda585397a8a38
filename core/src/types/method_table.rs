//! Member tables owned by types.
//!
//! A [`MethodTable`] maps member names to native functions of a fixed arity.
//! Tables are assembled once through [`MethodTableBuilder`] and never change
//! afterwards.

use hashbrown::HashMap;
use thiserror::Error;

use crate::{
    interop::InteropError,
    values::{PObject, Value},
};

/// Signature of a native member.
///
/// `this` is the object the member was invoked on; `args` holds exactly
/// [`Method::arity`] positional arguments.
pub type NativeFn = fn(this: &PObject, args: &[Value]) -> Result<Value, InteropError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("type '{type_name}' already registers member '{member}'")]
    DuplicateMember {
        type_name: &'static str,
        member: &'static str,
    },
}

#[derive(Clone, Copy)]
pub struct Method {
    arity: usize,
    func: NativeFn,
}

impl Method {
    pub fn new(arity: usize, func: NativeFn) -> Self {
        Self { arity, func }
    }

    /// Number of arguments, not counting the receiver.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Call the native function without checking the arity.
    pub fn call(&self, this: &PObject, args: &[Value]) -> Result<Value, InteropError> {
        (self.func)(this, args)
    }
}

impl core::fmt::Debug for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Method").field("arity", &self.arity).finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct MethodTable {
    methods: HashMap<&'static str, Method>,
    // Sorted, for deterministic member listing.
    names: Vec<&'static str>,
}

impl MethodTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder(type_name: &'static str) -> MethodTableBuilder {
        MethodTableBuilder::new(type_name)
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Member names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }
}

/// Builder for [`MethodTable`].
///
/// # Example
///
/// ```
/// use photon_core::types::{MethodTable, Type};
/// use photon_core::values::{PObject, Value};
/// use photon_core::interop::InteropError;
///
/// fn len(this: &PObject, _args: &[Value]) -> Result<Value, InteropError> {
///     let s = this.payload::<String>().map(|s| s.len()).unwrap_or(0);
///     Ok(Value::int(s as i32))
/// }
///
/// let methods = MethodTable::builder("Text").method("len", 0, len).build().unwrap();
/// let text = Type::new("Text", methods);
/// assert!(text.methods().contains("len"));
/// ```
pub struct MethodTableBuilder {
    type_name: &'static str,
    entries: Vec<(&'static str, Method)>,
}

impl MethodTableBuilder {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            entries: Vec::new(),
        }
    }

    /// Register a native member taking `arity` arguments.
    pub fn method(mut self, name: &'static str, arity: usize, func: NativeFn) -> Self {
        self.entries.push((name, Method::new(arity, func)));
        self
    }

    /// Freeze the table. Fails if a name was registered twice.
    pub fn build(self) -> Result<MethodTable, RegistrationError> {
        let mut methods = HashMap::with_capacity(self.entries.len());
        let mut names = Vec::with_capacity(self.entries.len());

        for (name, method) in self.entries {
            if methods.insert(name, method).is_some() {
                return Err(RegistrationError::DuplicateMember {
                    type_name: self.type_name,
                    member: name,
                });
            }
            names.push(name);
        }
        names.sort_unstable();

        tracing::debug!(type_name = self.type_name, members = names.len(), "built method table");
        Ok(MethodTable { methods, names })
    }
}
