//! Process-wide registry of the built-in types.

use hashbrown::{HashMap, hash_map::Entry};
use once_cell::sync::Lazy;

use crate::types::{INT_TYPE, ROOT_TYPE, STRING_TYPE, Type};

static BUILTINS: Lazy<TypeRegistry> = Lazy::new(|| {
    let registry = TypeRegistry::new([&*ROOT_TYPE, &*INT_TYPE, &*STRING_TYPE]);
    tracing::debug!(types = registry.len(), "registered builtin types");
    registry
});

/// Immutable name → type lookup.
#[derive(Debug)]
pub struct TypeRegistry {
    by_name: HashMap<&'static str, &'static Type>,
    // Registration order.
    types: Vec<&'static Type>,
}

impl TypeRegistry {
    /// Later types with an already-registered name are ignored.
    pub fn new(types: impl IntoIterator<Item = &'static Type>) -> Self {
        let mut by_name = HashMap::new();
        let mut ordered = Vec::new();
        for ty in types {
            if let Entry::Vacant(slot) = by_name.entry(ty.name()) {
                slot.insert(ty);
                ordered.push(ty);
            }
        }
        Self {
            by_name,
            types: ordered,
        }
    }

    /// The registry of built-in types (`Root`, `Int`, `String`).
    pub fn builtins() -> &'static TypeRegistry {
        &BUILTINS
    }

    pub fn get(&self, name: &str) -> Option<&'static Type> {
        self.by_name.get(name).copied()
    }

    /// Whether this exact type instance is registered.
    pub fn contains(&self, ty: &Type) -> bool {
        self.types.iter().any(|registered| registered.is(ty))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Type> + '_ {
        self.types.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
