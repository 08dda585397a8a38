pub mod builtins;
pub mod method_table;
pub mod registry;
mod types;

#[cfg(test)]
mod registry_test;

pub use builtins::{INT_TYPE, ROOT_TYPE, STRING_TYPE};
pub use method_table::{Method, MethodTable, MethodTableBuilder, NativeFn, RegistrationError};
pub use registry::TypeRegistry;
pub use types::Type;
