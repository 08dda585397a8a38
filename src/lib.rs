//! Photon - the value and interop layer of an embeddable interpreted language
//!
//! # Overview
//!
//! Photon values come in a small closed set of kinds: boxed integers, host
//! objects tagged with a type, types themselves, and unresolved calls. A
//! host never looks inside them. It asks questions through the [`Interop`]
//! protocol instead:
//!
//! - is this a number, and in which representation?
//! - which members does it have?
//! - invoke member `name` with these arguments.
//!
//! # Quick Start
//!
//! ```
//! use photon::{Interop, NumericValue, NumericWidth, Value, INT_TYPE};
//!
//! // Directly boxed integers answer the protocol themselves.
//! let sum = Value::int(2).invoke_member("+", &[Value::int(3)]).unwrap();
//! assert_eq!(sum.as_width(NumericWidth::Int).unwrap(), NumericValue::Int(5));
//!
//! // Host objects delegate to their type's method table.
//! let two = Value::object(2i32, &INT_TYPE);
//! let sum = two.invoke_member("+", &[Value::object(3i32, &INT_TYPE)]).unwrap();
//! assert_eq!(sum.as_object().unwrap().payload::<i32>(), Some(&5));
//! ```
//!
//! # Custom Types
//!
//! Register native members on a new type with a [`MethodTable`]:
//!
//! ```
//! use once_cell::sync::Lazy;
//! use photon::{Interop, InteropError, MethodTable, PObject, Type, Value};
//!
//! fn double(this: &PObject, _args: &[Value]) -> Result<Value, InteropError> {
//!     Ok(Value::int(this.payload::<i32>().copied().unwrap_or_default() * 2))
//! }
//!
//! static COUNTER: Lazy<Type> = Lazy::new(|| {
//!     let methods = MethodTable::builder("Counter")
//!         .method("double", 0, double)
//!         .build()
//!         .expect("unique members");
//!     Type::new("Counter", methods)
//! });
//!
//! let counter = Value::object(21i32, &COUNTER);
//! assert!(counter.is_member_invocable("double"));
//! assert_eq!(counter.invoke_member("double", &[]).unwrap().as_int(), Some(42));
//! ```

// Re-export the interop protocol
pub use photon_core::interop::{Interop, InteropError, Members, NumericValue, NumericWidth};

// Re-export values and types
pub use photon_core::types::{
    self, INT_TYPE, Method, MethodTable, MethodTableBuilder, NativeFn, ROOT_TYPE,
    RegistrationError, STRING_TYPE, Type, TypeRegistry,
};
pub use photon_core::values::{self, PCall, PObject, PhotonInt, Value};

// Re-export host dispatch
pub use photon_core::dispatch::{
    self, DispatchRegistry, Dispatched, HostKind, HostValue, Receiver, Specialization,
};

// Re-export diagnostics and errors
pub use photon_core::Error;
pub use photon_core::diagnostics::{Location, LocationError, PhotonError, PhotonErrorKind};
