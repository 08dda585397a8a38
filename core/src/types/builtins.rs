//! Built-in type singletons.
//!
//! Each singleton is created on first use and shared read-only for the rest
//! of the process.

use once_cell::sync::Lazy;

use crate::{
    interop::InteropError,
    types::{MethodTable, Type},
    values::{PObject, Value},
};

/// The terminal type: the type of every type, including itself.
pub static ROOT_TYPE: Lazy<Type> = Lazy::new(|| Type::new("Root", MethodTable::empty()));

/// Type of boxed 32-bit integers.
pub static INT_TYPE: Lazy<Type> = Lazy::new(|| {
    let methods = MethodTable::builder("Int")
        .method("+", 1, int_plus)
        .build()
        .expect("Int members are unique");
    Type::new("Int", methods)
});

/// Type of host strings. Has no members yet.
pub static STRING_TYPE: Lazy<Type> = Lazy::new(|| Type::new("String", MethodTable::empty()));

/// `Int.+`: sum of the receiver and one Int object, wrapping on overflow.
fn int_plus(this: &PObject, args: &[Value]) -> Result<Value, InteropError> {
    let [other] = args else {
        return Err(InteropError::ArityMismatch {
            member: "+".to_string(),
            expected: 1,
            actual: args.len(),
        });
    };

    let a = int_payload(this).ok_or_else(|| InteropError::InvalidReceiver {
        member: "+".to_string(),
        expected: "an Int object",
    })?;
    let b = other
        .as_object()
        .and_then(int_payload)
        .ok_or_else(|| InteropError::UnsupportedType {
            member: "+".to_string(),
            index: 0,
            expected: "an Int object",
        })?;

    Ok(Value::object(a.wrapping_add(b), &INT_TYPE))
}

fn int_payload(obj: &PObject) -> Option<i32> {
    if !obj.ty().is(&INT_TYPE) {
        return None;
    }
    obj.payload::<i32>().copied()
}
