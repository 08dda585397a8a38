use once_cell::sync::Lazy;
use photon::*;

/// An invocation issued by a host, and the integer it should produce.
pub struct InvokeCase {
    pub name: &'static str,
    pub receiver: fn() -> Value,
    pub member: &'static str,
    pub args: fn() -> Vec<Value>,
    pub expected: Result<i32, &'static str>,
}

/// The integer carried by either integer representation.
pub fn int_of(value: &Value) -> Option<i32> {
    match value {
        Value::Int(int) => Some(int.value()),
        Value::Object(obj) if obj.ty().is(&INT_TYPE) => obj.payload::<i32>().copied(),
        _ => None,
    }
}

pub static INVOKE_CASES: Lazy<Vec<InvokeCase>> = Lazy::new(|| {
    vec![
        InvokeCase {
            name: "photon_int_plus",
            receiver: || Value::int(2),
            member: "+",
            args: || vec![Value::int(3)],
            expected: Ok(5),
        },
        InvokeCase {
            name: "int_object_plus",
            receiver: || Value::object(2i32, &INT_TYPE),
            member: "+",
            args: || vec![Value::object(3i32, &INT_TYPE)],
            expected: Ok(5),
        },
        InvokeCase {
            name: "negative_operands",
            receiver: || Value::int(-7),
            member: "+",
            args: || vec![Value::int(-8)],
            expected: Ok(-15),
        },
        InvokeCase {
            name: "photon_int_unknown_member",
            receiver: || Value::int(2),
            member: "*",
            args: || vec![Value::int(3)],
            expected: Err("unknown member '*'"),
        },
        InvokeCase {
            name: "int_object_arity",
            receiver: || Value::object(2i32, &INT_TYPE),
            member: "+",
            args: Vec::new,
            expected: Err("member '+' expects 1 argument(s), got 0"),
        },
        InvokeCase {
            name: "unresolved_call",
            receiver: Value::call,
            member: "+",
            args: || vec![Value::int(1)],
            expected: Err("unknown member '+'"),
        },
        InvokeCase {
            name: "mixed_representations",
            receiver: || Value::object(2i32, &INT_TYPE),
            member: "+",
            args: || vec![Value::int(3)],
            expected: Err("internal dispatch failure in Int.+"),
        },
    ]
});
