use crate::{dispatch::HostValue, interop::InteropError, values::Value};

// TODO: add arithmetic members for unboxed ints so hot loops can skip
// allocating an Int object per intermediate result.
pub(super) fn invoke_member(
    receiver: &HostValue,
    member: &str,
    _args: &[Value],
) -> Result<Value, InteropError> {
    Err(InteropError::UnsupportedReceiver {
        kind: receiver.kind(),
        member: member.to_string(),
    })
}
