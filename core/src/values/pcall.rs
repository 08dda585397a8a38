use crate::{
    interop::Interop,
    types::{ROOT_TYPE, Type},
    values::Value,
};

/// Placeholder for a call expression that has not been resolved.
///
/// It carries nothing and answers no capabilities; the evaluator replaces
/// it once the callee and arguments are known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PCall;

impl PCall {
    /// Always `None`: resolving calls is the evaluator's job.
    pub fn reduce(&self) -> Option<Value> {
        None
    }
}

impl Interop for PCall {
    fn type_of(&self) -> &'static Type {
        &ROOT_TYPE
    }
}
