use crate::ops::Op;
use crate::value::Value;

/// Shared state behind each [`Value`] handle.
///
/// `data`, `op` and `operands` are fixed at construction. Only `grad`
/// changes afterwards, during backward passes, and `data` only through
/// the explicit parameter-update surface between training iterations.
#[derive(Debug)]
pub struct ValueData {
    /// Current scalar held by the node.
    pub data: f64,
    /// Accumulated partial derivative of the last backward root with
    /// respect to this node. Zeroed over the reachable set at the start
    /// of every backward pass.
    pub grad: f64,
    /// Operation that produced this node. `Op::Leaf` for inputs and
    /// parameters.
    pub op: Op,
    /// Direct inputs of `op`, in operand order. Empty for leaves.
    /// Strong references point from consumer to operand only, so graph
    /// construction can never form a cycle.
    pub operands: Vec<Value>,
    /// Cosmetic name shown by graph traces and debug output.
    pub label: Option<String>,
}

impl ValueData {
    pub(crate) fn new(data: f64, op: Op, operands: Vec<Value>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }
}
