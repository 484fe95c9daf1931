// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::impl_binary_operator;
use crate::ops::{arity_error, Op};
use crate::value::Value;

// --- Forward Operation ---

/// Adds two scalar values and records the result as a new graph node.
///
/// The sum is computed eagerly; the node keeps handles to both operands
/// so the backward pass can reach them later.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(data, Op::Add, vec![a.clone(), b.clone()])
}

// --- Operator Overloads ---

impl_binary_operator!(Add, add, add_op);

// --- Backward Operation ---

/// d(a+b)/da = 1 and d(a+b)/db = 1, so the upstream gradient flows to
/// both operands unchanged.
pub(crate) fn backward(out_grad: f64, operands: &[Value]) -> Result<(), ScalarGradError> {
    match operands {
        [a, b] => {
            a.acc_grad(out_grad);
            b.acc_grad(out_grad);
            Ok(())
        }
        _ => Err(arity_error(Op::Add, operands)),
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
