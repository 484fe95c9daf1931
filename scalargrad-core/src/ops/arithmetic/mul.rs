// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::impl_binary_operator;
use crate::ops::{arity_error, Op};
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two scalar values and records the result as a new graph node.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(data, Op::Mul, vec![a.clone(), b.clone()])
}

// --- Operator Overloads ---

impl_binary_operator!(Mul, mul, mul_op);

// --- Backward Operation ---

/// d(a*b)/da = b and d(a*b)/db = a.
///
/// Both operand values are read before either gradient is written, so
/// the rule stays correct when `a` and `b` are the same node.
pub(crate) fn backward(out_grad: f64, operands: &[Value]) -> Result<(), ScalarGradError> {
    match operands {
        [a, b] => {
            let a_data = a.data();
            let b_data = b.data();
            a.acc_grad(b_data * out_grad);
            b.acc_grad(a_data * out_grad);
            Ok(())
        }
        _ => Err(arity_error(Op::Mul, operands)),
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
