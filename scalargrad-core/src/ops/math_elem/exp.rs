// scalargrad-core/src/ops/math_elem/exp.rs

use crate::error::ScalarGradError;
use crate::ops::{arity_error, Op};
use crate::value::Value;

// --- Forward Operation ---

/// Computes the natural exponential of a scalar value.
///
/// Large inputs overflow to infinity and very negative inputs underflow
/// to zero, exactly as `f64::exp` does; the engine records whatever the
/// forward computation produced.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, Op::Exp, vec![a.clone()])
}

impl Value {
    /// Computes `e` raised to `self`.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

// --- Backward Operation ---

/// d(e^a)/da = e^a, which is the node's own output.
pub(crate) fn backward(
    out_data: f64,
    out_grad: f64,
    operands: &[Value],
) -> Result<(), ScalarGradError> {
    match operands {
        [a] => {
            a.acc_grad(out_data * out_grad);
            Ok(())
        }
        _ => Err(arity_error(Op::Exp, operands)),
    }
}

// --- Tests ---
