use crate::error::ScalarGradError;
use crate::ops::{arity_error, Op};
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit (ReLU) activation function.
/// ReLU(x) = max(0, x)
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let data = if x > 0.0 { x } else { 0.0 };
    Value::from_op(data, Op::Relu, vec![a.clone()])
}

impl Value {
    /// Clamps `self` below at zero.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Backward Operation ---

/// The gradient passes through where the output is positive and is cut
/// everywhere else. At exactly zero the pass-through side loses, which
/// matches the forward clamp.
pub(crate) fn backward(
    out_data: f64,
    out_grad: f64,
    operands: &[Value],
) -> Result<(), ScalarGradError> {
    match operands {
        [a] => {
            let local = if out_data > 0.0 { 1.0 } else { 0.0 };
            a.acc_grad(local * out_grad);
            Ok(())
        }
        _ => Err(arity_error(Op::Relu, operands)),
    }
}

// --- Tests ---
