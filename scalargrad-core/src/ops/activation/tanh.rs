use crate::error::ScalarGradError;
use crate::ops::{arity_error, Op};
use crate::value::Value;

// --- Forward Operation ---

/// Applies the hyperbolic tangent to a scalar value.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    Value::from_op(data, Op::Tanh, vec![a.clone()])
}

impl Value {
    /// Applies the hyperbolic tangent, squashing `self` into `(-1, 1)`.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

// --- Backward Operation ---

/// d(tanh a)/da = 1 - tanh(a)^2, expressed through the node's own
/// output so the forward function is not evaluated a second time.
pub(crate) fn backward(
    out_data: f64,
    out_grad: f64,
    operands: &[Value],
) -> Result<(), ScalarGradError> {
    match operands {
        [a] => {
            let local = 1.0 - out_data * out_data;
            a.acc_grad(local * out_grad);
            Ok(())
        }
        _ => Err(arity_error(Op::Tanh, operands)),
    }
}

// --- Tests ---
