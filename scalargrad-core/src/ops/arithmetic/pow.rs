// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::ops::{arity_error, Op};
use crate::value::Value;
use num_traits::Pow;

// --- Forward Operation ---

/// Raises a scalar value to a fixed real exponent.
///
/// The exponent is an ordinary `f64`, not a graph node, so no gradient
/// is ever computed with respect to it. Non-finite exponents are
/// rejected here because the power rule would turn them into NaN in
/// every gradient behind this node.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    let data = base.data().powf(exponent);
    Ok(Value::from_op(data, Op::Pow(exponent), vec![base.clone()]))
}

// --- Value Method (calls fallible function) ---

impl Value {
    /// Raises `self` to `exponent`.
    ///
    /// # Panics
    /// Panics when the exponent is not finite; use [`pow_op`] to handle
    /// that case as a `Result`.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
            .unwrap_or_else(|e| panic!("Value power operation failed: {:?}", e))
    }
}

// --- Operator Trait (calls fallible function) ---

impl Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        Value::pow(self, exponent)
    }
}

impl Pow<f64> for Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        Value::pow(&self, exponent)
    }
}

// --- Backward Operation ---

/// d(a^k)/da = k * a^(k-1), with the exponent taken from the node's tag.
pub(crate) fn backward(
    exponent: f64,
    out_grad: f64,
    operands: &[Value],
) -> Result<(), ScalarGradError> {
    match operands {
        [base] => {
            let local = exponent * base.data().powf(exponent - 1.0);
            base.acc_grad(local * out_grad);
            Ok(())
        }
        _ => Err(arity_error(Op::Pow(exponent), operands)),
    }
}

// --- Tests ---
