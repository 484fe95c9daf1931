// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{impl_binary_operator, mul_op, pow_op};
use crate::value::Value;

// --- Forward Operation ---

/// Divides `a` by `b`.
///
/// Derived form: lowered to `a * b^(-1)`. The divisor's current data is
/// checked here, at construction, because the reciprocal is computed
/// eagerly and a zero would silently poison the graph with infinities.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    if b.data() == 0.0 {
        return Err(ScalarGradError::DivisionByZero);
    }
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

// --- Operator Overloads (call the fallible function) ---

fn div_value(a: &Value, b: &Value) -> Value {
    div_op(a, b).unwrap_or_else(|e| panic!("Value division failed: {:?}", e))
}

impl_binary_operator!(Div, div, div_value);

// --- Tests ---
