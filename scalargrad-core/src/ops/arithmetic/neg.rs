use crate::ops::arithmetic::mul_op;
use crate::value::Value;
use std::ops::Neg;

// --- Forward Operation ---

/// Negates a scalar value.
///
/// Derived form: lowered to `a * (-1)` at construction, so the graph
/// records a plain `Mul` node and the rule table needs no extra entry.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

// --- Operator Overloads ---

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// --- Tests ---
