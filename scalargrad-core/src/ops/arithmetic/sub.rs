use crate::ops::arithmetic::{add_op, impl_binary_operator, neg_op};
use crate::value::Value;

// --- Forward Operation ---

/// Subtracts `b` from `a`.
///
/// Derived form: lowered to `a + (-b)`, so the graph records an `Add`
/// node whose second operand is the negation of `b`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Operator Overloads ---

impl_binary_operator!(Sub, sub, sub_op);

// --- Tests ---
