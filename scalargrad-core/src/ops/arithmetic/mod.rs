//! Arithmetic operations on scalar values.
//!
//! `add`, `mul` and `pow` are primitive: each records its own [`crate::ops::Op`]
//! tag and owns a derivative rule. `neg`, `sub` and `div` are derived at
//! construction time from the primitives, so the backward pass never sees
//! a dedicated tag for them.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

/// Implements the eight operand combinations of a binary operator
/// (`Value`/`&Value`/`f64` on either side) in terms of a single
/// infallible function. Plain `f64` operands are promoted to constant
/// leaf values before the call.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $func:path) => {
        impl std::ops::$trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(&self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $func(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(self, &rhs)
            }
        }

        impl<'a, 'b> std::ops::$trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $func(&self, &Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $func(self, &Value::new(rhs))
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(&Value::new(self), &rhs)
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $func(&Value::new(self), rhs)
            }
        }
    };
}

pub(crate) use impl_binary_operator;
