//! Reverse-mode automatic differentiation over scalar values, plus a small
//! feed-forward neural network stack built on top of it.
//!
//! Every arithmetic operation on a [`Value`] records a node in a DAG; a
//! single call to [`Value::backward`] then fills in the exact gradient of
//! the root with respect to every node reachable from it. The `nn` and
//! `optim` modules compose those nodes into trainable multi-layer
//! perceptrons.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod value;
pub mod value_data;

// Re-export the core types so callers can use `scalargrad_core::Value`.
pub use error::ScalarGradError;
pub use ops::Op;
pub use value::Value;

// Re-export traits required by public functions/structs (the `Pow`
// impls on `Value` come from here).
pub use num_traits;
