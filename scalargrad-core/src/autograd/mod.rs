//! Graph traversal and gradient verification utilities.
//!
//! The backward pass itself lives on [`crate::value::Value`]; this module
//! holds the traversal primitives it relies on, the read-only graph walk
//! exposed to external renderers, and the finite-difference gradient
//! checker used to validate derivative rules.

pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::trace;
