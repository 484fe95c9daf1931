//! # Activation Functions
//!
//! Non-linear activation functions for scalar graph nodes. Both record a
//! single-operand node whose derivative rule is written in terms of the
//! node's own output, so the backward pass never recomputes the forward
//! function.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`ReLU`](relu/fn.relu_op.html): rectified linear unit.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
