// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built from scalar graph nodes.
//!
//! This module provides the `Optimizer` trait and the stochastic
//! gradient descent implementation used by the training examples and
//! integration tests.

// Declare modules within optim
pub mod optimizer_trait;

// Declare the sgd module
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;

// Re-export SgdOptimizer
pub use sgd::SgdOptimizer;
