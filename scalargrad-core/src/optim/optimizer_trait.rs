use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on
/// their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the optimization algorithm to every managed parameter,
    /// using the gradients accumulated by the last backward pass. The
    /// parameter leaves are mutated in place; the surrounding graph is
    /// untouched.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Backward propagation resets the gradients of every node it
    /// reaches on its own, so this is only needed for parameters the
    /// next backward pass will not visit.
    fn zero_grad(&mut self);

    /// Returns the current learning rate.
    fn learning_rate(&self) -> f64;

    /// Replaces the learning rate used by subsequent steps, for callers
    /// implementing decay schedules by hand.
    fn set_learning_rate(&mut self, lr: f64);
}
