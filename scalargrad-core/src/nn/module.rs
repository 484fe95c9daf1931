use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (layers, containers,
/// single neurons).
///
/// A module maps a slice of input nodes to a vector of output nodes and
/// exposes its learnable parameters. Modules hand out parameter handles
/// by value: the clones alias the leaves they came from, so an optimizer
/// holding them updates the module's own weights.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: the input nodes, one per declared input feature.
    ///
    /// # Returns
    /// The output nodes of the module, or a `ScalarGradError` when the
    /// input length does not match what the module was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those
    /// of sub-modules, in deterministic construction order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns all learnable parameters along with their names.
    /// Names follow a dotted hierarchical structure for nested modules
    /// (e.g. `layers.0.neurons.1.weight.2`, `layers.0.neurons.1.bias`).
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    /// Returns a vector of direct child `Module`s.
    /// Modules that do not contain other modules return an empty vector.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Returns all modules in the tree (self plus descendants), depth-first.
    fn modules(&self) -> Vec<&dyn Module>;

    /// Clears the gradient of every parameter.
    ///
    /// Backward propagation already resets the gradients of the nodes it
    /// reaches, so calling this between training steps is optional; it
    /// exists for parameters that the next backward pass will not visit.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
