use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// Non-linearity applied after a neuron's affine combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Hyperbolic tangent, the historical default for small nets.
    #[default]
    Tanh,
    /// Rectified linear unit.
    Relu,
    /// No squashing; typically used for output layers.
    Linear,
}

impl Activation {
    pub(crate) fn apply(self, x: &Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Linear => x.clone(),
        }
    }
}

/// A single neuron: `activation(sum(w_i * x_i) + b)`.
///
/// Weights and bias are leaf nodes created once at construction; between
/// training iterations only their `data` changes, the nodes themselves
/// persist.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights and a bias, all drawn
    /// from `init` using the caller's generator.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Self {
        let weights = (0..in_features)
            .map(|i| {
                Parameter::new(
                    Value::new(init.sample(rng)),
                    Some(format!("weight.{}", i)),
                )
            })
            .collect();
        let bias = Parameter::new(Value::new(init.sample(rng)), Some("bias".to_string()));
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Builds a neuron from existing parameters, for callers that share
    /// or restore weights.
    pub fn from_parts(weights: Vec<Parameter>, bias: Parameter, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Number of inputs the neuron was built for.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Applies the neuron to one input vector, returning a single node.
    ///
    /// The input length must equal the weight count, else `ShapeMismatch`.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut acc: Value = (*self.bias).clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            acc = acc + &**w * x;
        }
        Ok(self.activation.apply(&acc))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let output = Neuron::forward(self, inputs)?;
        Ok(vec![output])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.to_vec();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named = Vec::with_capacity(self.weights.len() + 1);
        for (i, w) in self.weights.iter().enumerate() {
            let name = w
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("weight.{}", i));
            named.push((name, w.clone()));
        }
        let bias_name = self.bias.name().unwrap_or("bias").to_string();
        named.push((bias_name, self.bias.clone()));
        named
    }

    fn modules(&self) -> Vec<&dyn Module> {
        vec![self]
    }
}

// --- Tests ---
