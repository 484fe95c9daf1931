use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: a fixed set of neurons applied to one shared
/// input vector.
///
/// The output is always a `Vec`, one node per neuron, even when the
/// layer holds a single neuron.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `out_features` neurons with `in_features` inputs each.
    ///
    /// A layer must hold at least one neuron, else `EmptyNetwork`.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if out_features == 0 {
            return Err(ScalarGradError::EmptyNetwork {
                operation: "Layer::new".to_string(),
            });
        }
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, activation, init, rng))
            .collect();
        Ok(Layer { neurons })
    }

    /// Wraps existing neurons into a layer.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        if neurons.is_empty() {
            return Err(ScalarGradError::EmptyNetwork {
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn in_features(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::in_features)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// Applies every neuron to the same input vector independently.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    /// Neuron order, with each neuron's weights-then-bias order inside.
    fn parameters(&self) -> Vec<Parameter> {
        self.neurons
            .iter()
            .flat_map(Module::parameters)
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, param)| (format!("neurons.{}.{}", i, name), param))
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons
            .iter()
            .map(|neuron| neuron as &dyn Module)
            .collect()
    }

    fn modules(&self) -> Vec<&dyn Module> {
        let mut all: Vec<&dyn Module> = vec![self];
        for neuron in &self.neurons {
            all.extend(neuron.modules());
        }
        all
    }
}

// --- Tests ---
