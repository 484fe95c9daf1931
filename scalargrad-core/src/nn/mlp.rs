use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::Activation;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence, each layer's
/// output feeding the next layer's input.
#[derive(Debug)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Creates an all-tanh network with uniform initialization.
    ///
    /// `layer_sizes` gives the neuron count of each layer in order; the
    /// first layer reads `in_features` inputs.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let activations = vec![Activation::Tanh; layer_sizes.len()];
        MLP::with_config(in_features, layer_sizes, &activations, Init::Uniform, rng)
    }

    /// Creates a network with per-layer activations and a chosen
    /// initialization scheme. A common configuration ends with
    /// `Activation::Linear` so the output is not squashed.
    pub fn with_config<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        activations: &[Activation],
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::EmptyNetwork {
                operation: "MLP::with_config".to_string(),
            });
        }
        if activations.len() != layer_sizes.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: layer_sizes.len(),
                actual: activations.len(),
                operation: "MLP::with_config".to_string(),
            });
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = in_features;
        for (size, activation) in layer_sizes.iter().zip(activations) {
            layers.push(Layer::new(fan_in, *size, *activation, init, rng)?);
            fan_in = *size;
        }

        let mlp = MLP { layers };
        log::debug!(
            "constructed MLP {} -> {:?} with {} parameters",
            in_features,
            layer_sizes,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }

    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }
}

impl Module for MLP {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, param)| (format!("layers.{}.{}", i, name), param))
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|layer| layer as &dyn Module).collect()
    }

    fn modules(&self) -> Vec<&dyn Module> {
        let mut all: Vec<&dyn Module> = vec![self];
        for layer in &self.layers {
            all.extend(layer.modules());
        }
        all
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parameter_counts_follow_the_architecture() {
        let mut rng = StdRng::seed_from_u64(42);

        let big = MLP::new(3, &[4, 4, 1], &mut rng).unwrap();
        // 4*(3+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(big.parameters().len(), 41);

        let small = MLP::new(2, &[2, 1], &mut rng).unwrap();
        assert_eq!(small.parameters().len(), 9);

        let single = MLP::new(2, &[1], &mut rng).unwrap();
        assert_eq!(single.parameters().len(), 3);
    }

    #[test]
    fn forward_threads_the_layer_outputs() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(42);
        let mlp = MLP::new(3, &[4, 4, 1], &mut rng)?;

        let inputs = [Value::new(2.0), Value::new(3.0), Value::new(-1.0)];
        let outputs = mlp.forward(&inputs)?;

        assert_eq!(outputs.len(), 1);
        // The final tanh keeps the output strictly inside (-1, 1).
        assert!(outputs[0].data() > -1.0 && outputs[0].data() < 1.0);
        Ok(())
    }

    #[test]
    fn backward_reaches_the_first_layer() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(42);
        let mlp = MLP::new(2, &[2, 1], &mut rng)?;

        let outputs = mlp.forward(&[Value::new(0.5), Value::new(-0.5)])?;
        outputs[0].backward()?;

        // The final neuron's bias always receives d out/d b = 1 - out^2,
        // which is nonzero because tanh never reaches +-1.
        let params = mlp.parameters();
        let final_bias = &params[params.len() - 1];
        assert!(final_bias.grad() != 0.0);
        Ok(())
    }

    #[test]
    fn empty_architectures_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            MLP::new(3, &[], &mut rng),
            Err(ScalarGradError::EmptyNetwork { .. })
        ));
    }

    #[test]
    fn activation_list_must_match_the_layer_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = MLP::with_config(
            2,
            &[3, 1],
            &[Activation::Tanh],
            Init::Uniform,
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(ScalarGradError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn linear_output_layers_are_not_squashed() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(9);
        let mlp = MLP::with_config(
            1,
            &[4, 1],
            &[Activation::Relu, Activation::Linear],
            Init::Normal,
            &mut rng,
        )?;

        // Scale the input up; a linear head may leave (-1, 1), a tanh
        // head never could. Only the structure is asserted here.
        let outputs = mlp.forward(&[Value::new(100.0)])?;
        assert_eq!(outputs.len(), 1);
        assert_eq!(mlp.layers()[1].neurons()[0].activation(), Activation::Linear);
        Ok(())
    }

    #[test]
    fn seeding_makes_construction_deterministic() {
        let mut first = StdRng::seed_from_u64(1234);
        let mut second = StdRng::seed_from_u64(1234);

        let a = MLP::new(2, &[3, 2], &mut first).unwrap();
        let b = MLP::new(2, &[3, 2], &mut second).unwrap();

        let a_data: Vec<f64> = a.parameters().iter().map(|p| p.data()).collect();
        let b_data: Vec<f64> = b.parameters().iter().map(|p| p.data()).collect();
        assert_eq!(a_data, b_data);

        let mut third = StdRng::seed_from_u64(4321);
        let c = MLP::new(2, &[3, 2], &mut third).unwrap();
        let c_data: Vec<f64> = c.parameters().iter().map(|p| p.data()).collect();
        assert!(a_data.iter().zip(&c_data).any(|(x, y)| x != y));
    }

    #[test]
    fn named_parameters_carry_full_dotted_paths() {
        let mut rng = StdRng::seed_from_u64(2);
        let mlp = MLP::new(2, &[2, 1], &mut rng).unwrap();

        let named = mlp.named_parameters();
        assert_eq!(named.len(), 9);
        assert_eq!(named[0].0, "layers.0.neurons.0.weight.0");
        assert_eq!(named[8].0, "layers.1.neurons.0.bias");

        // The named view aliases the same leaves as parameters().
        let params = mlp.parameters();
        assert_relative_eq!(named[0].1.data(), params[0].data());
        assert_eq!(*named[0].1, *params[0]);
    }
}
