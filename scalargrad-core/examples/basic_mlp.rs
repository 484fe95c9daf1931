//! # Training a Small MLP with SGD
//!
//! Walks through the full training loop offered by `scalargrad-core`:
//!
//! 1. **Building a network** (`MLP::new`) with a caller-seeded generator.
//! 2. **Forward passes** producing one prediction node per sample.
//! 3. **Loss construction** over the whole batch (`mse_loss`).
//! 4. **Backward propagation** from the loss root; gradients land on
//!    every parameter.
//! 5. **Parameter updates** through `SgdOptimizer`.
//!
//! Note that the loop never zeroes gradients by hand: backward
//! propagation resets every node it reaches before accumulating.
//!
//! ## Running
//! `cargo run --example basic_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{mse_loss, Module, Reduction, MLP};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(42);

    // Four 3-feature samples with their desired outputs.
    let samples: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let targets = [1.0, -1.0, -1.0, 1.0];

    let mlp = MLP::new(3, &[4, 4, 1], &mut rng)?;
    println!("network with {} parameters", mlp.parameters().len());

    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.05);

    for epoch in 0..20 {
        let mut predictions = Vec::with_capacity(samples.len());
        for sample in &samples {
            let inputs: Vec<Value> = sample.iter().map(|x| Value::new(*x)).collect();
            let outputs = mlp.forward(&inputs)?;
            predictions.push(outputs[0].clone());
        }
        let target_values: Vec<Value> = targets.iter().map(|t| Value::new(*t)).collect();

        let loss = mse_loss(&predictions, &target_values, Reduction::Sum)?;
        loss.backward()?;
        optimizer.step()?;

        println!("epoch {:2}: loss = {:.6}", epoch, loss.data());
    }

    Ok(())
}
