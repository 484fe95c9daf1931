use scalargrad_core::autograd::check_grad;
use scalargrad_core::nn::{mse_loss, Module, Reduction, MLP};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

// Include the common helper module
mod common;
use common::{demo_dataset, leaves, seeded_rng};

// Runs one full epoch: forward every sample, reduce to a single loss
// node and return it.
fn epoch_loss(
    mlp: &MLP,
    samples: &[Vec<f64>],
    targets: &[f64],
    reduction: Reduction,
) -> Result<Value, ScalarGradError> {
    let mut predictions = Vec::with_capacity(samples.len());
    for sample in samples {
        let outputs = mlp.forward(&leaves(sample))?;
        predictions.push(outputs[0].clone());
    }
    mse_loss(&predictions, &leaves(targets), reduction)
}

#[test]
fn test_training_reduces_loss_on_fixed_dataset() -> Result<(), ScalarGradError> {
    let (samples, targets) = demo_dataset();
    let mut rng = seeded_rng(42);
    let mlp = MLP::new(3, &[2, 1], &mut rng)?;
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.05);

    // No manual gradient zeroing anywhere in this loop: backward resets
    // the reachable gradients itself before propagating.
    let mut losses = Vec::with_capacity(20);
    for _ in 0..20 {
        let loss = epoch_loss(&mlp, &samples, &targets, Reduction::Sum)?;
        loss.backward()?;
        optimizer.step()?;
        losses.push(loss.data());
    }

    let first = losses[0];
    let last = *losses.last().unwrap();
    assert!(
        last < first,
        "loss should drop over training: first {} vs last {}",
        first,
        last
    );
    let decreases = losses.windows(2).filter(|pair| pair[1] < pair[0]).count();
    assert!(
        decreases >= 15,
        "loss should decrease on most iterations, got {} of {}",
        decreases,
        losses.len() - 1
    );
    Ok(())
}

#[test]
fn test_momentum_and_decay_also_converge() -> Result<(), ScalarGradError> {
    let (samples, targets) = demo_dataset();
    let mut rng = seeded_rng(7);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng)?;
    let mut optimizer = SgdOptimizer::with_momentum(mlp.parameters(), 0.01, 0.9);

    let initial = epoch_loss(&mlp, &samples, &targets, Reduction::Mean)?.data();
    for epoch in 0..50 {
        if epoch == 25 {
            optimizer.set_learning_rate(0.005);
        }
        let loss = epoch_loss(&mlp, &samples, &targets, Reduction::Mean)?;
        loss.backward()?;
        optimizer.step()?;
    }
    let trained = epoch_loss(&mlp, &samples, &targets, Reduction::Mean)?.data();

    assert_eq!(optimizer.learning_rate(), 0.005);
    assert!(
        trained < initial,
        "momentum training should still descend: initial {} vs trained {}",
        initial,
        trained
    );
    Ok(())
}

#[test]
fn test_parameter_ordering_is_deterministic() -> Result<(), ScalarGradError> {
    let mut rng = seeded_rng(3);
    let mlp = MLP::new(2, &[3, 1], &mut rng)?;

    let first = mlp.parameters();
    let second = mlp.parameters();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        // Identical node identity, not merely identical data.
        assert_eq!(**a, **b, "parameters() must enumerate in a stable order");
    }

    let names: Vec<String> = mlp
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names.len(), first.len());
    assert_eq!(names[0], "layers.0.neurons.0.weight.0");
    Ok(())
}

#[test]
fn test_forward_arity_is_enforced_at_network_level() -> Result<(), ScalarGradError> {
    let mut rng = seeded_rng(1);
    let mlp = MLP::new(3, &[2, 1], &mut rng)?;

    let result = mlp.forward(&leaves(&[1.0, 2.0]));
    assert!(
        matches!(
            result,
            Err(ScalarGradError::ShapeMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ),
        "a 3-input network must reject a 2-element input"
    );
    Ok(())
}

#[test]
fn test_input_gradients_match_finite_differences_through_network() -> Result<(), ScalarGradError> {
    let mut rng = seeded_rng(11);
    let mlp = MLP::new(2, &[2, 1], &mut rng)?;

    // Differentiates the loss with respect to the network inputs; the
    // parameters stay fixed across the perturbed evaluations.
    let f = |inputs: &[Value]| -> Result<Value, ScalarGradError> {
        let outputs = mlp.forward(inputs)?;
        mse_loss(&outputs, &[Value::new(0.5)], Reduction::Mean)
    };
    check_grad(f, &[0.3, -0.4], 1e-5, 1e-5)
        .expect("network gradients should match central differences");
    Ok(())
}

#[test]
fn test_zero_grad_clears_gradients_after_training() -> Result<(), ScalarGradError> {
    let (samples, targets) = demo_dataset();
    let mut rng = seeded_rng(5);
    let mlp = MLP::new(3, &[2, 1], &mut rng)?;

    let loss = epoch_loss(&mlp, &samples, &targets, Reduction::Sum)?;
    loss.backward()?;
    assert!(
        mlp.parameters().iter().any(|p| p.grad() != 0.0),
        "training backward should produce at least one nonzero gradient"
    );

    mlp.zero_grad();
    for param in mlp.parameters() {
        assert_eq!(param.grad(), 0.0);
    }
    Ok(())
}
