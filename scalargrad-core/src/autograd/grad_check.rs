use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index} (loss+: {loss_plus}, loss-: {loss_minus})")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Engine error during gradient check: {0}")]
    EngineError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` receives freshly built leaf nodes for `inputs` and must return
/// the scalar output of the expression under test. It is re-invoked with
/// perturbed copies of the inputs, so it has to derive everything from
/// the leaves it is handed rather than capture graph nodes of its own.
///
/// A gradient passes when it matches the central difference
/// `(f(x + eps) - f(x - eps)) / 2 eps` within `tolerance`, absolutely or
/// relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- Analytical Gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- Numerical Gradients ---
    let eval = |point: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = point.iter().map(|&x| Value::new(x)).collect();
        let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(output.data())
    };

    for (input_index, analytical_grad) in analytical.into_iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let loss_plus = eval(&plus)?;

        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;
        let loss_minus = eval(&minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if numerical_grad.is_nan() || numerical_grad.is_infinite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if analytical_grad.is_nan() || analytical_grad.is_infinite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
