// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between prediction and
/// target nodes.
///
/// The loss is built out of ordinary graph operations, so backward
/// propagation flows through it into predictions and targets alike.
#[derive(Debug, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    /// Creates a new `MSELoss` module from a reduction name.
    ///
    /// # Panics
    /// Panics when the reduction string is not recognized; use
    /// [`Reduction::from_str`] directly to keep the `Result`.
    pub fn new(reduction_str: &str) -> Self {
        let reduction = Reduction::from_str(reduction_str)
            .unwrap_or_else(|e| panic!("Failed to create MSELoss: {}", e));
        MSELoss { reduction }
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[Value],
    ) -> Result<Value, ScalarGradError> {
        mse_loss(predictions, targets, self.reduction)
    }
}

/// Free-function form of the MSE loss.
///
/// Builds `sum((p_i - t_i)^2)` (divided by the length for
/// `Reduction::Mean`) and returns the root node.
pub fn mse_loss(
    predictions: &[Value],
    targets: &[Value],
    reduction: Reduction,
) -> Result<Value, ScalarGradError> {
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyValueList {
            operation: "mse_loss".to_string(),
        });
    }
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: "mse_loss".to_string(),
        });
    }

    let total: Value = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| {
            let diff = p - t;
            &diff * &diff
        })
        .sum();

    match reduction {
        Reduction::Sum => Ok(total),
        Reduction::Mean => Ok(total / predictions.len() as f64),
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
