use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports classical momentum. The optimizer holds live handles to the
/// parameter leaves and updates their `data` in place; velocity buffers
/// are keyed by node identity, so duplicated handles share one buffer.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    momentum_buffers: HashMap<usize, f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` without momentum.
    ///
    /// # Arguments
    ///
    /// * `params`: the parameters to optimize, usually
    ///   `module.parameters()`.
    /// * `lr`: the learning rate.
    pub fn new(params: Vec<Parameter>, lr: f64) -> Self {
        SgdOptimizer {
            params,
            lr,
            momentum: 0.0,
            momentum_buffers: HashMap::new(),
        }
    }

    /// Creates an `SgdOptimizer` with classical momentum:
    /// `v = momentum * v + g`, then `data -= lr * v`.
    pub fn with_momentum(params: Vec<Parameter>, lr: f64, momentum: f64) -> Self {
        SgdOptimizer {
            params,
            lr,
            momentum,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        log::debug!(
            "SGD step over {} parameter(s), lr={}, momentum={}",
            self.params.len(),
            self.lr,
            self.momentum
        );

        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!(
                    "SGD stepping a parameter with non-finite gradient {}",
                    grad
                );
            }

            let update = if self.momentum != 0.0 {
                let param_id = param.node_id() as usize;
                let velocity = self.momentum_buffers.entry(param_id).or_insert(0.0);
                *velocity = self.momentum * *velocity + grad;
                *velocity
            } else {
                grad
            };

            param.set_data(param.data() - self.lr * update);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}
