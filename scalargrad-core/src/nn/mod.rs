// src/nn/mod.rs
// Building blocks for feed-forward networks over scalar graph nodes.

pub mod init;
pub mod layer;
pub mod losses; // Declare losses module
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;
pub mod parameter; // struct Parameter

// Re-export common items
pub use init::Init;
pub use layer::Layer;
pub use losses::{mse_loss, MSELoss, Reduction};
pub use mlp::MLP;
pub use module::Module;
pub use neuron::{Activation, Neuron};
pub use parameter::Parameter;
