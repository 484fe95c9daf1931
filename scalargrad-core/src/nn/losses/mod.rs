// Declare loss modules
pub mod mse;

// Re-export the loss surface
pub use mse::{mse_loss, MSELoss, Reduction};
