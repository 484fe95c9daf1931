use thiserror::Error;

/// Error type for all fallible operations in the crate.
///
/// Every error is raised synchronously at the violating operation.
/// Construction and forward errors abort the current expression build,
/// backward errors abort the current propagation; previously constructed
/// nodes stay valid and reusable either way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalarGradError {
    /// Division where the divisor node currently holds zero.
    #[error("Division by a zero-valued operand")]
    DivisionByZero,

    /// `pow` exponents must be finite real constants.
    #[error("Invalid exponent {exponent}: expected a finite real constant")]
    InvalidExponent { exponent: f64 },

    /// Input length does not match what the module was built for.
    #[error("Shape mismatch in {operation}: expected {expected} input(s), got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    /// A network was declared with no layers, or a layer with no neurons.
    #[error("Empty network in {operation}: at least one layer with one neuron is required")]
    EmptyNetwork { operation: String },

    /// An operation over a collection of values received an empty one.
    #[error("Empty value list passed to {operation}")]
    EmptyValueList { operation: String },

    /// Requested variant or mode is not supported.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invariant violation inside the engine. Indicates a bug.
    #[error("Internal error: {0}")]
    InternalError(String),
}
