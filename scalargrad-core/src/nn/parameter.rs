use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a Value indicating it is a learnable parameter of a
/// Module.
///
/// A `Parameter` shares its node with the graph: cloning it, or the
/// `Value` handles returned from `parameters()`, always refers to the
/// same underlying leaf. The optional name is the leaf component of the
/// dotted paths reported by `named_parameters`.
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Creates a new Parameter from a Value, optionally naming it.
    pub fn new(value: Value, name: Option<String>) -> Self {
        Parameter { value, name }
    }

    /// Creates a new unnamed Parameter.
    pub fn new_unnamed(value: Value) -> Self {
        Parameter { value, name: None }
    }

    /// Returns the parameter's name, when one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.value)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the underlying handle (shallow via Rc),
    /// so both copies train the same leaf.
    fn clone(&self) -> Self {
        Parameter {
            value: self.value.clone(),
            name: self.name.clone(),
        }
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
