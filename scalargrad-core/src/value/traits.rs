// Identity-based trait impls for the Value handle.

use crate::ops::arithmetic::add_op;
use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle aliases the same node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Value {
    /// One node only; operands are not printed recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data.borrow();
        match &d.label {
            Some(label) => write!(
                f,
                "Value(label={:?}, data={}, grad={}, op={})",
                label, d.data, d.grad, d.op
            ),
            None => write!(f, "Value(data={}, grad={}, op={})", d.data, d.grad, d.op),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

impl PartialEq for Value {
    /// Equality is node identity: two handles are equal only when they
    /// alias the same node, never by comparing the numbers they hold.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the node address, consistent with the identity `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl From<f64> for Value {
    /// Promotes a bare constant to a leaf node.
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl Sum for Value {
    /// Sums an iterator of values into a single graph node, starting
    /// from a fresh zero leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}
