//! The scalar node handle: construction, accessors and the backward
//! entry point.

pub mod autograd_methods;
pub mod traits;

use crate::autograd::graph::NodeId;
use crate::ops::Op;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::rc::Rc;

/// A handle to one scalar node in the computation graph.
///
/// `Value` is a cheap reference-counted handle: cloning it aliases the
/// same node, and equality/hashing go by node identity rather than by
/// the number currently held. Arithmetic over `Value`s builds the graph
/// eagerly; [`Value::backward`] then fills in `grad` on every node
/// reachable from the root it is called on.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, Op::Leaf, Vec::new()))),
        }
    }

    /// Creates a labelled leaf node. Labels are cosmetic: graph traces
    /// and debug output show them, computation never reads them.
    pub fn with_label(data: f64, label: &str) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Constructor for nodes produced by an operation.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, op, operands))),
        }
    }

    /// Current scalar held by this node.
    pub fn data(&self) -> f64 {
        self.data.borrow().data
    }

    /// Overwrites the scalar held by this node.
    ///
    /// Intended for parameter updates between training iterations.
    /// Writing to a non-leaf node desynchronizes it from the expression
    /// that produced it; nothing re-runs the forward computation.
    pub fn set_data(&self, data: f64) {
        self.data.borrow_mut().data = data;
    }

    /// Gradient accumulated by the most recent backward pass.
    pub fn grad(&self) -> f64 {
        self.data.borrow().grad
    }

    /// Overwrites the gradient.
    pub fn set_grad(&self, grad: f64) {
        self.data.borrow_mut().grad = grad;
    }

    /// Resets the gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds `delta` to the stored gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.data.borrow_mut().grad += delta;
    }

    /// Operation that produced this node.
    pub fn op(&self) -> Op {
        self.data.borrow().op
    }

    /// Direct operands of the producing operation, as handle clones.
    pub fn operands(&self) -> Vec<Value> {
        self.data.borrow().operands.clone()
    }

    /// `true` if this node was constructed directly rather than by an
    /// operation.
    pub fn is_leaf(&self) -> bool {
        matches!(self.op(), Op::Leaf)
    }

    /// Cosmetic label, if one was set.
    pub fn label(&self) -> Option<String> {
        self.data.borrow().label.clone()
    }

    /// Attaches a cosmetic label.
    pub fn set_label(&self, label: &str) {
        self.data.borrow_mut().label = Some(label.to_string());
    }

    /// Stable identity of the underlying node, used as graph key.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}
