//! Operations for building the computation graph.
//!
//! Each operation lives in its own file and follows the same pattern: a
//! `*_op` function that computes the result eagerly and records the new
//! node's operands, plus the operator-trait impls that make the op usable
//! through standard syntax. The matching derivative rules are collected
//! in [`backward_rule`], keyed by the [`Op`] tag each node carries.
//!
//! Submodules:
//! - `arithmetic`: add, mul, pow and the forms derived from them
//!   (neg, sub, div).
//! - `activation`: tanh, relu.
//! - `math_elem`: exp.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;

/// Tag recording which operation produced a node.
///
/// The set is closed: derived operations (neg, sub, div) are expressed
/// through these tags rather than adding their own, so the rule table
/// below stays the single source of derivative truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Constructed directly; no operands.
    Leaf,
    Add,
    Mul,
    /// Raised to a fixed real exponent. The exponent lives in the tag
    /// because it is a constant of the operation, not a graph node.
    Pow(f64),
    Tanh,
    Relu,
    Exp,
}

impl Op {
    /// Number of operands the tag expects.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Tanh | Op::Relu | Op::Exp => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "^{}", exponent),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "relu"),
            Op::Exp => write!(f, "exp"),
        }
    }
}

/// Derivative rule table, keyed by the producing operation's tag.
///
/// Invoked once per node during the backward traversal, after the node's
/// own gradient is complete. `out_data` and `out_grad` are the node's
/// value and gradient; the rule pushes contributions onto its operands.
pub(crate) fn backward_rule(
    op: Op,
    out_data: f64,
    out_grad: f64,
    operands: &[Value],
) -> Result<(), ScalarGradError> {
    match op {
        Op::Leaf => Ok(()),
        Op::Add => arithmetic::add::backward(out_grad, operands),
        Op::Mul => arithmetic::mul::backward(out_grad, operands),
        Op::Pow(exponent) => arithmetic::pow::backward(exponent, out_grad, operands),
        Op::Tanh => activation::tanh::backward(out_data, out_grad, operands),
        Op::Relu => activation::relu::backward(out_data, out_grad, operands),
        Op::Exp => math_elem::exp::backward(out_data, out_grad, operands),
    }
}

/// Reports an arity violation between a tag and its stored operands.
/// Unreachable through the public constructors; kept so the rule table
/// reports instead of panicking if a construction path ever regresses.
pub(crate) fn arity_error(op: Op, operands: &[Value]) -> ScalarGradError {
    ScalarGradError::InternalError(format!(
        "{:?} backward expected {} operand(s), found {}",
        op,
        op.arity(),
        operands.len()
    ))
}
