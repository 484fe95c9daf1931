use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::ops::{backward_rule, Op};
use crate::value::Value;

impl Value {
    /// Runs reverse-mode differentiation from this node.
    ///
    /// The gradient of every node reachable through the operand relation
    /// is reset to zero first, so repeated calls never see stale
    /// contributions from an earlier pass. One sweep in reverse
    /// topological order then applies each node's derivative rule.
    /// Afterwards `n.grad()` equals d self / d n for every reachable
    /// node `n`, with contributions from every consumer path summed.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let ordered = topological_sort(self);

        // The reachable set doubles as the reset set.
        for node in &ordered {
            node.set_grad(0.0);
        }
        self.set_grad(1.0);

        log::debug!("backward: propagating through {} node(s)", ordered.len());

        // Reverse post-order: a node's own gradient is complete before
        // the node pushes it onto its operands.
        for node in ordered.iter().rev() {
            let (op, out_data, out_grad, operands) = {
                let borrowed = node.data.borrow();
                (
                    borrowed.op,
                    borrowed.data,
                    borrowed.grad,
                    borrowed.operands.clone(),
                )
            };
            if let Op::Leaf = op {
                continue;
            }
            backward_rule(op, out_data, out_grad, &operands)?;
        }
        Ok(())
    }
}
