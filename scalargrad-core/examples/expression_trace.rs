//! # Tracing an Expression Graph
//!
//! Builds a two-input tanh neuron out of labelled leaves, runs backward
//! propagation, then renders the traced graph as Graphviz DOT on stdout:
//! every node shows its label (or operation symbol), data and gradient.
//!
//! ## Running
//! `cargo run --example expression_trace > graph.dot`
//! `dot -Tsvg graph.dot -o graph.svg`

use scalargrad_core::autograd::trace;
use scalargrad_core::{ScalarGradError, Value};
use std::collections::HashMap;

fn main() -> Result<(), ScalarGradError> {
    // Inputs and weights of a single neuron, plus a bias chosen to land
    // the pre-activation in tanh's curved region.
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.8813735870195432, "b");

    let n = &(&x1 * &w1) + &(&x2 * &w2);
    let pre = &n + &b;
    pre.set_label("pre");
    let o = pre.tanh();
    o.set_label("o");

    o.backward()?;

    let (nodes, edges) = trace(&o);

    // Stable DOT ids straight from the trace's first-visit order.
    let ids: HashMap<Value, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.clone(), i))
        .collect();

    println!("digraph {{");
    println!("  rankdir=LR;");
    for (i, node) in nodes.iter().enumerate() {
        let label = node.label().unwrap_or_else(|| node.op().to_string());
        println!(
            "  n{} [shape=record, label=\"{{{} | data {:.4} | grad {:.4}}}\"];",
            i,
            label,
            node.data(),
            node.grad()
        );
    }
    for (consumer, operand) in &edges {
        println!("  n{} -> n{};", ids[operand], ids[consumer]);
    }
    println!("}}");

    Ok(())
}
