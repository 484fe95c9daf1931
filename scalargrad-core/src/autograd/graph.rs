use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a node, keyed on the address of its shared state.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Returns every node reachable from `root` in topological post-order:
/// operands always precede the nodes that consume them, and `root` comes
/// last. Iterating the result in reverse therefore visits each node only
/// after all of its consumers.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    sorted
}

/// Recursive DFS behind `topological_sort`. The visited set is keyed by
/// node identity, so a node reachable through several paths is emitted
/// exactly once.
fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, sorted: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        return;
    }
    for operand in node.operands() {
        build_topo(&operand, visited, sorted);
    }
    sorted.push(node.clone());
}

/// Walks the graph below `root` and returns its structure for external
/// renderers: the reachable nodes in first-visit order, and one
/// (consumer, operand) edge per operand slot. A node consumed twice by
/// the same operation yields two edges.
///
/// This is the same reachability walk `backward` performs, without the
/// topological constraint.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if !visited.insert(node.node_id()) {
            continue;
        }
        for operand in node.operands() {
            edges.push((node.clone(), operand.clone()));
            stack.push(operand);
        }
        nodes.push(node);
    }
    (nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Value], node: &Value) -> usize {
        order
            .iter()
            .position(|candidate| candidate == node)
            .expect("node missing from traversal")
    }

    #[test]
    fn topological_sort_puts_operands_before_consumers() {
        // Diamond: d consumes b and c, both of which consume a.
        let a = Value::new(1.0);
        let b = &a + 1.0;
        let c = &a * 2.0;
        let d = &b + &c;
        let order = topological_sort(&d);
        assert_eq!(order.len(), 6); // a, b, c, d plus the two promoted constants
        assert_eq!(order.last().unwrap(), &d);
        assert!(position(&order, &a) < position(&order, &b));
        assert!(position(&order, &a) < position(&order, &c));
        assert!(position(&order, &b) < position(&order, &d));
        assert!(position(&order, &c) < position(&order, &d));
    }

    #[test]
    fn topological_sort_emits_shared_nodes_once() {
        let a = Value::new(2.0);
        let b = &a + &a;
        let order = topological_sort(&b);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn trace_reports_one_edge_per_operand_slot() {
        let a = Value::new(2.0);
        let b = &a + &a;
        let c = &b * &a;
        let (nodes, edges) = trace(&c);
        assert_eq!(nodes.len(), 3);
        assert_eq!(edges.len(), 4);
        assert_eq!(nodes[0], c); // first-visit order starts at the root
        let into_b = edges
            .iter()
            .filter(|(consumer, operand)| *consumer == b && *operand == a)
            .count();
        assert_eq!(into_b, 2);
    }
}
