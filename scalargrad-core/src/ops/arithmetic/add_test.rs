use super::*;
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn add_op_records_an_add_node() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = add_op(&a, &b);

    assert_relative_eq!(c.data(), 5.0);
    assert_eq!(c.op(), Op::Add);
    assert!(!c.is_leaf());
    let operands = c.operands();
    assert_eq!(operands.len(), 2);
    assert_eq!(operands[0], a);
    assert_eq!(operands[1], b);
}

#[test]
fn operator_forms_agree_with_add_op() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);

    assert_relative_eq!((&a + &b).data(), 5.0);
    assert_relative_eq!((a.clone() + &b).data(), 5.0);
    assert_relative_eq!((&a + b.clone()).data(), 5.0);
    assert_relative_eq!((a.clone() + b.clone()).data(), 5.0);
}

#[test]
fn f64_operands_are_promoted_to_leaves() {
    let x = Value::new(2.0);

    let left = 1.0 + &x;
    let right = &x + 1.0;
    assert_relative_eq!(left.data(), 3.0);
    assert_relative_eq!(right.data(), 3.0);

    let promoted = right.operands()[1].clone();
    assert!(promoted.is_leaf());
    assert_relative_eq!(promoted.data(), 1.0);
    // A fresh node each time, never shared with the named operand.
    assert_ne!(promoted, x);
}

#[test]
fn backward_sends_the_gradient_to_both_operands() -> Result<(), ScalarGradError> {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a + &b;

    c.backward()?;

    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn repeated_operand_accumulates_its_gradient() -> Result<(), ScalarGradError> {
    let a = Value::new(4.0);
    let doubled = &a + &a;

    doubled.backward()?;

    assert_relative_eq!(a.grad(), 2.0);
    Ok(())
}
