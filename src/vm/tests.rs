use super::Vm;
use crate::bytecode::Instruction;
use crate::error::RuntimeError;
use crate::value::Value;
use syntax::ast::{BinOperator, UnaryOperator};

fn run(code: &[Instruction]) -> super::Outcome {
  Vm::new().run(code).expect("run")
}

#[test]
fn arithmetic_leaves_last_popped() {
  let code = vec![
    Instruction::Push(Value::Int(3)),
    Instruction::Push(Value::Int(5)),
    Instruction::BinOp(BinOperator::Add),
    Instruction::Pop,
  ];
  let outcome = run(&code);
  assert_eq!(outcome.last_popped, Some(Value::Int(8)));
}

#[test]
fn chained_assignment_binds_every_target() {
  let code = vec![
    Instruction::Push(Value::Int(3)),
    Instruction::Copy,
    Instruction::Save("a".to_owned()),
    Instruction::Copy,
    Instruction::Save("b".to_owned()),
    Instruction::Save("c".to_owned()),
  ];
  let outcome = run(&code);
  assert_eq!(outcome.env.get("a"), Some(&Value::Int(3)));
  assert_eq!(outcome.env.get("b"), Some(&Value::Int(3)));
  assert_eq!(outcome.env.get("c"), Some(&Value::Int(3)));
}

#[test]
fn pop_jump_if_false_skips_the_body_when_falsy() {
  let code = vec![
    Instruction::Push(Value::Bool(false)),
    Instruction::PopJumpIfFalse(3),
    Instruction::Push(Value::Int(1)),
    Instruction::Save("visited".to_owned()),
    Instruction::Push(Value::Int(1)),
    Instruction::Save("done".to_owned()),
  ];
  let outcome = run(&code);
  assert_eq!(outcome.env.get("visited"), None);
  assert_eq!(outcome.env.get("done"), Some(&Value::Int(1)));
}

#[test]
fn pop_jump_if_false_runs_the_body_when_truthy() {
  let code = vec![
    Instruction::Push(Value::Bool(true)),
    Instruction::PopJumpIfFalse(3),
    Instruction::Push(Value::Int(1)),
    Instruction::Save("visited".to_owned()),
    Instruction::Push(Value::Int(1)),
    Instruction::Save("done".to_owned()),
  ];
  let outcome = run(&code);
  assert_eq!(outcome.env.get("visited"), Some(&Value::Int(1)));
  assert_eq!(outcome.env.get("done"), Some(&Value::Int(1)));
}

#[test]
fn jump_forward_skips_the_else_branch() {
  let code = vec![
    Instruction::Push(Value::Bool(true)),
    Instruction::PopJumpIfFalse(4),
    Instruction::Push(Value::Int(1)),
    Instruction::Save("a".to_owned()),
    Instruction::JumpForward(3),
    Instruction::Push(Value::Int(2)),
    Instruction::Save("a".to_owned()),
  ];
  let outcome = run(&code);
  assert_eq!(outcome.env.get("a"), Some(&Value::Int(1)));
}

#[test]
fn and_short_circuits_without_evaluating_second_operand() {
  // `False and (undefined name)`: the jump must skip the `Load` entirely, or
  // this would fail with an unbound-name error instead of yielding `False`.
  let code = vec![
    Instruction::Push(Value::Bool(false)),
    Instruction::Copy,
    Instruction::PopJumpIfFalse(3),
    Instruction::Pop,
    Instruction::Load("never_bound".to_owned()),
    Instruction::Pop,
  ];
  let outcome = run(&code);
  assert_eq!(outcome.last_popped, Some(Value::Bool(false)));
}

#[test]
fn integer_modulo_is_floored() {
  let value = Value::Int(-7).bin_op(BinOperator::Mod, Value::Int(3)).unwrap();
  assert_eq!(value, Value::Int(2));
}

#[test]
fn division_is_always_true_division() {
  let value = Value::Int(6).bin_op(BinOperator::Div, Value::Int(4)).unwrap();
  assert_eq!(value, Value::Float(1.5));
}

#[test]
fn integer_modulo_by_zero_is_a_runtime_error() {
  let err = Value::Int(1).bin_op(BinOperator::Mod, Value::Int(0)).unwrap_err();
  assert_eq!(err, RuntimeError::DivisionByZero);
}

#[test]
fn unbound_name_is_a_runtime_error() {
  let code = vec![Instruction::Load("x".to_owned())];
  let err = Vm::new().run(&code).unwrap_err();
  assert_eq!(err, RuntimeError::UnboundName("x".to_owned()));
}

#[test]
fn negative_exponent_promotes_to_float() {
  let value = Value::Int(2).bin_op(BinOperator::Pow, Value::Int(-1)).unwrap();
  assert_eq!(value, Value::Float(0.5));
}

#[test]
fn unary_minus_negates() {
  assert_eq!(Value::Int(5).unary_op(UnaryOperator::Minus), Value::Int(-5));
  assert_eq!(Value::Float(5.0).unary_op(UnaryOperator::Minus), Value::Float(-5.0));
}
