//! Flat, indexable bytecode and the label/back-patch builder used to emit
//! it. Jump deltas are relative offsets from the jump instruction itself: a
//! delta of 1 means "next instruction" (identity). There are no backward
//! jumps in this instruction set, so the bytecode never needs re-patching
//! after a label has been bound once.

use std::cell::Cell;

use syntax::ast::{BinOperator, UnaryOperator};

use crate::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
  Push(Value),
  Pop,
  Copy,
  Load(String),
  Save(String),
  BinOp(BinOperator),
  UnaryOp(UnaryOperator),
  PopJumpIfFalse(u32),
  PopJumpIfTrue(u32),
  JumpForward(u32),
}

/// An unbound jump target. Created with [`BytecodeBuilder::label`], handed
/// to one of the `emit_jump*` methods (which records its own offset as the
/// label's "referrer"), and resolved with [`BytecodeBuilder::bind_label`]
/// once the builder has reached the instruction execution should resume at.
pub struct Label {
  referrer: Cell<Option<usize>>,
}

#[derive(Default)]
pub struct BytecodeBuilder {
  code: Vec<Instruction>,
}

impl BytecodeBuilder {
  pub fn new() -> Self {
    Self { code: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.code.len()
  }

  pub fn is_empty(&self) -> bool {
    self.code.is_empty()
  }

  pub fn emit(&mut self, instruction: Instruction) -> usize {
    self.code.push(instruction);
    self.code.len() - 1
  }

  pub fn label(&self) -> Label {
    Label {
      referrer: Cell::new(None),
    }
  }

  fn emit_referring(&mut self, label: &Label, placeholder: Instruction) {
    assert!(
      label.referrer.get().is_none(),
      "more than one instruction refers to the same label"
    );
    label.referrer.set(Some(self.code.len()));
    self.code.push(placeholder);
  }

  pub fn emit_jump_if_false(&mut self, label: &Label) {
    self.emit_referring(label, Instruction::PopJumpIfFalse(0));
  }

  pub fn emit_jump_if_true(&mut self, label: &Label) {
    self.emit_referring(label, Instruction::PopJumpIfTrue(0));
  }

  pub fn emit_jump(&mut self, label: &Label) {
    self.emit_referring(label, Instruction::JumpForward(0));
  }

  /// Patches the label's referring jump instruction's delta to land exactly
  /// on the instruction that will be emitted next.
  pub fn bind_label(&mut self, label: Label) {
    let referrer = label
      .referrer
      .get()
      .expect("label bound without a referrer");
    let current = self.code.len();
    assert!(current > referrer, "label used for a backward jump");
    let delta = (current - referrer) as u32;
    match &mut self.code[referrer] {
      Instruction::PopJumpIfFalse(d) | Instruction::PopJumpIfTrue(d) | Instruction::JumpForward(d) => {
        *d = delta;
      }
      other => unreachable!("referrer {referrer} does not hold a jump instruction: {other:?}"),
    }
  }

  pub fn finish(self) -> Vec<Instruction> {
    self.code
  }
}
