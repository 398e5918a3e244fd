//! Expression lowering: a straightforward post-order walk, except for
//! `BoolOp`, whose short-circuit semantics need a jump per non-final operand.

use syntax::ast;

use super::Compiler;
use crate::bytecode::Instruction;
use crate::error::CompileError;
use crate::value::Value;

impl Compiler {
  pub(super) fn emit_expr(&mut self, expr: &ast::Expr) -> Result<(), CompileError> {
    match &**expr {
      ast::ExprKind::Constant(c) => {
        self.builder.emit(Instruction::Push(Value::from(*c)));
      }
      ast::ExprKind::Variable(name) => {
        self.builder.emit(Instruction::Load(name.to_string()));
      }
      ast::ExprKind::UnaryOp(u) => {
        self.emit_expr(&u.value)?;
        self.builder.emit(Instruction::UnaryOp(u.op));
      }
      ast::ExprKind::BinOp(b) => {
        self.emit_expr(&b.left)?;
        self.emit_expr(&b.right)?;
        self.builder.emit(Instruction::BinOp(b.op));
      }
      ast::ExprKind::BoolOp(b) => self.emit_bool_op(b)?,
    }
    Ok(())
  }

  /// `a and b and c` / `a or b or c`: every operand but the last is
  /// evaluated, duplicated, tested, and discarded if it doesn't already
  /// decide the result; the last operand is evaluated plain and left on the
  /// stack as the whole expression's value. Every short-circuiting jump
  /// lands on the same instruction, right after the last operand.
  fn emit_bool_op(&mut self, b: &ast::BoolOp) -> Result<(), CompileError> {
    let (last, init) = b
      .values
      .split_last()
      .expect("BoolOp must have at least two operands");

    let mut labels = Vec::with_capacity(init.len());
    for value in init {
      self.emit_expr(value)?;
      self.builder.emit(Instruction::Copy);
      let label = self.builder.label();
      match b.op {
        ast::BoolOperator::And => self.builder.emit_jump_if_false(&label),
        ast::BoolOperator::Or => self.builder.emit_jump_if_true(&label),
      }
      self.builder.emit(Instruction::Pop);
      labels.push(label);
    }

    self.emit_expr(last)?;

    for label in labels {
      self.builder.bind_label(label);
    }
    Ok(())
  }
}
