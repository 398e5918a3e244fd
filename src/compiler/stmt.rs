//! Statement lowering.

use syntax::ast;

use super::Compiler;
use crate::bytecode::Instruction;
use crate::error::CompileError;

impl Compiler {
  pub(super) fn emit_stmt(&mut self, stmt: &ast::Stmt) -> Result<(), CompileError> {
    match &**stmt {
      ast::StmtKind::Expr(expr) => {
        self.emit_expr(expr)?;
        self.builder.emit(Instruction::Pop);
      }
      ast::StmtKind::Assign(assign) => self.emit_assign(assign)?,
      ast::StmtKind::If(if_stmt) => self.emit_if(if_stmt)?,
    }
    Ok(())
  }

  /// `a = b = c = <value>`: the value is evaluated once; every target but
  /// the last duplicates it before binding, so the last `Save` consumes the
  /// one remaining copy.
  fn emit_assign(&mut self, assign: &ast::Assign) -> Result<(), CompileError> {
    self.emit_expr(&assign.value)?;
    let last = assign.targets.len() - 1;
    for (i, target) in assign.targets.iter().enumerate() {
      if i != last {
        self.builder.emit(Instruction::Copy);
      }
      self.builder.emit(Instruction::Save(target.to_string()));
    }
    Ok(())
  }

  fn emit_if(&mut self, if_stmt: &ast::If) -> Result<(), CompileError> {
    self.emit_expr(&if_stmt.cond)?;
    let else_label = self.builder.label();
    self.builder.emit_jump_if_false(&else_label);

    for stmt in &if_stmt.body {
      self.emit_stmt(stmt)?;
    }

    match &if_stmt.orelse {
      Some(orelse) => {
        let end_label = self.builder.label();
        self.builder.emit_jump(&end_label);
        self.builder.bind_label(else_label);
        for stmt in orelse {
          self.emit_stmt(stmt)?;
        }
        self.builder.bind_label(end_label);
      }
      None => self.builder.bind_label(else_label),
    }
    Ok(())
  }
}
