//! Lowers a parsed module into a flat instruction stream.
//!
//! Jump offsets are never computed by hand: every branch goes through
//! [`crate::bytecode::BytecodeBuilder`]'s label/back-patch API, so the
//! lowering code only has to say *what* should happen at a label, not *how
//! far away* it is.

mod expr;
mod stmt;

use syntax::ast;

use crate::bytecode::{BytecodeBuilder, Instruction};
use crate::error::CompileError;

pub struct Compiler {
  builder: BytecodeBuilder,
}

impl Compiler {
  fn new() -> Self {
    Self {
      builder: BytecodeBuilder::new(),
    }
  }

  pub fn compile(module: &ast::Module) -> Result<Vec<Instruction>, CompileError> {
    let mut compiler = Compiler::new();
    for stmt in &module.body {
      compiler.emit_stmt(stmt)?;
    }
    Ok(compiler.builder.finish())
  }
}
