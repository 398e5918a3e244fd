mod bytecode;
mod compiler;
mod error;
mod value;
mod vm;

pub use error::{CompileError, Error, RuntimeError};
pub use value::Value;
pub use vm::Outcome;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Lexes, parses, compiles, and runs a complete program, returning its final
/// environment and the value of the last top-level expression statement (if
/// any ran).
pub fn run(src: &str) -> Result<Outcome> {
  let module = syntax::parse(src).map_err(|e| match e {
    syntax::Error::Lex(errors) => Error::Lex(errors),
    syntax::Error::Parse(errors) => Error::Parse(errors),
  })?;
  let code = compiler::Compiler::compile(&module)?;
  Ok(vm::Vm::new().run(&code)?)
}
