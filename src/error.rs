//! Top-level error type, unifying every stage from lexing through execution.

use std::fmt;

/// Errors raised while running compiled bytecode.
#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeError {
  /// Integer `%` (and, transitively, `%`-by-zero checks) with a zero
  /// right-hand side. Float `%`/`/` never raise: they follow IEEE-754 and
  /// produce `inf`/`NaN` instead.
  DivisionByZero,
  /// `LOAD` of a name that has never been the target of an assignment.
  UnboundName(String),
}

impl fmt::Display for RuntimeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RuntimeError::DivisionByZero => write!(f, "division by zero"),
      RuntimeError::UnboundName(name) => write!(f, "name `{name}` is not bound"),
    }
  }
}

impl std::error::Error for RuntimeError {}

/// Errors raised while lowering a parsed module into bytecode.
#[derive(Clone, Debug, PartialEq)]
pub enum CompileError {
  /// Reserved for lowering failures; the grammar this compiler lowers
  /// cannot currently produce one; kept so the error stack has a place to
  /// grow into without changing the public `Error` shape.
  Internal(String),
}

impl fmt::Display for CompileError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CompileError::Internal(message) => write!(f, "internal compiler error: {message}"),
    }
  }
}

impl std::error::Error for CompileError {}

/// Unifies every stage's failure mode behind one type so callers of
/// [`crate::run`] only have to match on a single enum.
#[derive(Clone, Debug)]
pub enum Error {
  Lex(Vec<syntax::LexError>),
  Parse(Vec<syntax::ParseError>),
  Compile(CompileError),
  Runtime(RuntimeError),
}

impl From<CompileError> for Error {
  fn from(value: CompileError) -> Self {
    Error::Compile(value)
  }
}

impl From<RuntimeError> for Error {
  fn from(value: RuntimeError) -> Self {
    Error::Runtime(value)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Lex(errors) => {
        for (i, e) in errors.iter().enumerate() {
          if i > 0 {
            writeln!(f)?;
          }
          write!(f, "{e}")?;
        }
        Ok(())
      }
      Error::Parse(errors) => {
        for (i, e) in errors.iter().enumerate() {
          if i > 0 {
            writeln!(f)?;
          }
          write!(f, "{e}")?;
        }
        Ok(())
      }
      Error::Compile(e) => write!(f, "{e}"),
      Error::Runtime(e) => write!(f, "{e}"),
    }
  }
}

impl std::error::Error for Error {}
