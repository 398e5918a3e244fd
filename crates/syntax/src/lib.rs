pub mod ast;
pub mod lexer;
pub mod parser;

pub use lexer::LexError;
pub use parser::ParseError;

/// Either stage of this crate's front end can fail independently; the root
/// crate's own `Error` enum (`src/error.rs`) unwraps this one level further
/// into its own `Lex`/`Parse` variants.
#[derive(Clone, Debug)]
pub enum Error {
  Lex(Vec<LexError>),
  Parse(Vec<ParseError>),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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
    }
  }
}

impl std::error::Error for Error {}

/// Parses `src` into a [`ast::Module`], the single public entry point into
/// this crate's lexer + parser pipeline.
pub fn parse(src: &str) -> Result<ast::Module, Error> {
  let lexer = lexer::Lexer::lex(src).map_err(Error::Lex)?;
  parser::Parser::new(lexer).parse_module().map_err(Error::Parse)
}
