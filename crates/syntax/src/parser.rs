//! Recursive-descent parser over a materialized token buffer with one-token
//! lookahead plus a `peek(skip)` convenience.

use span::Span;

use crate::ast;
use crate::lexer::{Lexer, Token, TokenKind};

mod expr;
mod stmt;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug)]
pub struct ParseError {
  pub message: String,
  pub span: Span,
}

impl ParseError {
  pub fn new(message: impl Into<String>, span: impl Into<Span>) -> Self {
    ParseError {
      message: message.into(),
      span: span.into(),
    }
  }
}

impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "parse error at {}: {}", self.span, self.message)
  }
}

impl std::error::Error for ParseError {}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

// `atom` recurses through the full expression grammar on every `(`, and
// `body` recurses through the full statement grammar on every nested block;
// deeply nested input (long runs of parens, deeply stacked `if`s) can run the
// native call stack out before the token buffer does. On average a single
// parse_XXX() frame consumes well under 700 bytes of stack; assuming ~50
// recursive calls per dive, 64k bytes covers a comfortable dive depth.
const MINIMUM_STACK_REQUIRED: usize = 64_000;

// On WASM, `stacker::remaining_stack()` always returns `None`, and a stack
// overflow there is turned into a host-level trap/exception rather than a
// Rust panic, so there's nothing useful for this check to guard against.
#[cfg(target_family = "wasm")]
pub(crate) fn check_recursion_limit(_span: Span) -> Result<()> {
  Ok(())
}

#[cfg(not(target_family = "wasm"))]
pub(crate) fn check_recursion_limit(span: Span) -> Result<()> {
  if stacker::remaining_stack()
    .map(|available| available > MINIMUM_STACK_REQUIRED)
    .unwrap_or(true)
  {
    Ok(())
  } else {
    Err(ParseError::new("nesting limit reached", span))
  }
}

pub struct Parser<'src> {
  lex: Lexer<'src>,
}

impl<'src> Parser<'src> {
  pub fn new(lex: Lexer<'src>) -> Self {
    Self { lex }
  }

  /// Consumes the parser, producing either a complete module or the single
  /// error that aborted parsing. Wrapped in a one-element vector at the
  /// boundary to match this crate's "plural error" convention, even though
  /// this recursive-descent parser has no panic-mode recovery and so never
  /// accumulates more than one.
  pub fn parse_module(mut self) -> std::result::Result<ast::Module<'src>, Vec<ParseError>> {
    self.module().map_err(|e| vec![e])
  }

  fn module(&mut self) -> Result<ast::Module<'src>> {
    let mut body = Vec::new();
    while !self.current().is(TokenKind::Eof) {
      body.push(self.statement()?);
    }
    Ok(ast::module(body))
  }

  #[inline]
  fn current(&self) -> &Token<'src> {
    self.lex.current()
  }

  #[inline]
  fn previous(&self) -> &Token<'src> {
    self.lex.previous()
  }

  #[inline]
  fn peek(&self, skip: usize) -> &Token<'src> {
    self.lex.peek(skip)
  }

  #[inline]
  fn bump(&mut self) -> &Token<'src> {
    self.lex.bump()
  }

  #[inline]
  fn bump_if(&mut self, kind: TokenKind) -> bool {
    if self.current().is(kind) {
      self.bump();
      true
    } else {
      false
    }
  }

  /// Consumes the current token if it matches `kind`, otherwise fails with a
  /// "token-kind mismatch" parse error. This is the `eat(expected)` helper
  /// named in the design: unbalanced parens, missing `NEWLINE`, missing
  /// `COLON`, and missing `INDENT`/`DEDENT` all surface through this one
  /// helper.
  fn eat(&mut self, kind: TokenKind) -> Result<&Token<'src>> {
    if self.current().is(kind) {
      Ok(self.bump())
    } else {
      Err(ParseError::new(
        format!(
          "expected `{}`, found `{}`",
          kind.name(),
          self.current().kind.name()
        ),
        self.current().span,
      ))
    }
  }
}
