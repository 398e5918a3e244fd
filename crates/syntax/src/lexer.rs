//! Indentation-sensitive lexer.
//!
//! Logos drives recognition of ordinary tokens (numbers, names, keywords,
//! punctuation); the driver in [`Lexer::lex`] layers the newline/indentation
//! protocol on top, synthesising `NEWLINE`/`INDENT`/`DEDENT` tokens the way
//! the grammar in `crates/syntax/src/parser.rs` expects them.

#![allow(non_camel_case_types)]

use std::fmt;

use logos::Logos;
use span::Span;

#[derive(Clone, Copy, Debug, Logos, PartialEq, Eq)]
pub enum TokenKind {
  #[regex("[0-9]+")]
  Int,
  #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
  Float,
  #[regex("[A-Za-z_][A-Za-z0-9_]*")]
  Name,

  #[token("if")]
  If,
  #[token("elif")]
  Elif,
  #[token("else")]
  Else,
  #[token("True")]
  True,
  #[token("False")]
  False,
  #[token("not")]
  Not,
  #[token("and")]
  And,
  #[token("or")]
  Or,

  #[token("+")]
  Plus,
  #[token("-")]
  Minus,
  #[token("*")]
  Mul,
  #[token("/")]
  Div,
  #[token("%")]
  Mod,
  #[token("**")]
  Exp,
  #[token("(")]
  LParen,
  #[token(")")]
  RParen,
  #[token("=")]
  Assign,
  #[token(":")]
  Colon,

  // Synthesised by the driver below, never produced directly by logos.
  Newline,
  Indent,
  Dedent,
  Eof,

  #[doc(hidden)]
  #[token("\n")]
  _Newline,
  #[doc(hidden)]
  #[regex(" +")]
  _Space,
  #[doc(hidden)]
  #[error]
  _Error,
}

impl TokenKind {
  pub fn name(self) -> &'static str {
    match self {
      TokenKind::Int => "INT",
      TokenKind::Float => "FLOAT",
      TokenKind::Name => "NAME",
      TokenKind::If => "if",
      TokenKind::Elif => "elif",
      TokenKind::Else => "else",
      TokenKind::True => "True",
      TokenKind::False => "False",
      TokenKind::Not => "not",
      TokenKind::And => "and",
      TokenKind::Or => "or",
      TokenKind::Plus => "+",
      TokenKind::Minus => "-",
      TokenKind::Mul => "*",
      TokenKind::Div => "/",
      TokenKind::Mod => "%",
      TokenKind::Exp => "**",
      TokenKind::LParen => "(",
      TokenKind::RParen => ")",
      TokenKind::Assign => "=",
      TokenKind::Colon => ":",
      TokenKind::Newline => "NEWLINE",
      TokenKind::Indent => "INDENT",
      TokenKind::Dedent => "DEDENT",
      TokenKind::Eof => "EOF",
      TokenKind::_Newline | TokenKind::_Space | TokenKind::_Error => "<invalid>",
    }
  }
}

#[derive(Clone, Copy, Debug)]
pub struct Token<'src> {
  pub kind: TokenKind,
  pub span: Span,
  pub lexeme: &'src str,
}

impl<'src> Token<'src> {
  pub fn is(&self, kind: TokenKind) -> bool {
    self.kind == kind
  }
}

#[derive(Clone, Debug)]
pub struct LexError {
  pub message: String,
  pub span: Span,
}

impl fmt::Display for LexError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "lex error at {}: {}", self.span, self.message)
  }
}

impl std::error::Error for LexError {}

/// A materialized token buffer. The lazy-sequence contract from the design
/// is satisfied conceptually: once built, a `Lexer` is only ever read
/// forward through via [`Lexer::current`]/[`Lexer::bump`] and is never
/// restarted in place - building a fresh one is the only way to re-lex.
pub struct Lexer<'src> {
  tokens: Vec<Token<'src>>,
  pos: usize,
}

impl<'src> Lexer<'src> {
  pub fn lex(src: &'src str) -> Result<Self, Vec<LexError>> {
    let mut errors = Vec::new();
    let mut tokens = Vec::new();

    let mut level: usize = 0;
    let mut at_line_start = true;
    let mut pending_ws: usize = 0;
    let mut line_has_content = false;

    let mut lex = TokenKind::lexer(src);
    while let Some(kind) = lex.next() {
      let span: Span = lex.span().into();
      let lexeme = lex.slice();

      match kind {
        TokenKind::_Space => {
          pending_ws += lexeme.len();
        }
        TokenKind::_Newline => {
          if line_has_content {
            tokens.push(Token {
              kind: TokenKind::Newline,
              span,
              lexeme,
            });
          }
          pending_ws = 0;
          line_has_content = false;
          at_line_start = true;
        }
        TokenKind::_Error => {
          let message = if lexeme == "." {
            "a lone `.` is not a valid token".to_owned()
          } else {
            format!("unrecognised character `{lexeme}`")
          };
          errors.push(LexError { message, span });
        }
        _ => {
          if at_line_start {
            if pending_ws % 4 != 0 {
              errors.push(LexError {
                message: format!("indentation must be a multiple of 4 spaces, got {pending_ws}"),
                span,
              });
            }
            let indent = pending_ws / 4;
            while indent > level {
              tokens.push(Token {
                kind: TokenKind::Indent,
                span,
                lexeme: "",
              });
              level += 1;
            }
            while indent < level {
              tokens.push(Token {
                kind: TokenKind::Dedent,
                span,
                lexeme: "",
              });
              level -= 1;
            }
            at_line_start = false;
            pending_ws = 0;
          }
          line_has_content = true;
          tokens.push(Token { kind, span, lexeme });
        }
      }
    }

    let eof_span: Span = (src.len()..src.len()).into();

    // "Before scanning, the source is conceptually terminated with a
    // newline so the final logical line is delimited": if the last line
    // had content but no trailing newline character, synthesise the
    // closing NEWLINE here instead of requiring a physical one.
    if line_has_content {
      tokens.push(Token {
        kind: TokenKind::Newline,
        span: eof_span,
        lexeme: "",
      });
    }

    // A well-formed program's last statement is very often still nested
    // (an `if` body with nothing after it): close every outstanding
    // `INDENT` level implicitly rather than demanding the source return to
    // column 0 on its own before EOF.
    while level > 0 {
      tokens.push(Token {
        kind: TokenKind::Dedent,
        span: eof_span,
        lexeme: "",
      });
      level -= 1;
    }

    tokens.push(Token {
      kind: TokenKind::Eof,
      span: eof_span,
      lexeme: "",
    });

    if errors.is_empty() {
      Ok(Lexer { tokens, pos: 0 })
    } else {
      Err(errors)
    }
  }

  #[inline]
  pub fn current(&self) -> &Token<'src> {
    &self.tokens[self.pos]
  }

  #[inline]
  pub fn previous(&self) -> &Token<'src> {
    &self.tokens[self.pos.saturating_sub(1)]
  }

  #[inline]
  pub fn peek(&self, skip: usize) -> &Token<'src> {
    let idx = (self.pos + skip).min(self.tokens.len() - 1);
    &self.tokens[idx]
  }

  /// Advance to the next token, returning the one just consumed.
  #[inline]
  pub fn bump(&mut self) -> &Token<'src> {
    let prev = self.pos;
    if self.pos + 1 < self.tokens.len() {
      self.pos += 1;
    }
    &self.tokens[prev]
  }

  pub fn is_at_eof(&self) -> bool {
    self.current().is(TokenKind::Eof)
  }
}
