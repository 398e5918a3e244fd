//! Statement grammar: dispatch, assignment, conditional, and block bodies.

use beef::lean::Cow;
use span::Spanned;

use super::{Parser, Result};
use crate::ast;
use crate::lexer::TokenKind;

impl<'src> Parser<'src> {
  pub(super) fn statement(&mut self) -> Result<ast::Stmt<'src>> {
    // Two-token lookahead: `NAME =` starts an assignment; `if` starts a
    // conditional; anything else is an expression statement.
    if self.current().is(TokenKind::Name) && self.peek(1).is(TokenKind::Assign) {
      self.assignment()
    } else if self.current().is(TokenKind::If) {
      self.conditional()
    } else {
      self.expr_statement()
    }
  }

  fn assignment(&mut self) -> Result<ast::Stmt<'src>> {
    let mut targets = Vec::new();
    loop {
      let name = *self.eat(TokenKind::Name)?;
      targets.push(Spanned::new(name.span, Cow::from(name.lexeme)));
      self.eat(TokenKind::Assign)?;
      if !(self.current().is(TokenKind::Name) && self.peek(1).is(TokenKind::Assign)) {
        break;
      }
    }
    let value = self.expr()?;
    self.eat(TokenKind::Newline)?;
    Ok(ast::assign_stmt(targets, value))
  }

  /// Parses an `if`/`elif` block and everything that follows it. Called
  /// with the current token positioned on `IF` (from [`Self::statement`])
  /// or on `ELIF` (recursively, from this same function): `elif` is
  /// encoded by nesting a fresh `Conditional` inside the parent's `orelse`
  /// as the sole statement of a one-element body; a trailing `else`
  /// replaces `orelse` with its body directly.
  fn conditional(&mut self) -> Result<ast::Stmt<'src>> {
    let start = self.current().span;
    self.bump(); // `if` or `elif`

    let cond = self.expr()?;
    self.eat(TokenKind::Colon)?;
    self.eat(TokenKind::Newline)?;
    let body = self.body()?;

    let orelse = if self.current().is(TokenKind::Elif) {
      Some(vec![self.conditional()?])
    } else if self.bump_if(TokenKind::Else) {
      self.eat(TokenKind::Colon)?;
      self.eat(TokenKind::Newline)?;
      Some(self.body()?)
    } else {
      None
    };

    let end = self.previous().span;
    Ok(ast::if_stmt(start.join(end), cond, body, orelse))
  }

  fn body(&mut self) -> Result<Vec<ast::Stmt<'src>>> {
    super::check_recursion_limit(self.current().span)?;
    self.eat(TokenKind::Indent)?;
    let mut statements = vec![self.statement()?];
    while !self.current().is(TokenKind::Dedent) && !self.current().is(TokenKind::Eof) {
      statements.push(self.statement()?);
    }
    self.eat(TokenKind::Dedent)?;
    Ok(statements)
  }

  fn expr_statement(&mut self) -> Result<ast::Stmt<'src>> {
    let expr = self.expr()?;
    self.eat(TokenKind::Newline)?;
    Ok(ast::expr_stmt(expr))
  }
}
