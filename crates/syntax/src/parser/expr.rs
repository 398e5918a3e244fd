//! Expression grammar, in precedence order from lowest to highest binding:
//! `or`, `and`, `not`, binary `+ -`, `* / %`, unary `+ -`, `**` (right-assoc),
//! grouping/atoms.

use beef::lean::Cow;
use span::Spanned;

use super::{ParseError, Parser, Result};
use crate::ast;
use crate::lexer::TokenKind;

impl<'src> Parser<'src> {
  pub(super) fn expr(&mut self) -> Result<ast::Expr<'src>> {
    self.alternative()
  }

  fn alternative(&mut self) -> Result<ast::Expr<'src>> {
    let first = self.conjunction()?;
    if !self.current().is(TokenKind::Or) {
      return Ok(first);
    }
    let mut values = vec![first];
    while self.bump_if(TokenKind::Or) {
      values.push(self.conjunction()?);
    }
    Ok(ast::bool_op(ast::BoolOperator::Or, values))
  }

  fn conjunction(&mut self) -> Result<ast::Expr<'src>> {
    let first = self.negation()?;
    if !self.current().is(TokenKind::And) {
      return Ok(first);
    }
    let mut values = vec![first];
    while self.bump_if(TokenKind::And) {
      values.push(self.negation()?);
    }
    Ok(ast::bool_op(ast::BoolOperator::And, values))
  }

  fn negation(&mut self) -> Result<ast::Expr<'src>> {
    if self.current().is(TokenKind::Not) {
      let start = self.current().span;
      self.bump();
      let value = self.negation()?;
      let span = start.join(value.span);
      return Ok(ast::unary_op(span, ast::UnaryOperator::Not, value));
    }
    self.computation()
  }

  fn computation(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.term()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Plus => ast::BinOperator::Add,
        TokenKind::Minus => ast::BinOperator::Sub,
        _ => break,
      };
      self.bump();
      let right = self.term()?;
      left = ast::bin_op(op, left, right);
    }
    Ok(left)
  }

  fn term(&mut self) -> Result<ast::Expr<'src>> {
    let mut left = self.unary()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Mul => ast::BinOperator::Mul,
        TokenKind::Div => ast::BinOperator::Div,
        TokenKind::Mod => ast::BinOperator::Mod,
        _ => break,
      };
      self.bump();
      let right = self.unary()?;
      left = ast::bin_op(op, left, right);
    }
    Ok(left)
  }

  fn unary(&mut self) -> Result<ast::Expr<'src>> {
    let op = match self.current().kind {
      TokenKind::Plus => Some(ast::UnaryOperator::Plus),
      TokenKind::Minus => Some(ast::UnaryOperator::Minus),
      _ => None,
    };
    if let Some(op) = op {
      let start = self.current().span;
      self.bump();
      // Unary binds tighter than binary `+ - * / %` but looser than `**` on
      // the left: `-2 ** 3` is `-(2 ** 3)`, so the operand here is another
      // `unary`, which bottoms out at `exponentiation`.
      let value = self.unary()?;
      let span = start.join(value.span);
      return Ok(ast::unary_op(span, op, value));
    }
    self.exponentiation()
  }

  fn exponentiation(&mut self) -> Result<ast::Expr<'src>> {
    let base = self.atom()?;
    if self.bump_if(TokenKind::Exp) {
      // Right-associative: the right operand is a full `unary`, so
      // `2 ** -3 ** 2` parses as `2 ** (-(3 ** 2))`.
      let exponent = self.unary()?;
      return Ok(ast::bin_op(ast::BinOperator::Pow, base, exponent));
    }
    Ok(base)
  }

  fn atom(&mut self) -> Result<ast::Expr<'src>> {
    super::check_recursion_limit(self.current().span)?;

    if self.bump_if(TokenKind::LParen) {
      let inner = self.expr()?;
      self.eat(TokenKind::RParen)?;
      return Ok(inner);
    }
    self.value()
  }

  fn value(&mut self) -> Result<ast::Expr<'src>> {
    let token = *self.current();
    match token.kind {
      TokenKind::Name => {
        self.bump();
        let ident = Spanned::new(token.span, Cow::from(token.lexeme));
        Ok(ast::variable(ident))
      }
      TokenKind::Int => {
        self.bump();
        let value: i64 = token.lexeme.parse().map_err(|_| {
          ParseError::new(format!("invalid integer literal `{}`", token.lexeme), token.span)
        })?;
        Ok(ast::int(token.span, value))
      }
      TokenKind::Float => {
        self.bump();
        let value: f64 = token.lexeme.parse().map_err(|_| {
          ParseError::new(format!("invalid float literal `{}`", token.lexeme), token.span)
        })?;
        Ok(ast::float(token.span, value))
      }
      TokenKind::True => {
        self.bump();
        Ok(ast::bool_lit(token.span, true))
      }
      TokenKind::False => {
        self.bump();
        Ok(ast::bool_lit(token.span, false))
      }
      _ => Err(ParseError::new(
        format!("unexpected token `{}`", token.kind.name()),
        token.span,
      )),
    }
  }
}
