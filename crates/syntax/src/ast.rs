//! Abstract syntax tree produced by the parser and consumed by the compiler.

use beef::lean::Cow;
use span::{Span, Spanned};

pub type Ident<'src> = Spanned<Cow<'src, str>>;

#[cfg_attr(test, derive(Debug))]
pub struct Module<'src> {
  pub body: Vec<Stmt<'src>>,
}

impl<'src> Module<'src> {
  pub fn new(body: Vec<Stmt<'src>>) -> Self {
    Self { body }
  }
}

pub type Stmt<'src> = Spanned<StmtKind<'src>>;

#[cfg_attr(test, derive(Debug))]
pub enum StmtKind<'src> {
  Expr(Box<Expr<'src>>),
  Assign(Box<Assign<'src>>),
  If(Box<If<'src>>),
}

/// `a = b = c = <value>`, one or more targets sharing a single value.
#[cfg_attr(test, derive(Debug))]
pub struct Assign<'src> {
  pub targets: Vec<Ident<'src>>,
  pub value: Expr<'src>,
}

/// `if <cond>: <body> [elif <cond>: <body>]* [else: <body>]?`
///
/// An `elif` is represented as a nested [`If`] that is the sole statement of
/// `orelse`'s body; a trailing `else` is represented as `orelse` holding the
/// else-block's statements directly.
#[cfg_attr(test, derive(Debug))]
pub struct If<'src> {
  pub cond: Expr<'src>,
  pub body: Vec<Stmt<'src>>,
  pub orelse: Option<Vec<Stmt<'src>>>,
}

pub type Expr<'src> = Spanned<ExprKind<'src>>;

#[cfg_attr(test, derive(Debug))]
pub enum ExprKind<'src> {
  Constant(Constant),
  Variable(Ident<'src>),
  UnaryOp(Box<UnaryOp<'src>>),
  BinOp(Box<BinOp<'src>>),
  BoolOp(Box<BoolOp<'src>>),
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
pub enum Constant {
  Int(i64),
  Float(f64),
  Bool(bool),
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  Plus,
  Minus,
  Not,
}

#[cfg_attr(test, derive(Debug))]
pub struct UnaryOp<'src> {
  pub op: UnaryOperator,
  pub value: Expr<'src>,
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BinOperator {
  Add,
  Sub,
  Mul,
  Div,
  Mod,
  Pow,
}

#[cfg_attr(test, derive(Debug))]
pub struct BinOp<'src> {
  pub op: BinOperator,
  pub left: Expr<'src>,
  pub right: Expr<'src>,
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
  And,
  Or,
}

/// A flattened run of two or more `and`- or `or`-connected operands.
#[cfg_attr(test, derive(Debug))]
pub struct BoolOp<'src> {
  pub op: BoolOperator,
  pub values: Vec<Expr<'src>>,
}

// Smart constructors. Kept as free functions rather than public struct
// literals so that every construction site computes its span the same way.

pub fn module(body: Vec<Stmt>) -> Module {
  Module::new(body)
}

pub fn expr_stmt(expr: Expr) -> Stmt {
  Stmt::new(expr.span, StmtKind::Expr(Box::new(expr)))
}

pub fn assign_stmt<'src>(targets: Vec<Ident<'src>>, value: Expr<'src>) -> Stmt<'src> {
  debug_assert!(!targets.is_empty(), "Assign.targets must be non-empty");
  let start = targets[0].span;
  let span = start.join(value.span);
  Stmt::new(span, StmtKind::Assign(Box::new(Assign { targets, value })))
}

pub fn if_stmt<'src>(
  s: impl Into<Span>,
  cond: Expr<'src>,
  body: Vec<Stmt<'src>>,
  orelse: Option<Vec<Stmt<'src>>>,
) -> Stmt<'src> {
  debug_assert!(!body.is_empty(), "If.body must be non-empty");
  Stmt::new(s, StmtKind::If(Box::new(If { cond, body, orelse })))
}

pub fn int(s: impl Into<Span>, value: i64) -> Expr<'static> {
  Expr::new(s, ExprKind::Constant(Constant::Int(value)))
}

pub fn float(s: impl Into<Span>, value: f64) -> Expr<'static> {
  Expr::new(s, ExprKind::Constant(Constant::Float(value)))
}

pub fn bool_lit(s: impl Into<Span>, value: bool) -> Expr<'static> {
  Expr::new(s, ExprKind::Constant(Constant::Bool(value)))
}

pub fn variable(name: Ident) -> Expr {
  Expr::new(name.span, ExprKind::Variable(name))
}

pub fn unary_op<'src>(s: impl Into<Span>, op: UnaryOperator, value: Expr<'src>) -> Expr<'src> {
  Expr::new(s, ExprKind::UnaryOp(Box::new(UnaryOp { op, value })))
}

pub fn bin_op<'src>(op: BinOperator, left: Expr<'src>, right: Expr<'src>) -> Expr<'src> {
  let span = left.span.join(right.span);
  Expr::new(span, ExprKind::BinOp(Box::new(BinOp { op, left, right })))
}

/// Flattens a run of same-operator boolean operands into one `BoolOp`. A
/// single operand passes through unwrapped.
pub fn bool_op(op: BoolOperator, mut values: Vec<Expr>) -> Expr {
  debug_assert!(!values.is_empty());
  if values.len() == 1 {
    return values.pop().unwrap();
  }
  let span = values[0].span.join(values[values.len() - 1].span);
  Expr::new(span, ExprKind::BoolOp(Box::new(BoolOp { op, values })))
}

impl BinOperator {
  pub fn as_str(self) -> &'static str {
    match self {
      BinOperator::Add => "+",
      BinOperator::Sub => "-",
      BinOperator::Mul => "*",
      BinOperator::Div => "/",
      BinOperator::Mod => "%",
      BinOperator::Pow => "**",
    }
  }
}

impl UnaryOperator {
  pub fn as_str(self) -> &'static str {
    match self {
      UnaryOperator::Plus => "+",
      UnaryOperator::Minus => "-",
      UnaryOperator::Not => "not",
    }
  }
}

impl BoolOperator {
  pub fn as_str(self) -> &'static str {
    match self {
      BoolOperator::And => "and",
      BoolOperator::Or => "or",
    }
  }
}
