use indoc::indoc;

use crate::ast::{BinOperator, BoolOperator, Constant, ExprKind, StmtKind, UnaryOperator};
use crate::lexer::Lexer;

use super::Parser;

fn parse(src: &str) -> crate::ast::Module {
  Parser::new(Lexer::lex(src).expect("lex")).parse_module().expect("parse")
}

#[test]
fn simple_expr_statement() {
  let module = parse("3 + 5\n");
  assert_eq!(module.body.len(), 1);
  match &*module.body[0] {
    StmtKind::Expr(e) => match &**e {
      ExprKind::BinOp(b) => {
        assert_eq!(b.op, BinOperator::Add);
        assert!(matches!(&*b.left, ExprKind::Constant(Constant::Int(3))));
        assert!(matches!(&*b.right, ExprKind::Constant(Constant::Int(5))));
      }
      other => panic!("expected BinOp, got {other:?}"),
    },
    other => panic!("expected Expr, got {other:?}"),
  }
}

#[test]
fn chained_assignment_targets() {
  let module = parse("a = b = c = 3\n");
  match &*module.body[0] {
    StmtKind::Assign(a) => {
      let names: Vec<_> = a.targets.iter().map(|t| t.to_string()).collect();
      assert_eq!(names, vec!["a", "b", "c"]);
      assert!(matches!(&*a.value, ExprKind::Constant(Constant::Int(3))));
    }
    other => panic!("expected Assign, got {other:?}"),
  }
}

#[test]
fn precedence_of_arithmetic() {
  // `2 + 3 * 4` must parse as `2 + (3 * 4)`, not `(2 + 3) * 4`.
  let module = parse("2 + 3 * 4\n");
  match &*module.body[0] {
    StmtKind::Expr(e) => match &**e {
      ExprKind::BinOp(b) => {
        assert_eq!(b.op, BinOperator::Add);
        assert!(matches!(&*b.left, ExprKind::Constant(Constant::Int(2))));
        match &*b.right {
          ExprKind::BinOp(inner) => assert_eq!(inner.op, BinOperator::Mul),
          other => panic!("expected nested Mul, got {other:?}"),
        }
      }
      other => panic!("expected BinOp, got {other:?}"),
    },
    other => panic!("expected Expr, got {other:?}"),
  }
}

#[test]
fn exponent_is_right_associative() {
  // `2 ** 3 ** 2` must parse as `2 ** (3 ** 2)`.
  let module = parse("2 ** 3 ** 2\n");
  match &*module.body[0] {
    StmtKind::Expr(e) => match &**e {
      ExprKind::BinOp(outer) => {
        assert_eq!(outer.op, BinOperator::Pow);
        assert!(matches!(&*outer.left, ExprKind::Constant(Constant::Int(2))));
        match &*outer.right {
          ExprKind::BinOp(inner) => {
            assert_eq!(inner.op, BinOperator::Pow);
            assert!(matches!(&*inner.left, ExprKind::Constant(Constant::Int(3))));
            assert!(matches!(&*inner.right, ExprKind::Constant(Constant::Int(2))));
          }
          other => panic!("expected nested Pow, got {other:?}"),
        }
      }
      other => panic!("expected BinOp, got {other:?}"),
    },
    other => panic!("expected Expr, got {other:?}"),
  }
}

#[test]
fn unary_minus_binds_looser_than_exponent() {
  // `-2 ** 2` must parse as `-(2 ** 2)`.
  let module = parse("-2 ** 2\n");
  match &*module.body[0] {
    StmtKind::Expr(e) => match &**e {
      ExprKind::UnaryOp(u) => {
        assert_eq!(u.op, UnaryOperator::Minus);
        assert!(matches!(&*u.value, ExprKind::BinOp(_)));
      }
      other => panic!("expected UnaryOp, got {other:?}"),
    },
    other => panic!("expected Expr, got {other:?}"),
  }
}

#[test]
fn bool_op_flattens_same_operator_run() {
  let module = parse("a and b and c\n");
  match &*module.body[0] {
    StmtKind::Expr(e) => match &**e {
      ExprKind::BoolOp(b) => {
        assert_eq!(b.op, BoolOperator::And);
        assert_eq!(b.values.len(), 3);
      }
      other => panic!("expected BoolOp, got {other:?}"),
    },
    other => panic!("expected Expr, got {other:?}"),
  }
}

#[test]
fn if_elif_else_nests_as_sole_orelse_statement() {
  let src = indoc! {"
        if a:
            1
        elif b:
            2
        else:
            3
    "};
  let module = parse(src);
  match &*module.body[0] {
    StmtKind::If(top) => {
      assert_eq!(top.body.len(), 1);
      let orelse = top.orelse.as_ref().expect("elif branch");
      assert_eq!(orelse.len(), 1);
      match &*orelse[0] {
        StmtKind::If(elif) => {
          assert_eq!(elif.body.len(), 1);
          assert!(elif.orelse.is_some());
        }
        other => panic!("expected nested If, got {other:?}"),
      }
    }
    other => panic!("expected If, got {other:?}"),
  }
}

#[test]
fn if_without_else_has_no_orelse() {
  let module = parse(indoc! {"
        if a:
            1
    "});
  match &*module.body[0] {
    StmtKind::If(top) => assert!(top.orelse.is_none()),
    other => panic!("expected If, got {other:?}"),
  }
}

#[test]
fn unbalanced_parens_is_a_parse_error() {
  assert!(Parser::new(Lexer::lex("(1 + 2\n").unwrap())
    .parse_module()
    .is_err());
}

#[test]
fn missing_colon_is_a_parse_error() {
  let src = indoc! {"
        if a
            1
    "};
  assert!(Parser::new(Lexer::lex(src).unwrap())
    .parse_module()
    .is_err());
}

#[test]
fn empty_if_body_is_a_parse_error() {
  // The grammar requires `body := INDENT statement+ DEDENT`; an `if` whose
  // block is immediately dedented (no statements at all) has no INDENT to
  // consume in the first place, so there's nothing for `body()` to parse.
  assert!(Parser::new(Lexer::lex("if a:\nb\n").unwrap())
    .parse_module()
    .is_err());
}

#[test]
fn leading_and_trailing_blank_lines_are_ignored() {
  let module = parse("\n\n1\n\n\n");
  assert_eq!(module.body.len(), 1);
}
