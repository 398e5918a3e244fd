//! The three runtime value types named in the design: no heap objects, no
//! interning, no GC - this language has no strings, lists, or functions, so
//! none of that machinery is warranted.

use std::fmt;

use syntax::ast::{BinOperator, Constant, UnaryOperator};

use crate::error::RuntimeError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
  Int(i64),
  Float(f64),
  Bool(bool),
}

impl From<Constant> for Value {
  fn from(value: Constant) -> Self {
    match value {
      Constant::Int(v) => Value::Int(v),
      Constant::Float(v) => Value::Float(v),
      Constant::Bool(v) => Value::Bool(v),
    }
  }
}

impl Value {
  /// Numeric zero and boolean `False` are falsy; everything else is truthy.
  pub fn is_truthy(&self) -> bool {
    match self {
      Value::Int(v) => *v != 0,
      Value::Float(v) => *v != 0.0,
      Value::Bool(v) => *v,
    }
  }

  fn as_i64(self) -> i64 {
    match self {
      Value::Int(v) => v,
      Value::Bool(v) => v as i64,
      Value::Float(_) => unreachable!("as_i64 called on a float"),
    }
  }

  fn as_f64(self) -> f64 {
    match self {
      Value::Int(v) => v as f64,
      Value::Float(v) => v,
      Value::Bool(v) => v as i64 as f64,
    }
  }

  fn is_float(self) -> bool {
    matches!(self, Value::Float(_))
  }

  pub fn unary_op(self, op: UnaryOperator) -> Value {
    match op {
      UnaryOperator::Plus => self,
      UnaryOperator::Minus => match self {
        Value::Int(v) => Value::Int(v.wrapping_neg()),
        Value::Float(v) => Value::Float(-v),
        Value::Bool(v) => Value::Int(-(v as i64)),
      },
      UnaryOperator::Not => Value::Bool(!self.is_truthy()),
    }
  }

  pub fn bin_op(self, op: BinOperator, other: Value) -> Result<Value, RuntimeError> {
    match op {
      BinOperator::Add => Ok(self.promote(other, i64::wrapping_add, |a, b| a + b)),
      BinOperator::Sub => Ok(self.promote(other, i64::wrapping_sub, |a, b| a - b)),
      BinOperator::Mul => Ok(self.promote(other, i64::wrapping_mul, |a, b| a * b)),
      // `/` always promotes to true (floating) division, per the design.
      BinOperator::Div => Ok(Value::Float(self.as_f64() / other.as_f64())),
      BinOperator::Mod => self.modulo(other),
      BinOperator::Pow => Ok(self.pow(other)),
    }
  }

  fn promote(self, other: Value, int_op: fn(i64, i64) -> i64, float_op: fn(f64, f64) -> f64) -> Value {
    if self.is_float() || other.is_float() {
      Value::Float(float_op(self.as_f64(), other.as_f64()))
    } else {
      Value::Int(int_op(self.as_i64(), other.as_i64()))
    }
  }

  /// Floored modulo (matching the reference implementation's use of
  /// Python's `%`, which floors toward negative infinity): `-7 % 3 == 2`,
  /// not Rust's truncating `-1`. Integer `%` by zero is the runtime
  /// "division by zero" error; `%` with a float operand promotes both
  /// sides to `f64` and never raises, matching `/`'s IEEE-754 semantics.
  fn modulo(self, other: Value) -> Result<Value, RuntimeError> {
    if self.is_float() || other.is_float() {
      let (a, b) = (self.as_f64(), other.as_f64());
      Ok(Value::Float(a - b * (a / b).floor()))
    } else {
      let (a, b) = (self.as_i64(), other.as_i64());
      if b == 0 {
        return Err(RuntimeError::DivisionByZero);
      }
      let r = a.wrapping_rem(b);
      let r = if r != 0 && (r < 0) != (b < 0) { r + b } else { r };
      Ok(Value::Int(r))
    }
  }

  /// `**` with a negative exponent yields a float; an integral base (`Int`
  /// or `Bool`, matching `promote`/`modulo`) with a non-negative integer
  /// exponent stays integral.
  fn pow(self, other: Value) -> Value {
    if !self.is_float() && !other.is_float() {
      let (base, exp) = (self.as_i64(), other.as_i64());
      if exp >= 0 {
        return Value::Int(base.wrapping_pow(exp as u32));
      }
      return Value::Float((base as f64).powi(exp as i32));
    }
    Value::Float(self.as_f64().powf(other.as_f64()))
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Int(v) => write!(f, "{v}"),
      Value::Float(v) => write!(f, "{v}"),
      Value::Bool(v) => write!(f, "{v}"),
    }
  }
}
