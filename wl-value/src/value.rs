use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use wl_core::{Float, Int, LiteralText, ValueKind};

use crate::capability::{Arithmetic, AsText, Compare, HasKind};
use crate::convert::NumberLike;
use crate::error::{fail, ValueError};
use crate::number;
use crate::text::TextValue;

/// Represents a Waterlang value.
///
/// Each variant owns its payload, so cloning a value deep-copies it and two handles never alias
/// the same storage. Capabilities dispatch over the tag; a new kind is a new variant, and the
/// compiler points at every match that has to learn about it.
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer value.
    Integer(Int),
    /// A floating-point value.
    Float(Float),
    /// A string value.
    Text(TextValue),
}

impl Value {
    /// Wraps a text literal, copying it.
    #[inline(always)]
    pub fn new_text(literal: LiteralText) -> Self {
        Self::Text(TextValue::new(literal))
    }

    #[inline(always)]
    pub fn new_integer(value: Int) -> Self {
        Self::Integer(value)
    }

    #[inline(always)]
    pub fn new_float(value: Float) -> Self {
        Self::Float(value)
    }

    /// Returns whether this value is an integer.
    #[inline(always)]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns whether this value is a float.
    #[inline(always)]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns whether this value is a string.
    #[inline(always)]
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns this value as an integer, if such is its type.
    #[inline(always)]
    pub fn as_integer(&self) -> Option<Int> {
        if let Value::Integer(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns this value as a float, if such is its type.
    #[inline(always)]
    pub fn as_float(&self) -> Option<Float> {
        if let Value::Float(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns this value as a string, if such is its type.
    ///
    /// This is how a caller that needs [`TextValue::size`] gets at it.
    #[inline(always)]
    pub fn as_text_value(&self) -> Option<&TextValue> {
        if let Value::Text(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Converts a numeric value to a float.
    pub fn to_float(&self) -> Result<Float, ValueError> {
        match self {
            Value::Integer(v) => Ok(number::promote(*v)),
            Value::Float(v) => Ok(*v),
            Value::Text(_) => fail(ValueError::Conversion {
                from: ValueKind::Text,
                to: ValueKind::Float,
            }),
        }
    }

    /// Converts a numeric value to an integer, truncating floats toward zero.
    pub fn to_integer(&self) -> Result<Int, ValueError> {
        match self {
            Value::Integer(v) => Ok(*v),
            Value::Float(v) => number::truncate(*v),
            Value::Text(_) => fail(ValueError::Conversion {
                from: ValueKind::Text,
                to: ValueKind::Integer,
            }),
        }
    }

    fn mismatch<T>(&self, op: &'static str, rhs: &Value) -> Result<T, ValueError> {
        fail(ValueError::TypeMismatch {
            op,
            left: self.kind(),
            right: rhs.kind(),
        })
    }
}

impl AsText for Value {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Integer(v) => v.as_text(),
            Value::Float(v) => v.as_text(),
            Value::Text(v) => v.as_text(),
        }
    }
}

impl HasKind for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(v) => v.kind(),
            Value::Float(v) => v.kind(),
            Value::Text(v) => v.kind(),
        }
    }
}

/// Integer pairs stay integers; any float operand promotes the pair to floats. Strings only
/// support `+`, which is handled separately.
macro_rules! numeric_op {
    ($self:expr, $rhs:expr, $op:literal, $method:ident) => {
        match (NumberLike::of($self), NumberLike::of($rhs)) {
            (Some(NumberLike::Integer(a)), Some(NumberLike::Integer(b))) => a.$method(&b).map(Value::Integer),
            (Some(a), Some(b)) => a.as_float().$method(&b.as_float()).map(Value::Float),
            _ => $self.mismatch($op, $rhs),
        }
    };
}

impl Arithmetic for Value {
    type Output = Value;

    fn add(&self, rhs: &Value) -> Result<Value, ValueError> {
        if let (Value::Text(a), Value::Text(b)) = (self, rhs) {
            return Ok(Value::Text(a.concat(b)));
        }
        numeric_op!(self, rhs, "+", add)
    }

    fn sub(&self, rhs: &Value) -> Result<Value, ValueError> {
        numeric_op!(self, rhs, "-", sub)
    }

    fn mul(&self, rhs: &Value) -> Result<Value, ValueError> {
        numeric_op!(self, rhs, "*", mul)
    }

    fn div(&self, rhs: &Value) -> Result<Value, ValueError> {
        numeric_op!(self, rhs, "/", div)
    }

    fn rem(&self, rhs: &Value) -> Result<Value, ValueError> {
        numeric_op!(self, rhs, "%", rem)
    }
}

impl Compare for Value {
    fn compare(&self, rhs: &Value) -> Result<Ordering, ValueError> {
        if let (Value::Text(a), Value::Text(b)) = (self, rhs) {
            return a.compare(b);
        }
        match (NumberLike::of(self), NumberLike::of(rhs)) {
            (Some(a), Some(b)) => a.compare(&b),
            _ => self.mismatch("<=>", rhs),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.eq(b),
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => number::int_eq_float(*a, *b),
            (Self::Float(a), Self::Float(b)) => a.eq(b),
            (Self::Text(a), Self::Text(b)) => a.eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
