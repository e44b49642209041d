use std::cmp::Ordering;

use anyhow::{Context, Error};
use wl_core::{Float, Int, LiteralText};

use crate::capability::Compare;
use crate::error::ValueError;
use crate::number;
use crate::text::TextValue;
use crate::value::Value;

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Value::Integer(value)
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Value::Float(value)
    }
}

impl From<TextValue> for Value {
    fn from(value: TextValue) -> Self {
        Value::Text(value)
    }
}

impl From<LiteralText<'_>> for Value {
    fn from(literal: LiteralText<'_>) -> Self {
        Value::new_text(literal)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(TextValue::from_owned(value))
    }
}

impl TryFrom<&Value> for Int {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_integer().context("value was not an integer type")
    }
}

impl TryFrom<&Value> for Float {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().context("value was not a float type")
    }
}

impl<'a> TryFrom<&'a Value> for &'a TextValue {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text_value().context("value was not a string type")
    }
}

/// A numeric operand, before promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLike {
    Integer(Int),
    Float(Float),
}

impl NumberLike {
    /// Projects a value onto its numeric part, if it has one.
    #[inline(always)]
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(v) => Some(Self::Integer(*v)),
            Value::Float(v) => Some(Self::Float(*v)),
            Value::Text(_) => None,
        }
    }

    #[inline(always)]
    pub fn as_float(self) -> Float {
        match self {
            Self::Integer(v) => number::promote(v),
            Self::Float(v) => v,
        }
    }
}

impl Compare for NumberLike {
    fn compare(&self, rhs: &Self) -> Result<Ordering, ValueError> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => a.compare(b),
            (Self::Integer(a), Self::Float(b)) => number::compare_int_float(*a, *b),
            (Self::Float(a), Self::Integer(b)) => number::compare_int_float(*b, *a).map(Ordering::reverse),
            (Self::Float(a), Self::Float(b)) => a.compare(b),
        }
    }
}
