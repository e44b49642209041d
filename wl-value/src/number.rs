use std::borrow::Cow;
use std::cmp::Ordering;

use num_traits::ToPrimitive;
use wl_core::{Float, Int, ValueKind};

use crate::capability::{Arithmetic, AsText, Compare, HasKind};
use crate::error::{fail, ValueError};

impl AsText for Int {
    fn as_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl AsText for Float {
    /// Always carries a fractional part or an exponent (`1.0`, `1e20`, `inf`, `NaN`), so a float
    /// never prints the same as an integer.
    fn as_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self))
    }
}

impl HasKind for Int {
    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Integer
    }
}

impl HasKind for Float {
    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }
}

/// Runs a checked integer operation, telling a zero divisor apart from an overflow.
macro_rules! checked_int {
    ($op:literal, $checked:expr, $rhs:expr) => {
        match $checked {
            Some(value) => Ok(value),
            None if $op == "/" || $op == "%" => {
                if *$rhs == 0 {
                    fail(ValueError::DivisionByZero { op: $op })
                } else {
                    fail(ValueError::Overflow { op: $op })
                }
            }
            None => fail(ValueError::Overflow { op: $op }),
        }
    };
}

impl Arithmetic for Int {
    type Output = Int;

    fn add(&self, rhs: &Int) -> Result<Int, ValueError> {
        checked_int!("+", self.checked_add(*rhs), rhs)
    }

    fn sub(&self, rhs: &Int) -> Result<Int, ValueError> {
        checked_int!("-", self.checked_sub(*rhs), rhs)
    }

    fn mul(&self, rhs: &Int) -> Result<Int, ValueError> {
        checked_int!("*", self.checked_mul(*rhs), rhs)
    }

    /// Truncates toward zero.
    fn div(&self, rhs: &Int) -> Result<Int, ValueError> {
        checked_int!("/", self.checked_div(*rhs), rhs)
    }

    /// Takes the sign of the dividend.
    fn rem(&self, rhs: &Int) -> Result<Int, ValueError> {
        checked_int!("%", self.checked_rem(*rhs), rhs)
    }
}

// IEEE 754 semantics: dividing by zero yields an infinity or NaN, never an error.
impl Arithmetic for Float {
    type Output = Float;

    fn add(&self, rhs: &Float) -> Result<Float, ValueError> {
        Ok(self + rhs)
    }

    fn sub(&self, rhs: &Float) -> Result<Float, ValueError> {
        Ok(self - rhs)
    }

    fn mul(&self, rhs: &Float) -> Result<Float, ValueError> {
        Ok(self * rhs)
    }

    fn div(&self, rhs: &Float) -> Result<Float, ValueError> {
        Ok(self / rhs)
    }

    fn rem(&self, rhs: &Float) -> Result<Float, ValueError> {
        Ok(self % rhs)
    }
}

impl Compare for Int {
    #[inline(always)]
    fn compare(&self, rhs: &Int) -> Result<Ordering, ValueError> {
        Ok(self.cmp(rhs))
    }
}

impl Compare for Float {
    fn compare(&self, rhs: &Float) -> Result<Ordering, ValueError> {
        match self.partial_cmp(rhs) {
            Some(ordering) => Ok(ordering),
            None => fail(ValueError::Unordered),
        }
    }
}

/// Widens an integer to a float. Magnitudes beyond 2^53 round to the nearest representable float.
#[inline(always)]
pub fn promote(value: Int) -> Float {
    value as Float
}

/// Whether an integer and a float hold exactly the same number. No rounding is involved, so this
/// stays transitive with integer equality above 2^53.
#[inline(always)]
pub fn int_eq_float(a: Int, b: Float) -> bool {
    b.fract() == 0.0 && b.to_isize() == Some(a)
}

/// Orders an integer against a float without losing precision on either side.
pub fn compare_int_float(a: Int, b: Float) -> Result<Ordering, ValueError> {
    match promote(a).compare(&b)? {
        Ordering::Equal => {}
        ordering => return Ok(ordering),
    }
    // `b` is integral here: it equals a rounded integer. The tie is broken on the integer side.
    match b.to_isize() {
        Some(b) => Ok(a.cmp(&b)),
        None if b > 0.0 => Ok(Ordering::Less),
        None => Ok(Ordering::Greater),
    }
}

/// Truncates a float toward zero. NaN and values outside the integer range can't be converted.
pub fn truncate(value: Float) -> Result<Int, ValueError> {
    match value.trunc().to_isize() {
        Some(value) => Ok(value),
        None => fail(ValueError::Conversion {
            from: ValueKind::Float,
            to: ValueKind::Integer,
        }),
    }
}
