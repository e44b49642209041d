use std::borrow::Cow;
use std::cmp::Ordering;

use wl_core::ValueKind;

use crate::error::ValueError;

/// The one capability every runtime value provides: it can be produced as text.
///
/// Implementations must be total and must not mutate the value. Calling it twice on the same
/// value yields the same text. Kinds that own a text buffer hand out a borrow of it; kinds that
/// have to format something return an owned string.
pub trait AsText {
    fn as_text(&self) -> Cow<'_, str>;
}

/// Reports which concrete kind a value is.
pub trait HasKind {
    fn kind(&self) -> ValueKind;
}

/// Binary arithmetic, for kinds that opt into it.
///
/// Every operation is fallible: integer overflow, division by zero and operands of unrelated
/// kinds are reported as a [`ValueError`] rather than a panic.
pub trait Arithmetic<Rhs = Self> {
    type Output;

    fn add(&self, rhs: &Rhs) -> Result<Self::Output, ValueError>;
    fn sub(&self, rhs: &Rhs) -> Result<Self::Output, ValueError>;
    fn mul(&self, rhs: &Rhs) -> Result<Self::Output, ValueError>;
    fn div(&self, rhs: &Rhs) -> Result<Self::Output, ValueError>;
    fn rem(&self, rhs: &Rhs) -> Result<Self::Output, ValueError>;
}

/// Ordering between two values, for kinds that opt into it.
pub trait Compare<Rhs = Self> {
    fn compare(&self, rhs: &Rhs) -> Result<Ordering, ValueError>;

    #[inline(always)]
    fn lt(&self, rhs: &Rhs) -> Result<bool, ValueError> {
        Ok(self.compare(rhs)? == Ordering::Less)
    }

    #[inline(always)]
    fn gt(&self, rhs: &Rhs) -> Result<bool, ValueError> {
        Ok(self.compare(rhs)? == Ordering::Greater)
    }

    #[inline(always)]
    fn lt_or_eq(&self, rhs: &Rhs) -> Result<bool, ValueError> {
        Ok(self.compare(rhs)? != Ordering::Greater)
    }

    #[inline(always)]
    fn gt_or_eq(&self, rhs: &Rhs) -> Result<bool, ValueError> {
        Ok(self.compare(rhs)? != Ordering::Less)
    }
}
