use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use wl_core::primitive::int_from_len;
use wl_core::{Int, LiteralText, ValueKind};

use crate::capability::{AsText, Compare, HasKind};
use crate::error::ValueError;

/// A Waterlang string.
///
/// Owns a copy of the literal it was built from, along with its byte length as recorded at
/// construction. There is no operation that edits the buffer in place: concatenation builds a new
/// value. Two values built from the same literal never share storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextValue {
    data: Box<str>,
    size: Int,
}

impl TextValue {
    /// Copies `literal` into a new value.
    pub fn new(literal: LiteralText) -> Self {
        Self::from_owned(literal.into())
    }

    /// Takes ownership of an already-built buffer without copying it.
    pub fn from_owned(data: String) -> Self {
        let data = data.into_boxed_str();
        let size = int_from_len(data.len());

        #[cfg(feature = "trace-values")]
        log::trace!("new text value ({} bytes)", size);

        Self { data, size }
    }

    /// Returns the length in bytes, as recorded at construction.
    #[inline(always)]
    pub fn size(&self) -> Int {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Returns a new value holding `self` followed by `other`. Neither operand is touched.
    pub fn concat(&self, other: &TextValue) -> TextValue {
        let mut data = String::with_capacity(self.data.len() + other.data.len());
        data.push_str(&self.data);
        data.push_str(&other.data);
        Self::from_owned(data)
    }
}

impl AsText for TextValue {
    #[inline(always)]
    fn as_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.data)
    }
}

impl HasKind for TextValue {
    #[inline(always)]
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }
}

impl Compare for TextValue {
    /// Byte-wise lexical order.
    fn compare(&self, rhs: &Self) -> Result<Ordering, ValueError> {
        Ok(self.data.cmp(&rhs.data))
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl From<LiteralText<'_>> for TextValue {
    fn from(literal: LiteralText<'_>) -> Self {
        Self::new(literal)
    }
}

impl From<String> for TextValue {
    fn from(data: String) -> Self {
        Self::from_owned(data)
    }
}

static_assertions::assert_impl_all!(TextValue: Send, Sync, Clone);
