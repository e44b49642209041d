use std::fmt::{self, Display};

/// The kind of a runtime value, as the language names it.
///
/// This is the closed set of concrete kinds a `Value` can hold. Adding a variant here forces every
/// exhaustive match over kinds to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Backed by [`crate::Int`].
    Integer,
    /// Backed by [`crate::Float`].
    Float,
    /// An owned text buffer.
    Text,
}

impl ValueKind {
    /// Returns the name user code sees for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Integer => "Int",
            ValueKind::Float => "Float",
            ValueKind::Text => "String",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
