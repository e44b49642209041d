use std::error::Error;
use std::fmt;

use wl_core::ValueKind;

/// A capability was invoked on values that can't satisfy it.
///
/// These are language-level errors: the interpreter reports them to user code and carries on.
/// Allocation failure is not represented here, it aborts the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The operator isn't defined between these two kinds.
    TypeMismatch {
        op: &'static str,
        left: ValueKind,
        right: ValueKind,
    },
    /// Integer division or remainder with a zero divisor.
    DivisionByZero { op: &'static str },
    /// The result does not fit the language's integer.
    Overflow { op: &'static str },
    /// One of the operands has no ordering (NaN).
    Unordered,
    /// The value can't be represented as the requested kind.
    Conversion { from: ValueKind, to: ValueKind },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::TypeMismatch { op, left, right } => {
                write!(f, "unsupported operand kinds for '{}': {} and {}", op, left, right)
            }
            ValueError::DivisionByZero { op } => write!(f, "'{}': division by zero", op),
            ValueError::Overflow { op } => write!(f, "'{}': integer overflow", op),
            ValueError::Unordered => f.write_str("NaN can't be ordered"),
            ValueError::Conversion { from, to } => write!(f, "can't convert {} to {}", from, to),
        }
    }
}

impl Error for ValueError {}

/// Logs the failure and returns it as an `Err`.
#[inline]
pub(crate) fn fail<T>(err: ValueError) -> Result<T, ValueError> {
    log::debug!("value capability failed: {}", err);
    Err(err)
}
