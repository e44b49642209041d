//!
//! How runtime values are represented in Waterlang: the capabilities every value kind provides,
//! the concrete kinds, and the `Value` handle an interpreter passes around.
//!

/// The capability traits value kinds implement.
pub mod capability;
/// To convert values to types, and vice versa.
pub mod convert;
/// Errors raised when a capability is invoked on values that can't support it.
pub mod error;
/// Integer and float kinds, backed directly by the primitive aliases.
pub mod number;
/// The owned text kind.
pub mod text;
/// The tagged handle over every concrete kind.
pub mod value;

pub use capability::{Arithmetic, AsText, Compare, HasKind};
pub use error::ValueError;
pub use text::TextValue;
pub use value::Value;
pub use wl_core::{Float, Int, LiteralText, ValueKind};
