//!
//! This crate contains the primitive vocabulary shared by every Waterlang component that touches runtime values.
//!

/// The language's canonical scalar kinds (`Int`, `Float`, `LiteralText`).
pub mod primitive;
/// Language-level names for the kinds of runtime values.
pub mod kind;

pub use kind::ValueKind;
pub use primitive::{Float, Int, LiteralText};
