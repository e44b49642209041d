//! Every other component refers to these names rather than to machine types, so the
//! language has exactly one definition of "its int".

/// The language's integer: signed, platform-native width.
pub type Int = isize;

/// The language's floating-point number: IEEE 754 double precision.
pub type Float = f64;

/// Source text used to initialize a value.
///
/// This is a borrowed, immutable view. Values built from it copy what they need, so the literal
/// can be dropped as soon as construction returns.
pub type LiteralText<'a> = &'a str;

static_assertions::assert_eq_size!(Int, usize);
static_assertions::assert_eq_size!(Float, u64);
static_assertions::const_assert_eq!(size_of::<LiteralText<'static>>(), 2 * size_of::<usize>());

/// Converts a byte length into the language's integer.
///
/// Allocations never exceed `isize::MAX` bytes, so this cannot truncate.
#[inline(always)]
pub fn int_from_len(len: usize) -> Int {
    len as Int
}
