/// Numeric conversion helpers.
///
/// Provides a safe conversion from `i64` to `usize` that returns the caller
/// supplied error instead of silently wrapping negative values.
pub mod num;
/// Roman numeral codec.
///
/// Decodes Roman numeral tokens through either the fixed one-to-ten table or
/// the full subtractive grammar, and encodes positive integers up to 3999.
pub mod roman;
/// Display helpers for printing results.
pub mod display;
