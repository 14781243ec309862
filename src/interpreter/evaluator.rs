/// Core evaluation logic and configuration.
///
/// Contains the evaluation `Context`, the mode and domain selection, operand
/// range checks and the dispatch on operand kinds.
pub mod core;

/// Numeral arithmetic.
///
/// Implements `+ - * /` on Arabic or Roman numerals, including the base,
/// divisor and range checks.
pub mod numeral;

/// String arithmetic.
///
/// Implements concatenation, removal, repetition and truncation of quoted
/// strings.
pub mod text;
