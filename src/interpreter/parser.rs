/// Entry point of the parser.
///
/// Parses `operand operator operand`, rejects trailing tokens and checks that
/// the operand kinds fit the operator.
pub mod core;

/// Operand parsing and classification.
///
/// Turns string, integer and Roman tokens into classified operands, checking
/// string lengths and decoding Roman numerals.
pub mod operand;

/// Shared parser utilities.
///
/// Provides operator mapping and end-of-input checks.
pub mod utils;
