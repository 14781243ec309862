use crate::{ast::Base, error::ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A numeric operand was outside the accepted range.
    OutOfRange {
        /// The offending value.
        value:  i64,
        /// Smallest accepted value.
        min:    i64,
        /// Largest accepted value.
        max:    i64,
        /// The column where the error occurred.
        column: usize,
    },
    /// A string was divided into more parts than it has characters.
    InvalidDivision {
        /// The requested number of parts.
        divisor: i64,
        /// Number of characters in the string.
        length:  usize,
        /// The column where the error occurred.
        column:  usize,
    },
    /// Numeral operands were written in different numbering systems.
    MixedBase {
        /// Base of the left-hand operand.
        left:   Base,
        /// Base of the right-hand operand.
        right:  Base,
        /// The column where the error occurred.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The column where the error occurred.
        column: usize,
    },
    /// A result below one had to be written as a Roman numeral.
    NonPositiveNumeral {
        /// The value that has no Roman representation.
        value:  i64,
        /// The column where the error occurred.
        column: usize,
    },
    /// The operand types do not fit the operator.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The column where the error occurred.
        column:  usize,
    },
}

impl RuntimeError {
    /// Returns the error category of this runtime error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::InvalidDivision { .. } => ErrorKind::Range,
            Self::MixedBase { .. } => ErrorKind::MixedBase,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::NonPositiveNumeral { .. } => ErrorKind::NonPositiveNumeral,
            Self::TypeError { .. } => ErrorKind::Format,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { value, min, max, column } => write!(f,
                                                                  "Error at column {column}: Numbers must be in the range {min} to {max}, found {value}."),
            Self::InvalidDivision { divisor,
                                    length,
                                    column, } => write!(f,
                                                        "Error at column {column}: Cannot divide a string of {length} characters into {divisor} parts."),
            Self::MixedBase { left, right, column } => write!(f,
                                                              "Error at column {column}: Mixed numbering systems: {left} and {right}."),
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::NonPositiveNumeral { value, column } => write!(f,
                                                                 "Error at column {column}: Roman numerals have no representation for zero or negative values, found {value}."),
            Self::TypeError { details, column } => {
                write!(f, "Error at column {column}: Type error: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
