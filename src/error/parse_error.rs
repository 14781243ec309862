use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// The input line contained no expression at all.
    EmptyInput,
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// Found extra tokens after the right-hand operand.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// A quoted string operand was empty or too long.
    InvalidStringLength {
        /// Number of characters between the quotes.
        length: usize,
        /// Largest accepted number of characters.
        max:    usize,
        /// The column where the error occurred.
        column: usize,
    },
    /// An operand of the wrong kind for the mode or the operator.
    OperandMismatch {
        /// Details about the mismatch.
        details: String,
        /// The column where the error occurred.
        column:  usize,
    },
    /// A Roman numeral token could not be decoded.
    InvalidNumeral {
        /// The offending token.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Returns the error category of this parse error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumeral { .. } => ErrorKind::InvalidNumeral,
            Self::UnexpectedToken { .. }
            | Self::EmptyInput
            | Self::UnexpectedEndOfInput { .. }
            | Self::UnexpectedTrailingTokens { .. }
            | Self::InvalidStringLength { .. }
            | Self::OperandMismatch { .. } => ErrorKind::Format,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::EmptyInput => write!(f, "Error: Empty input, expected an expression."),

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Error: Unexpected end of input, expected {expected}.")
            },

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression. Check your input: {token}"),

            Self::InvalidStringLength { length, max, column } => write!(f,
                                                                        "Error at column {column}: Strings must have between 1 and {max} characters, found {length}."),

            Self::OperandMismatch { details, column } => {
                write!(f, "Error at column {column}: Invalid operand: {details}.")
            },

            Self::InvalidNumeral { token, column } => {
                write!(f, "Error at column {column}: Invalid Roman numeral '{token}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
