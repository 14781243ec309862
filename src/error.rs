/// Parsing errors.
///
/// Defines all error types that can occur while lexing the input line,
/// checking its `operand operator operand` shape and classifying the operands.
/// Unknown characters, malformed Roman numerals and string operands of the
/// wrong length all end up here.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised once a well-formed expression
/// is evaluated: out-of-range operands, mixed numbering systems, division by
/// zero and results that have no Roman representation.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error category of a failed evaluation.
///
/// Every [`ParseError`] and [`RuntimeError`] variant maps onto exactly one
/// kind, so callers can react to the category without matching on the
/// detailed variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not match the expected grammar.
    Format,
    /// A numeric operand or divisor is outside its allowed bound.
    Range,
    /// Numeral operands use different numbering systems.
    MixedBase,
    /// Numeral division with a zero divisor.
    DivisionByZero,
    /// A Roman numeral token is malformed.
    InvalidNumeral,
    /// A zero or negative value was about to be written as a Roman numeral.
    NonPositiveNumeral,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Format => "format",
            Self::Range => "range",
            Self::MixedBase => "mixed-base",
            Self::DivisionByZero => "division-by-zero",
            Self::InvalidNumeral => "invalid-numeral",
            Self::NonPositiveNumeral => "non-positive-numeral",
        };
        write!(f, "{kind}")
    }
}

/// Any error produced while evaluating an expression.
#[derive(Debug)]
pub enum Error {
    /// The input line could not be lexed or parsed.
    Parse(ParseError),
    /// The expression was well formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use duocalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("VI+3").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MixedBase);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
