/// The numbering system a numeric operand was written in.
///
/// Numeral expressions keep the base of their operands so the result can be
/// rendered the same way: `6+3` prints `9`, `VI+III` prints `IX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Base {
    /// Decimal digits, such as `7`.
    Arabic,
    /// Roman numerals, such as `VII`.
    Roman,
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "Arabic"),
            Self::Roman => write!(f, "Roman"),
        }
    }
}

/// A classified operand of a binary expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// The contents of a double-quoted string literal, without the quotes.
    Text {
        /// The characters between the quotes.
        value:  String,
        /// Column of the opening quote.
        column: usize,
    },
    /// An integer written in Arabic or Roman notation.
    Numeral {
        /// The decoded value.
        value:  i64,
        /// The notation the operand was written in.
        base:   Base,
        /// Column of the first character of the operand.
        column: usize,
    },
}

impl Operand {
    /// Returns the column where the operand starts.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Text { column, .. } | Self::Numeral { column, .. } => *column,
        }
    }

    /// Returns a short description of the operand kind, used in error
    /// messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Text { .. } => "a quoted string",
            Self::Numeral { base: Base::Arabic,
                            .. } => "an Arabic number",
            Self::Numeral { base: Base::Roman,
                            .. } => "a Roman numeral",
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A parsed `operand operator operand` expression.
///
/// This is the only node the grammar knows: there is no nesting and no
/// precedence. The parser guarantees that the operand kinds fit the operator
/// for the selected mode before the node reaches the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Left-hand operand.
    pub left:   Operand,
    /// The operator between the operands.
    pub op:     BinaryOperator,
    /// Right-hand operand.
    pub right:  Operand,
    /// Column of the operator.
    pub column: usize,
}
