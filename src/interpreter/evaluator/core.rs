use tracing::debug;

use crate::{
    ast::{Expression, Operand},
    error::RuntimeError,
    interpreter::{lexer::Token, value::core::Value},
    util::roman::RomanGrammar,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Smallest accepted numeric operand.
pub const MIN_OPERAND: i64 = 1;
/// Default largest accepted numeric operand.
pub const MAX_OPERAND: i64 = 10;
/// Default largest number of characters in a quoted string operand.
pub const MAX_TEXT_LENGTH: usize = 10;
/// Ceiling for a widened operand bound. Products of two operands stay far
/// below `i64::MAX` and repeated strings stay small.
pub const OPERAND_LIMIT: i64 = 3999;
/// Ceiling for a widened string length bound.
pub const TEXT_LENGTH_LIMIT: usize = 256;

/// Selects which operand domain an expression is evaluated in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Pick the domain from the first token: a quoted string selects string
    /// mode, anything else numeral mode.
    #[default]
    Auto,
    /// Quoted string operands.
    String,
    /// Arabic or Roman numeral operands.
    Numeral,
}

/// The concrete operand domain of one expression, after `Mode::Auto` has
/// been resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Domain {
    /// String concatenation, removal, repetition and truncation.
    Text,
    /// Integer arithmetic on Arabic or Roman numerals.
    Numeral,
}

/// Stores the evaluation configuration.
///
/// The context holds no state that changes during evaluation; the same value
/// can be reused for any number of independent expressions. Fields are only
/// set through the `with_*` builders, which keep the bounds within
/// [`OPERAND_LIMIT`] and [`TEXT_LENGTH_LIMIT`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Context {
    /// Operand domain, or `Mode::Auto` to detect it per expression.
    mode:            Mode,
    /// How Roman numeral operands are decoded.
    roman_grammar:   RomanGrammar,
    /// Largest accepted numeric operand.
    max_operand:     i64,
    /// Largest accepted number of characters in a string operand.
    max_text_length: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with auto mode detection, the subtractive Roman
    /// grammar and the default operand bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self { mode:            Mode::Auto,
               roman_grammar:   RomanGrammar::Subtractive,
               max_operand:     MAX_OPERAND,
               max_text_length: MAX_TEXT_LENGTH, }
    }

    /// Returns a copy of the context using `mode`.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy of the context using `roman_grammar`.
    #[must_use]
    pub const fn with_roman_grammar(mut self, roman_grammar: RomanGrammar) -> Self {
        self.roman_grammar = roman_grammar;
        self
    }

    /// Returns a copy of the context accepting numeric operands up to
    /// `max_operand`, clamped to `MIN_OPERAND..=OPERAND_LIMIT`.
    ///
    /// # Example
    /// ```
    /// use duocalc::interpreter::evaluator::core::{Context, OPERAND_LIMIT};
    ///
    /// assert_eq!(Context::new().with_max_operand(20).max_operand(), 20);
    /// assert_eq!(Context::new().with_max_operand(i64::MAX).max_operand(), OPERAND_LIMIT);
    /// ```
    #[must_use]
    pub const fn with_max_operand(mut self, max_operand: i64) -> Self {
        self.max_operand = if max_operand < MIN_OPERAND {
            MIN_OPERAND
        } else if max_operand > OPERAND_LIMIT {
            OPERAND_LIMIT
        } else {
            max_operand
        };
        self
    }

    /// Returns a copy of the context accepting string operands of up to
    /// `max_text_length` characters, clamped to `1..=TEXT_LENGTH_LIMIT`.
    #[must_use]
    pub const fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = if max_text_length == 0 {
            1
        } else if max_text_length > TEXT_LENGTH_LIMIT {
            TEXT_LENGTH_LIMIT
        } else {
            max_text_length
        };
        self
    }

    /// The configured mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The configured Roman grammar.
    #[must_use]
    pub const fn roman_grammar(&self) -> RomanGrammar {
        self.roman_grammar
    }

    /// Largest accepted numeric operand.
    #[must_use]
    pub const fn max_operand(&self) -> i64 {
        self.max_operand
    }

    /// Largest accepted number of characters in a string operand.
    #[must_use]
    pub const fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Resolves the operand domain for an expression starting with `first`.
    ///
    /// # Example
    /// ```
    /// use duocalc::interpreter::{
    ///     evaluator::core::{Context, Domain},
    ///     lexer::Token,
    /// };
    ///
    /// let context = Context::new();
    /// assert_eq!(context.domain_for(Some(&Token::Text("ab".to_string()))), Domain::Text);
    /// assert_eq!(context.domain_for(Some(&Token::Integer(4))), Domain::Numeral);
    /// ```
    #[must_use]
    pub const fn domain_for(&self, first: Option<&Token>) -> Domain {
        match self.mode {
            Mode::String => Domain::Text,
            Mode::Numeral => Domain::Numeral,
            Mode::Auto => match first {
                Some(Token::Text(_)) => Domain::Text,
                _ => Domain::Numeral,
            },
        }
    }

    /// Evaluates a parsed expression and returns the resulting value.
    ///
    /// Dispatches on the operand kinds: two strings, a string and a count,
    /// or two numerals.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an operand is out of range, the numeral
    /// bases differ, the divisor is zero or the operands do not fit the
    /// operator.
    ///
    /// # Example
    /// ```
    /// use duocalc::{
    ///     ast::{Base, BinaryOperator, Expression, Operand},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expression = Expression { left:   Operand::Numeral { value:  6,
    ///                                                          base:   Base::Arabic,
    ///                                                          column: 1, },
    ///                               op:     BinaryOperator::Add,
    ///                               right:  Operand::Numeral { value:  3,
    ///                                                          base:   Base::Arabic,
    ///                                                          column: 3, },
    ///                               column: 2, };
    ///
    /// let value = Context::new().eval_expression(&expression).unwrap();
    /// assert_eq!(value, Value::Numeral { value: 9, base: Base::Arabic });
    /// ```
    pub fn eval_expression(&self, expression: &Expression) -> EvalResult<Value> {
        let Expression { left, op, right, column } = expression;
        debug!(%op, left = left.describe(), right = right.describe(), "evaluating expression");

        match (left, right) {
            (Operand::Text { value: a, .. }, Operand::Text { value: b, .. }) => {
                Self::eval_text_op(*op, a, b, *column)
            },
            (Operand::Text { value: text, .. },
             Operand::Numeral { value: count,
                                column: count_column,
                                .. }) => self.eval_text_count(*op, text, *count, *count_column, *column),
            (Operand::Numeral { .. }, Operand::Numeral { .. }) => {
                self.eval_numeral_op(*op, left, right, *column)
            },
            (Operand::Numeral { .. }, Operand::Text { .. }) => {
                Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                               left.describe(),
                                                               right.describe()),
                                              column:  *column, })
            },
        }
    }

    /// Checks that a numeric operand lies in `MIN_OPERAND..=max_operand`.
    ///
    /// # Errors
    /// Returns `RuntimeError::OutOfRange` otherwise.
    pub fn check_operand(&self, value: i64, column: usize) -> EvalResult<()> {
        if value < MIN_OPERAND || value > self.max_operand {
            return Err(self.out_of_range(value, column));
        }
        Ok(())
    }

    /// Builds the `OutOfRange` error for `value` against the operand range.
    #[must_use]
    pub const fn out_of_range(&self, value: i64, column: usize) -> RuntimeError {
        RuntimeError::OutOfRange { value,
                                   min: MIN_OPERAND,
                                   max: self.max_operand,
                                   column }
    }
}
