use crate::{
    ast::Base,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::roman::{self, MAX_ROMAN, RomanError},
};

/// Represents the result of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The result of a string expression.
    Text(String),
    /// The result of a numeral expression, in the base of its operands.
    Numeral {
        /// The computed integer.
        value: i64,
        /// The notation the result is rendered in.
        base:  Base,
    },
}

impl Value {
    /// Renders the value the way it is printed.
    ///
    /// Text is returned as is. Arabic numerals are written in decimal digits,
    /// including zero and negative results. Roman numerals go through the
    /// encoder.
    ///
    /// # Parameters
    /// - `column`: Column of the operator, used for error reporting.
    ///
    /// # Errors
    /// - `NonPositiveNumeral` for a Roman result below one.
    /// - `OutOfRange` for a Roman result above 3999.
    ///
    /// # Example
    /// ```
    /// use duocalc::{ast::Base, interpreter::value::core::Value};
    ///
    /// let nine = Value::Numeral { value: 9,
    ///                             base:  Base::Roman, };
    /// assert_eq!(nine.render(1).unwrap(), "IX");
    ///
    /// let zero = Value::Numeral { value: 0,
    ///                             base:  Base::Roman, };
    /// assert!(zero.render(1).is_err());
    /// ```
    pub fn render(&self, column: usize) -> EvalResult<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Numeral { value,
                            base: Base::Arabic, } => Ok(value.to_string()),
            Self::Numeral { value,
                            base: Base::Roman, } => {
                roman::encode(*value).map_err(|e| match e {
                                         RomanError::NonPositive(_) => {
                                             RuntimeError::NonPositiveNumeral { value: *value,
                                                                                column }
                                         },
                                         RomanError::TooLarge(_) | RomanError::Invalid(_) => {
                                             RuntimeError::OutOfRange { value: *value,
                                                                        min: 1,
                                                                        max: MAX_ROMAN,
                                                                        column }
                                         },
                                     })
            },
        }
    }
}
