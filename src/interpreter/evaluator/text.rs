use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_usize_checked,
};

impl Context {
    /// Evaluates an operator between two strings.
    ///
    /// `+` concatenates. `-` removes the first occurrence of `right` from
    /// `left`, or returns `left` unchanged when `right` does not occur.
    ///
    /// # Example
    /// ```
    /// use duocalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_text_op(BinaryOperator::Sub, "abcabc", "abc", 1).unwrap();
    /// assert_eq!(result, Value::Text("abc".to_string()));
    /// ```
    pub fn eval_text_op(op: BinaryOperator,
                        left: &str,
                        right: &str,
                        column: usize)
                        -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::Text(format!("{left}{right}"))),
            BinaryOperator::Sub => Ok(Value::Text(left.replacen(right, "", 1))),
            BinaryOperator::Mul | BinaryOperator::Div => {
                Err(RuntimeError::TypeError { details: format!("{op} expects a number on the right"),
                                              column })
            },
        }
    }

    /// Evaluates an operator between a string and a count.
    ///
    /// `*` repeats `text` `count` times. `/` keeps the first
    /// `floor(len / count)` characters of `text`.
    ///
    /// # Errors
    /// - `OutOfRange` if `count` is outside the operand range.
    /// - `InvalidDivision` if `count` is larger than the string length.
    pub fn eval_text_count(&self,
                           op: BinaryOperator,
                           text: &str,
                           count: i64,
                           count_column: usize,
                           column: usize)
                           -> EvalResult<Value> {
        self.check_operand(count, count_column)?;
        let times = i64_to_usize_checked(count, self.out_of_range(count, count_column))?;

        match op {
            BinaryOperator::Mul => Ok(Value::Text(text.repeat(times))),
            BinaryOperator::Div => {
                let length = text.chars().count();
                if times > length {
                    return Err(RuntimeError::InvalidDivision { divisor: count,
                                                               length,
                                                               column });
                }
                Ok(Value::Text(text.chars().take(length / times).collect()))
            },
            BinaryOperator::Add | BinaryOperator::Sub => {
                Err(RuntimeError::TypeError { details: format!("{op} expects a quoted string on the right"),
                                              column })
            },
        }
    }
}
