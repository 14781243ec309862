use crate::{
    ast::{BinaryOperator, Operand},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an operator between two numerals.
    ///
    /// Checks run in a fixed order: matching bases, a non-zero divisor, then
    /// the operand range. Division truncates, which is floor division for
    /// the positive operands that pass the range check. Results keep the base
    /// of the operands; whether a Roman result is representable is decided
    /// when the value is rendered.
    ///
    /// # Errors
    /// - `MixedBase` if one operand is Arabic and the other Roman.
    /// - `DivisionByZero` for `/` with a zero divisor.
    /// - `OutOfRange` if an operand is outside the operand range, or if the
    ///   result does not fit in an `i64`.
    /// - `TypeError` if either operand is not a numeral.
    pub fn eval_numeral_op(&self,
                           op: BinaryOperator,
                           left: &Operand,
                           right: &Operand,
                           column: usize)
                           -> EvalResult<Value> {
        let (Operand::Numeral { value: a,
                                base: left_base,
                                column: a_column, },
             Operand::Numeral { value: b,
                                base: right_base,
                                column: b_column, }) = (left, right)
        else {
            return Err(RuntimeError::TypeError { details: format!("Invalid numeral operands: {} {op} {}",
                                                                  left.describe(),
                                                                  right.describe()),
                                                 column });
        };

        if left_base != right_base {
            return Err(RuntimeError::MixedBase { left: *left_base,
                                                 right: *right_base,
                                                 column: *b_column });
        }
        if op == BinaryOperator::Div && *b == 0 {
            return Err(RuntimeError::DivisionByZero { column });
        }
        self.check_operand(*a, *a_column)?;
        self.check_operand(*b, *b_column)?;

        let value = match op {
                        BinaryOperator::Add => a.checked_add(*b),
                        BinaryOperator::Sub => a.checked_sub(*b),
                        BinaryOperator::Mul => a.checked_mul(*b),
                        BinaryOperator::Div => a.checked_div(*b),
                    }.ok_or_else(|| self.out_of_range(*b, *b_column))?;

        Ok(Value::Numeral { value,
                            base: *left_base })
    }
}
