use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Base, BinaryOperator, Expression, Operand},
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, Domain},
        lexer::Token,
        parser::{
            operand::parse_operand,
            utils::{expect_end, parse_operator},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// Grammar: `expression := operand operator operand`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `context`: Supplies the Roman grammar and the string length bound.
/// - `domain`: The operand domain the expression is parsed in.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `EmptyInput` if there are no tokens.
/// - `UnexpectedToken` / `UnexpectedEndOfInput` if the shape does not match.
/// - `UnexpectedTrailingTokens` if tokens remain after the right operand.
/// - `OperandMismatch` if an operand does not fit the domain or operator.
/// - Any error from [`parse_operand`].
///
/// # Example
/// ```
/// use duocalc::{
///     ast::{BinaryOperator, Operand},
///     interpreter::{
///         evaluator::core::{Context, Domain},
///         lexer::tokenize,
///         parser::core::parse_expression,
///     },
/// };
///
/// let tokens = tokenize("\"ab\" * 3").unwrap();
/// let expression =
///     parse_expression(&mut tokens.iter().peekable(), &Context::new(), Domain::Text).unwrap();
/// assert_eq!(expression.op, BinaryOperator::Mul);
/// assert!(matches!(expression.left, Operand::Text { .. }));
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               context: &Context,
                               domain: Domain)
                               -> ParseResult<Expression>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if tokens.peek().is_none() {
        return Err(ParseError::EmptyInput);
    }

    let left = parse_operand(tokens, context, domain)?;
    let (op, column) = parse_operator(tokens)?;
    let right = parse_operand(tokens, context, domain)?;
    expect_end(tokens)?;

    let expression = Expression { left,
                                  op,
                                  right,
                                  column };
    if domain == Domain::Text {
        check_text_operands(&expression)?;
    }

    debug!(?domain, %op, "parsed expression");
    Ok(expression)
}

/// Checks the operand kinds of a string expression.
///
/// The left operand must be a quoted string. `+` and `-` take a quoted
/// string on the right, `*` and `/` an Arabic number.
///
/// # Errors
/// Returns `ParseError::OperandMismatch` naming the offending operand.
fn check_text_operands(expression: &Expression) -> ParseResult<()> {
    let Expression { left, op, right, .. } = expression;

    if !matches!(left, Operand::Text { .. }) {
        return Err(ParseError::OperandMismatch { details: format!("a string expression must start with a quoted string, found {}",
                                                                  left.describe()),
                                                 column:  left.column(), });
    }

    let fits = match op {
        BinaryOperator::Add | BinaryOperator::Sub => matches!(right, Operand::Text { .. }),
        BinaryOperator::Mul | BinaryOperator::Div => {
            matches!(right, Operand::Numeral { base: Base::Arabic, .. })
        },
    };
    if fits {
        return Ok(());
    }

    let expected = match op {
        BinaryOperator::Add | BinaryOperator::Sub => "a quoted string",
        BinaryOperator::Mul | BinaryOperator::Div => "an Arabic number",
    };
    Err(ParseError::OperandMismatch { details: format!("{op} expects {expected} on the right, found {}",
                                                       right.describe()),
                                      column:  right.column(), })
}
