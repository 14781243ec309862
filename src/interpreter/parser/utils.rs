use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Maps an operator token to its `BinaryOperator`.
///
/// Returns `None` for tokens that are not operators.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Parses the operator between the two operands.
///
/// # Returns
/// The operator and its column.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an operator or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_operator<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, column)) => token_to_binary_operator(tok).map(|op| (op, *column))
                                                            .ok_or_else(|| ParseError::UnexpectedToken { token:  format!("Expected one of + - * /, found {tok}"),
                                                                                                         column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an operator" }),
    }
}

/// Ensures no tokens remain after the expression.
///
/// # Errors
/// Returns `ParseError::UnexpectedTrailingTokens` naming the first extra
/// token.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, column)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  tok.to_string(),
                                                       column: *column, })
        },
        None => Ok(()),
    }
}
