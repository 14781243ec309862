use std::iter::Peekable;

use crate::{
    ast::{Base, Operand},
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, Domain},
        lexer::Token,
        parser::core::ParseResult,
    },
};

/// Parses and classifies a single operand.
///
/// - A quoted string becomes `Operand::Text` in the text domain; its length
///   must lie in `1..=max_text_length` characters.
/// - An integer becomes an Arabic `Operand::Numeral` in either domain.
/// - A Roman token is decoded with the context's grammar and becomes a Roman
///   `Operand::Numeral` in the numeral domain.
///
/// Bounds on numeric values are not checked here; they belong to the
/// evaluator, after the base check.
///
/// # Errors
/// - `InvalidStringLength` for an empty or too long string.
/// - `InvalidNumeral` for a Roman token the grammar rejects.
/// - `OperandMismatch` for a string in a numeral expression or a Roman
///   numeral in a string expression.
/// - `UnexpectedToken` / `UnexpectedEndOfInput` if no operand follows.
pub fn parse_operand<'a, I>(tokens: &mut Peekable<I>,
                            context: &Context,
                            domain: Domain)
                            -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Text(text), column)) => match domain {
            Domain::Text => parse_text(text, *column, context.max_text_length()),
            Domain::Numeral => Err(ParseError::OperandMismatch { details: format!("quoted string \"{text}\" in a numeral expression"),
                                                                 column:  *column, }),
        },
        Some((Token::Integer(value), column)) => Ok(Operand::Numeral { value:  *value,
                                                                       base:   Base::Arabic,
                                                                       column: *column, }),
        Some((Token::Roman(numeral), column)) => match domain {
            Domain::Numeral => {
                let value = context.roman_grammar().decode(numeral).map_err(|_| {
                                                                      ParseError::InvalidNumeral { token:  numeral.clone(),
                                                                                                   column: *column, }
                                                                  })?;
                Ok(Operand::Numeral { value,
                                      base: Base::Roman,
                                      column: *column })
            },
            Domain::Text => Err(ParseError::OperandMismatch { details: format!("Roman numeral {numeral} in a string expression"),
                                                              column:  *column, }),
        },
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { token:  format!("Expected an operand, found {tok}"),
                                              column: *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an operand" }),
    }
}

/// Builds a text operand after checking its length in characters.
fn parse_text(text: &str, column: usize, max: usize) -> ParseResult<Operand> {
    let length = text.chars().count();
    if length == 0 || length > max {
        return Err(ParseError::InvalidStringLength { length,
                                                     max,
                                                     column });
    }
    Ok(Operand::Text { value: text.to_string(),
                       column })
}
