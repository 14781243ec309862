//! # duocalc
//!
//! duocalc evaluates single two-operand expressions. Operands are either
//! quoted strings (`"ab" * 3`) or numbers from one to ten written in Arabic
//! or Roman notation (`VI + III`). The result is a string or a numeral in the
//! same notation as the operands.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::error::Error;
use crate::interpreter::{
    evaluator::core::Context, lexer::tokenize, parser::core::parse_expression,
};

/// Defines the structure of a parsed expression.
///
/// This module declares the operand, operator and expression types built by
/// the parser and consumed by the evaluator. Every node records the column it
/// came from for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating an expression, and the [`error::ErrorKind`] categories they
/// fall into.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches columns and detailed messages for context.
/// - Integrates with the standard `Error` trait.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together lexing, parsing, evaluation and value rendering.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities: numeric conversions, the Roman numeral codec and
/// display helpers.
pub mod util;

/// Evaluates an expression with the default configuration.
///
/// The mode is detected from the first token, Roman numerals use the full
/// subtractive grammar and operands are bounded to one through ten.
///
/// # Errors
/// Returns an error if the input is malformed or cannot be evaluated. Use
/// [`Error::kind`] to find out which category of error occurred.
///
/// # Examples
/// ```
/// use duocalc::evaluate;
///
/// assert_eq!(evaluate("\"abc\" + \"de\"").unwrap(), "abcde");
/// assert_eq!(evaluate("VI + III").unwrap(), "IX");
/// assert_eq!(evaluate("6 + 3").unwrap(), "9");
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<String, Error> {
    get_result(source, &Context::new())
}

/// Evaluates an expression with the given configuration.
///
/// The input is tokenized, parsed in the domain selected by the context,
/// evaluated and rendered. Surrounding whitespace is skipped by the lexer,
/// so error columns point into `source` as given.
///
/// # Errors
/// Returns an error if lexing, parsing, evaluation or rendering fails.
///
/// # Examples
/// ```
/// use duocalc::{
///     get_result,
///     interpreter::evaluator::core::{Context, Mode},
///     util::roman::RomanGrammar,
/// };
///
/// let context = Context::new().with_mode(Mode::Numeral)
///                             .with_roman_grammar(RomanGrammar::Lookup);
/// assert_eq!(get_result("X - IX", &context).unwrap(), "I");
/// assert!(get_result("XI - IX", &context).is_err());
/// ```
pub fn get_result(source: &str, context: &Context) -> Result<String, Error> {
    let tokens = tokenize(source)?;

    let domain = context.domain_for(tokens.first().map(|(token, _)| token));
    debug!(tokens = tokens.len(), ?domain, "tokenized input");

    let expression = parse_expression(&mut tokens.iter().peekable(), context, domain)?;
    let value = context.eval_expression(&expression)?;

    Ok(value.render(expression.column)?)
}
