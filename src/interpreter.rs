/// The evaluator module applies an operator to classified operands.
///
/// The evaluator checks numeric bounds and numeral bases, performs string or
/// numeral arithmetic and produces a [`value::core::Value`]. It also owns the
/// evaluation `Context`.
///
/// # Responsibilities
/// - Dispatches on operand kinds and operators.
/// - Reports runtime errors such as division by zero or mixed bases.
pub mod evaluator;
/// The lexer module tokenizes the input line.
///
/// The lexer reads the raw line and produces a stream of tokens: quoted
/// strings, integers, Roman numeral candidates and the four operators, each
/// tagged with its column.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source columns.
/// - Reports lexical errors for unknown symbols or unterminated strings.
pub mod lexer;
/// The parser module builds an [`crate::ast::Expression`] from tokens.
///
/// # Responsibilities
/// - Validates the `operand operator operand` shape.
/// - Classifies operands and decodes Roman numerals.
/// - Rejects operand kinds that do not fit the mode or the operator.
pub mod parser;
/// The value module defines evaluation results and how they are rendered.
pub mod value;
