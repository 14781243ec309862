use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// Represents a lexical token in the input line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace between tokens is skipped; any other character that does not
/// start one of these tokens is a lexical error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Double-quoted string literals such as `"abc"`. The payload excludes the
    /// quotes.
    #[regex(r#""[^"]*""#, parse_text)]
    Text(String),
    /// Integer literal tokens, such as `7`. Literals too large for `i64`
    /// saturate so they surface as range errors later.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Roman numeral candidates such as `XIV`. Validity is checked when the
    /// operand is classified.
    #[regex(r"[IVXLCDM]+", |lex| lex.slice().to_string())]
    Roman(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Roman(numeral) => write!(f, "{numeral}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits `source` into tokens paired with their 1-based column.
///
/// Columns count characters, not bytes, so they point at the right place in
/// input containing multi-byte text.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first slice that does not
/// form a token, such as an unknown symbol or an unterminated string.
///
/// # Example
/// ```
/// use duocalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("VI + 3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Roman("VI".to_string()), 1), (Token::Plus, 4), (Token::Integer(3), 6)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = source[..lexer.span().start].chars().count() + 1;
        if let Ok(tok) = token {
            trace!(token = %tok, column, "lexed token");
            tokens.push((tok, column));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     column });
        }
    }

    Ok(tokens)
}

/// Strips the surrounding quotes from a string literal.
fn parse_text(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses an integer literal from the current token slice, saturating at
/// `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<Token>) -> i64 {
    lex.slice().parse().unwrap_or(i64::MAX)
}
