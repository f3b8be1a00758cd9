use std::collections::VecDeque;

use logos::Logos;

use crate::{error::ParseError, interpreter::stream::TokenStream};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts a source string into a [`TokenStream`].
///
/// Whitespace between tokens is skipped. A run of decimal digits becomes
/// one integer literal token (greedy, stopping at the first non-digit);
/// each of `+ - * / ( )` becomes a single-character token. Every token
/// records the byte position where it starts.
///
/// # Errors
/// - [`ParseError::InvalidCharacter`] if the source contains a character
///   outside the expression language, reported at its position.
/// - [`ParseError::LiteralTooLarge`] if a digit run overflows `i64`.
///
/// # Examples
/// ```
/// use numeval::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("2 + 3").unwrap();
/// assert_eq!(tokens.len(), 3);
///
/// assert!(tokenize("2 @ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<TokenStream, ParseError> {
    let mut tokens = VecDeque::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push_back((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { position });
                }
                match slice.chars().next() {
                    Some(found) => return Err(ParseError::InvalidCharacter { found, position }),
                    None => return Err(ParseError::UnexpectedEndOfInput { position }),
                }
            },
        }
    }

    Ok(TokenStream::new(tokens, source.len()))
}
