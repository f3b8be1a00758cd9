use std::collections::VecDeque;

use crate::interpreter::lexer::Token;

/// A first-in, first-out buffer of tokens produced by tokenizing.
///
/// Tokens are stored in lexical order together with their byte positions
/// and are consumed strictly front-to-back. The stream is owned by the
/// call that tokenized the source and handed by mutable reference to the
/// parser, which drains it destructively: each successful grammar rule
/// removes exactly the tokens it matched.
///
/// Popping goes through the [`Iterator`] implementation, so the parser
/// reads the stream with the familiar `peek`/`next` pair.
///
/// ## Example
/// ```
/// use numeval::interpreter::lexer::{Token, tokenize};
///
/// let mut tokens = tokenize("1+2").unwrap();
/// assert_eq!(tokens.len(), 3);
///
/// let (first, position) = tokens.next().unwrap();
/// assert_eq!(first, Token::Integer(1));
/// assert_eq!(position, 0);
/// assert!(!tokens.is_empty());
/// ```
#[derive(Debug)]
pub struct TokenStream {
    tokens: VecDeque<(Token, usize)>,
    end:    usize,
}

impl TokenStream {
    /// Wraps an ordered token buffer, remembering where the source ends.
    pub(crate) const fn new(tokens: VecDeque<(Token, usize)>, end: usize) -> Self {
        Self { tokens, end }
    }

    /// Returns the front token without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.front()
    }

    /// Returns `true` when every token has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens not yet consumed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the byte position just past the end of the source.
    ///
    /// Used for diagnostics when the stream runs out mid-rule.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

impl Iterator for TokenStream {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.pop_front()
    }
}
