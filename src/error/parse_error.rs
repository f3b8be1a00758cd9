#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that is not part of the expression language.
    InvalidCharacter {
        /// The offending character.
        found:    char,
        /// Byte position of the character in the source.
        position: usize,
    },
    /// An integer literal does not fit in 64 signed bits.
    LiteralTooLarge {
        /// Byte position where the literal starts.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, in its literal form.
        token:    String,
        /// What the grammar allows at this point.
        expected: &'static str,
        /// Byte position of the token in the source.
        position: usize,
    },
    /// Reached the end of input while a grammar rule was incomplete.
    UnexpectedEndOfInput {
        /// Byte position just past the last token.
        position: usize,
    },
    /// An opening parenthesis has no matching `)`.
    UnbalancedParentheses {
        /// Byte position of the opening `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token, in its literal form.
        token:    String,
        /// Byte position of the token in the source.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found, position } => {
                write!(f, "Error at position {position}: Invalid character: '{found}'.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },

            Self::UnexpectedToken { token,
                                    expected,
                                    position, } => write!(f,
                                                          "Error at position {position}: Unexpected token '{token}', expected {expected}."),

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::UnbalancedParentheses { position } => write!(f,
                                                               "Error at position {position}: Parenthesis opened here is never closed."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                        "Error at position {position}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
