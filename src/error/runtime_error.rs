#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte position of the `/` operator.
        position: usize,
    },
    /// A literal value is too large to be represented exactly as `f64`.
    LiteralTooLarge {
        /// Byte position of the literal.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
