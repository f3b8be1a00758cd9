/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the two constructs of the expression language: integer
/// literals and binary operations. Each variant carries the byte position
/// of the construct in the source text for error reporting. A `BinaryOp`
/// exclusively owns both of its children; a successful parse can never
/// produce a node with a missing operand because the type does not allow
/// one.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal with no children.
    Literal {
        /// The literal value.
        value:    i64,
        /// Byte position in the source text.
        position: usize,
    },
    /// A binary operation (addition, subtraction, multiplication or
    /// division).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte position of the operator in the source text.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use numeval::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    7,
    ///                            position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// The four arithmetic operators of the expression language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}
