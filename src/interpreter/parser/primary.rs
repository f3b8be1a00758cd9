use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        stream::TokenStream,
    },
};

/// Parses a factor, the atomic level of the expression grammar.
///
/// A factor is either an integer literal or a parenthesized
/// sub-expression. This function dispatches on the leading token; unary
/// operators do not exist in the language, so an operator in factor
/// position is always an error.
///
/// Grammar: `factor := INTEGER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a factor.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// - `UnexpectedToken` if the front token cannot begin a factor.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(crate) fn parse_factor(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.peek() {
        Some((Token::Integer(_), _)) => parse_literal(tokens),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                              expected: "a number or '('",
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: tokens.end() }),
    }
}

/// Parses an integer literal into a leaf node.
fn parse_literal(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.next() {
        Some((Token::Integer(value), position)) => Ok(Expr::Literal { value, position }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. A missing closing
/// parenthesis yields `ParseError::UnbalancedParentheses`, reported at
/// the position of the opening `(`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let (_, position) = tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::UnbalancedParentheses { position }),
    }
}
