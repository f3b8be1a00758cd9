use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{parser::binary::parse_additive, stream::TokenStream},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete expression, consuming the entire token stream.
///
/// This is the entry point for parsing. It parses one expression and then
/// requires the stream to be exhausted; anything left over is reported as
/// trailing input rather than silently ignored.
///
/// # Parameters
/// - `tokens`: Token stream produced by the lexer.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - Propagates any error from expression parsing.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
pub fn parse(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                       position: *position, })
        },
        None => Ok(expr),
    }
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition and subtraction,
/// and recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_additive(tokens)
}
