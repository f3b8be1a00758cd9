//! # numeval
//!
//! numeval is an interpreter for single-line arithmetic expressions written
//! in Rust. It tokenizes, parses, and evaluates expressions built from
//! integer literals, the four operators `+ - * /`, and parenthesized
//! grouping, and reduces them to a floating-point result.

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

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines the literal and binary-operation node types.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression. It standardizes error reporting
/// and carries the byte position of each failure for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, the token stream, parsing, evaluation,
/// and the postfix printer to provide a complete pipeline for reducing an
/// expression string to a number.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, token stream, parser,
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used by the evaluator. These
/// include safe promotion from integer literals to `f64` without silent
/// precision loss.
///
/// # Responsibilities
/// - Safely convert `i64` literals to `f64`.
pub mod util;

/// Evaluates a single-line arithmetic expression and returns its value.
///
/// This is the main entry point of the crate. The source string is
/// tokenized, parsed into an expression tree, and reduced to a single
/// `f64`. All intermediate structures (the token stream and the tree) are
/// released before this function returns, and no state is shared between
/// calls: evaluating the same string twice yields identical results.
///
/// # Errors
/// Returns an [`Error`] if the source contains an unrecognized character,
/// violates the expression grammar, or divides by zero.
///
/// # Examples
/// ```
/// use numeval::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
///
/// // Operators of equal precedence apply left to right.
/// assert_eq!(evaluate("10-3-2").unwrap(), 5.0);
///
/// // Results are floating-point even for integer operands.
/// assert_eq!(evaluate("7/2").unwrap(), 3.5);
///
/// // A leading operator is a syntax error, not a crash.
/// assert!(evaluate("+3").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let mut tokens = tokenize(source)?;
    let expr = parse(&mut tokens)?;
    let value = eval(&expr)?;
    Ok(value)
}

/// Parses a single-line arithmetic expression into its tree form.
///
/// Useful for consumers that want to inspect or render the tree instead of
/// evaluating it, such as [`interpreter::printer::postfix`].
///
/// # Errors
/// Returns a [`ParseError`] if the source cannot be tokenized or violates
/// the expression grammar.
///
/// # Examples
/// ```
/// use numeval::parse_source;
///
/// assert!(parse_source("(2+3)*4").is_ok());
/// assert!(parse_source("2+(3").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    let mut tokens = tokenize(source)?;
    parse(&mut tokens)
}
