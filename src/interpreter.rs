/// The evaluator module reduces AST nodes to numeric results.
///
/// The evaluator traverses the AST in post-order, applies arithmetic
/// operations, and produces a single `f64`. It is stateless: no context
/// survives an evaluation, so repeated calls are independent.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream
/// of tokens, each corresponding to an integer literal, an operator, or a
/// parenthesis. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character sequence into tokens with positions.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for unrecognized or oversized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser drains the token stream produced by the lexer and constructs
/// an AST that represents the structure of the expression, with operator
/// precedence and left-to-right associativity encoded in the tree shape.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the expression grammar, reporting errors with positions.
pub mod parser;
/// The printer module renders a parsed tree in postfix form.
///
/// A read-only consumer of the AST used for debugging and the CLI's
/// postfix mode.
///
/// # Responsibilities
/// - Walks the tree in post-order and emits `"2 3 +"`-style output.
pub mod printer;
/// The stream module defines the token buffer consumed by the parser.
///
/// Tokens are held in lexical order and consumed strictly front-to-back;
/// each successful grammar rule removes the tokens it matched.
///
/// # Responsibilities
/// - Provides peek-front, pop-front, and emptiness checks over tokens.
/// - Records the end-of-input position for diagnostics.
pub mod stream;
