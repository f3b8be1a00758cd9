use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::binary::eval_binary_op,
    util::num::i64_to_f64_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces an expression tree to a single numeric value.
///
/// The walk is post-order: both operands of a binary node are evaluated
/// before the operator is applied, and operands are combined in natural
/// left-to-right order. The tree is read-only during the walk and no
/// state survives the call, so evaluating the same tree twice yields
/// identical results.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Returns
/// The value of the expression as `f64`.
///
/// # Errors
/// - `DivisionByZero` if any division has a zero divisor.
/// - `LiteralTooLarge` if a literal exceeds the range `f64` can represent
///   exactly.
///
/// # Example
/// ```
/// use numeval::{interpreter::evaluator::core::eval, parse_source};
///
/// let expr = parse_source("10-3-2").unwrap();
/// assert_eq!(eval(&expr).unwrap(), 5.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, position } => {
            i64_to_f64_checked(*value, RuntimeError::LiteralTooLarge { position: *position })
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            eval_binary_op(*op, lhs, rhs, *position)
        },
    }
}
