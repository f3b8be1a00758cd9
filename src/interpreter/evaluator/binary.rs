use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary arithmetic operation to two evaluated operands.
///
/// Division by zero is checked explicitly before dividing: the result is
/// a hard error, never an IEEE infinity or NaN.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
/// - `position`: Position of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use numeval::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// let result = eval_binary_op(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
/// assert_eq!(result, 3.0);
///
/// assert!(eval_binary_op(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
/// ```
pub fn eval_binary_op(op: BinaryOperator, lhs: f64, rhs: f64, position: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => Ok(lhs + rhs),
        Sub => Ok(lhs - rhs),
        Mul => Ok(lhs * rhs),
        Div => {
            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(lhs / rhs)
        },
    }
}
