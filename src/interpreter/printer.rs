use crate::ast::Expr;

/// Renders an expression tree in operator-postfix form.
///
/// The tree is walked in post-order: both operands are emitted before
/// their operator, separated by single spaces. Because the parser builds
/// operands in left-to-right order, the rendering matches the order in
/// which the evaluator combines them.
///
/// # Parameters
/// - `expr`: Root of the tree to render.
///
/// # Returns
/// The postfix rendering, e.g. `"2 3 +"` for `2+3`.
///
/// # Example
/// ```
/// use numeval::{interpreter::printer::postfix, parse_source};
///
/// let expr = parse_source("2*(2+3)").unwrap();
/// assert_eq!(postfix(&expr), "2 2 3 + *");
/// ```
#[must_use]
pub fn postfix(expr: &Expr) -> String {
    let mut out = String::new();
    write_postfix(expr, &mut out);
    out
}

fn write_postfix(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Literal { value, .. } => {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&value.to_string());
        },
        Expr::BinaryOp { left, op, right, .. } => {
            write_postfix(left, out);
            write_postfix(right, out);
            out.push(' ');
            out.push_str(&op.to_string());
        },
    }
}
