use std::fmt::{self, Display, Formatter};

use value::Value;

use crate::Expr;

/// Renders the tree fully parenthesized, e.g. `(* (- 123.000000) (group 45.670000))`.
/// Tests compare against this format, so keep it stable.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Value::Number(n)) => write!(f, "{n:.6}"),
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Grouping(expression) => write!(f, "(group {expression})"),
            Expr::Unary { operator, right } => write!(f, "({operator} {right})"),
            Expr::Binary { left, operator, right } => write!(f, "({operator} {left} {right})"),
            Expr::Ternary { condition, then_branch, else_branch } => {
                write!(f, "(?: {condition} {then_branch} {else_branch})")
            }
        }
    }
}
