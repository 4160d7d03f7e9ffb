use scanner::Token;
use value::Value;

/// A parsed expression. Every child is owned by exactly one parent, the tree is never modified
/// after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Literal(Value),
    Grouping(Box<Expr<'a>>),
    /// `operator` is either `-` or `!`
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
    Binary { left: Box<Expr<'a>>, operator: Token<'a>, right: Box<Expr<'a>> },
    Ternary { condition: Box<Expr<'a>>, then_branch: Box<Expr<'a>>, else_branch: Box<Expr<'a>> },
}

impl<'a> Expr<'a> {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn grouping(expression: Expr<'a>) -> Self {
        Expr::Grouping(Box::new(expression))
    }

    pub fn unary(operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Unary { operator, right: Box::new(right) }
    }

    pub fn binary(left: Expr<'a>, operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn ternary(condition: Expr<'a>, then_branch: Expr<'a>, else_branch: Expr<'a>) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }
}
