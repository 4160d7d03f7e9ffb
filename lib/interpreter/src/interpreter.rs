use std::io::Write;

use cursor::Line;
use errors::Diagnostics;
use parser::{Expr, Parser};
use scanner::{Scanner, Token, TokenType};

pub use value::Value;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or at least one string.")]
    InvalidAdditionOperands,
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Modulo by zero.")]
    ModuloByZero,
    #[error("Unsupported operator '{0}'.")]
    UnsupportedOperator(String),
}

/// Raised while evaluating an expression. Keeps the operator that failed so the error can be
/// attributed to a source line.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub operator: String,
    pub line: Line,
}

impl RuntimeError {
    fn new(error: RuntimeErrorType, operator: &Token) -> Self {
        Self { error, operator: operator.lexeme.to_string(), line: operator.line }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InterpretError {
    #[error("{0}")]
    CompileError(Diagnostics),
    #[error("{0}\n[line {}]", .0.line)]
    RuntimeError(#[from] RuntimeError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default)]
pub struct Interpreter {
    print_ast: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write the parenthesized form of every expression before its value.
    pub fn print_ast(mut self, print_ast: bool) -> Self {
        self.print_ast = print_ast;
        self
    }

    /// Scans, parses and evaluates `source`, writing one line per evaluated expression to
    /// `output`.
    ///
    /// Nothing is evaluated if scanning or parsing reported any diagnostic. The first runtime
    /// error stops the run. Every call starts from scratch, so a failed run never affects the
    /// next one.
    pub fn run_source(&self, source: &str, output: &mut impl Write) -> Result<(), InterpretError> {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
        let exprs = Parser::new(tokens).parse_all(&mut diagnostics);

        if diagnostics.had_error() {
            return Err(InterpretError::CompileError(diagnostics));
        }

        for expr in &exprs {
            if self.print_ast {
                writeln!(output, "{expr}")?;
            }

            let value = self.evaluate(expr)?;
            log::debug!("{expr} => {value:?}");
            writeln!(output, "{value}")?;
        }

        Ok(())
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Grouping(expression) => self.evaluate(expression),

            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                match operator.ty() {
                    TokenType::Minus => right.negate().ok_or_else(|| {
                        RuntimeError::new(RuntimeErrorType::OperandMustBeNumber, operator)
                    }),
                    TokenType::Bang => Ok(right.not()),
                    _ => Err(unsupported(operator)),
                }
            }

            // Only evaluated for its ordering, the value of the left side is thrown away
            Expr::Binary { left, operator, right } if operator.ty() == TokenType::Comma => {
                self.evaluate(left)?;
                self.evaluate(right)
            }

            Expr::Binary { left, operator, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                binary(&left, operator, &right)
            }

            Expr::Ternary { condition, then_branch, else_branch } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            }
        }
    }
}

fn binary(left: &Value, operator: &Token, right: &Value) -> Result<Value, RuntimeError> {
    use RuntimeErrorType::*;

    log::trace!("Applying {} to {:?} and {:?}", operator, left, right);

    let divisor_is_zero = left.as_number().is_some() && right.as_number() == Some(0.0);

    let result = match operator.ty() {
        TokenType::Plus => left.add(right).ok_or(InvalidAdditionOperands),
        TokenType::Minus => left.subtract(right).ok_or(OperandsMustBeNumbers),
        TokenType::Star => left.multiply(right).ok_or(OperandsMustBeNumbers),
        TokenType::Slash if divisor_is_zero => Err(DivisionByZero),
        TokenType::Slash => left.divide(right).ok_or(OperandsMustBeNumbers),
        TokenType::Percent if divisor_is_zero => Err(ModuloByZero),
        TokenType::Percent => left.remainder(right).ok_or(OperandsMustBeNumbers),

        TokenType::Greater => left.greater_than(right).ok_or(OperandsMustBeNumbers),
        TokenType::GreaterEqual => left.greater_equal(right).ok_or(OperandsMustBeNumbers),
        TokenType::Less => left.less_than(right).ok_or(OperandsMustBeNumbers),
        TokenType::LessEqual => left.less_equal(right).ok_or(OperandsMustBeNumbers),

        TokenType::EqualEqual => Ok(left.equals(right).into()),
        TokenType::BangEqual => Ok((!left.equals(right)).into()),

        _ => return Err(unsupported(operator)),
    };

    result.map_err(|error| RuntimeError::new(error, operator))
}

fn unsupported(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorType::UnsupportedOperator(operator.lexeme.to_string()), operator)
}
