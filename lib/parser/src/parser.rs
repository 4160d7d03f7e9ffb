mod expr;
mod printer;

use cursor::Line;
use errors::{Diagnostic, Diagnostics};
use scanner::{Token, TokenData, TokenType};
use value::Value;

pub use expr::Expr;
pub use printer::render;

use TokenType::*;

pub type Result<'a, T> = std::result::Result<T, ParserError<'a>>;

/// How deeply groupings, unary operators and conditional branches may nest. Both parsing and
/// evaluation recurse once per level, so this bounds their stack usage.
pub const MAX_NESTING: usize = 64;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParserErrorType {
    #[error("Expected an expression.")]
    ExpectedExpression,
    #[error("Expected ')' after expression.")]
    MissingRightParen,
    #[error("Expected ':' after then branch of conditional expression.")]
    MissingColon,
    #[error("Expected ';' or end of input after expression.")]
    ExpectedEndOfExpression,
    #[error("Too much nesting in expression.")]
    TooDeeplyNested,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {}] Error{}: {error}", token.line, location_hint(token))]
pub struct ParserError<'a> {
    pub error: ParserErrorType,
    pub token: Token<'a>,
}

impl<'a> ParserError<'a> {
    fn new(error: ParserErrorType, token: Token<'a>) -> Self {
        Self { error, token }
    }
}

impl<'a> From<ParserError<'a>> for Diagnostic {
    fn from(e: ParserError<'a>) -> Self {
        Diagnostic::at(e.token.line, location_hint(&e.token), e.error)
    }
}

fn location_hint(token: &Token) -> String {
    match token.ty() {
        Eof => " at end".to_string(),
        _ => format!(" at '{}'", token.lexeme),
    }
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// `tokens` should come straight from the scanner. A missing `Eof` terminator is added.
    pub fn new(mut tokens: Vec<Token<'a>>) -> Self {
        if tokens.last().map(Token::ty) != Some(Eof) {
            let line = tokens.last().map_or(Line::default(), Token::line);
            tokens.push(Token::new(TokenData::Eof, "", line));
        }
        Self { tokens, current: 0, depth: 0 }
    }

    /// Parses every top-level expression in the token sequence. Errors are reported to
    /// `diagnostics`, after which the parser resynchronizes and continues with the next
    /// expression.
    pub fn parse_all(mut self, diagnostics: &mut Diagnostics) -> Vec<Expr<'a>> {
        let mut exprs = Vec::new();
        while !self.is_at_end() {
            match self.parse() {
                Ok(expr) => exprs.push(expr),
                Err(e) => {
                    log::trace!("Hit error: {:?}, syncing...", e);
                    diagnostics.report(e);
                    self.synchronize();
                }
            }
        }
        exprs
    }

    /// Parses a single top-level expression including its terminator: a `;` is consumed, `Eof`
    /// is left in place.
    pub fn parse(&mut self) -> Result<'a, Expr<'a>> {
        let expr = self.expression()?;

        match self.peek() {
            Semicolon => {
                self.advance();
            }
            Eof => (),
            _ => {
                return Err(ParserError::new(
                    ParserErrorType::ExpectedEndOfExpression,
                    self.peek_token(),
                ))
            }
        }

        log::debug!("Parsed {expr}");
        Ok(expr)
    }

    /// Panic-mode recovery: skips at least one token, then stops right after a `;` or right
    /// before a token that starts a statement (or at `Eof`).
    pub fn synchronize(&mut self) {
        loop {
            let skipped = self.advance();
            log::trace!("Syncing... skipped {:?}", skipped);

            if matches!(skipped.ty(), Semicolon | Eof) {
                return;
            }

            let next = self.peek();
            if next == Eof || next.starts_statement() {
                return;
            }
        }
    }

    fn expression(&mut self) -> Result<'a, Expr<'a>> {
        self.comma()
    }

    fn comma(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative_series(Self::ternary, &[Comma])
    }

    fn ternary(&mut self) -> Result<'a, Expr<'a>> {
        let condition = self.equality()?;

        let Some(question) = self.consume(Question) else {
            return Ok(condition);
        };

        let then_branch = self.nested(&question, Self::expression)?;
        self.consume_or_error(Colon, ParserErrorType::MissingColon)?;
        let else_branch = self.nested(&question, Self::ternary)?;

        Ok(Expr::ternary(condition, then_branch, else_branch))
    }

    fn equality(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative_series(Self::comparison, &[BangEqual, EqualEqual])
    }

    fn comparison(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative_series(Self::addition, &[Greater, GreaterEqual, Less, LessEqual])
    }

    fn addition(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative_series(Self::multiplication, &[Minus, Plus])
    }

    fn multiplication(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative_series(Self::unary, &[Slash, Star, Percent])
    }

    fn unary(&mut self) -> Result<'a, Expr<'a>> {
        match self.consume_any(&[Bang, Minus]) {
            Some(operator) => {
                let right = self.nested(&operator, Self::unary)?;
                Ok(Expr::unary(operator, right))
            }
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<'a, Expr<'a>> {
        let token = self.peek_token();
        let expr = match token.data {
            TokenData::False => Expr::literal(false),
            TokenData::True => Expr::literal(true),
            TokenData::Nil => Expr::Literal(Value::Nil),
            TokenData::Number(n) => Expr::literal(n),
            TokenData::Str(s) => Expr::literal(s),
            TokenData::LeftParen => {
                self.advance();
                let expr = self.nested(&token, Self::expression)?;
                self.consume_or_error(RightParen, ParserErrorType::MissingRightParen)?;
                return Ok(Expr::grouping(expr));
            }
            _ => return Err(ParserError::new(ParserErrorType::ExpectedExpression, token)),
        };

        self.advance();
        Ok(expr)
    }

    /// Runs `parse` one nesting level deeper, failing at `token` once `MAX_NESTING` is exceeded.
    fn nested(
        &mut self,
        token: &Token<'a>,
        parse: fn(&mut Self) -> Result<'a, Expr<'a>>,
    ) -> Result<'a, Expr<'a>> {
        if self.depth == MAX_NESTING {
            return Err(ParserError::new(ParserErrorType::TooDeeplyNested, token.clone()));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses `operand (operator operand)*` for any of the given operators, folding the results
    /// into a left-leaning tree of binary expressions.
    fn left_associative_series(
        &mut self,
        operand: fn(&mut Self) -> Result<'a, Expr<'a>>,
        operators: &[TokenType],
    ) -> Result<'a, Expr<'a>> {
        let mut expr = operand(self)?;

        while let Some(operator) = self.consume_any(operators) {
            let right = operand(self)?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }
}

// Helpers
impl<'a> Parser<'a> {
    fn peek_token(&self) -> Token<'a> {
        self.tokens[self.current].clone()
    }

    fn peek(&self) -> TokenType {
        self.tokens[self.current].ty()
    }

    /// Never moves past `Eof`, so the current token is always valid.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek_token();
        if token.ty() != Eof {
            self.current += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek() == Eof
    }

    fn consume(&mut self, token_type: TokenType) -> Option<Token<'a>> {
        self.consume_any(&[token_type])
    }

    fn consume_any(&mut self, token_types: &[TokenType]) -> Option<Token<'a>> {
        token_types.contains(&self.peek()).then(|| self.advance())
    }

    fn consume_or_error(
        &mut self,
        token_type: TokenType,
        error: ParserErrorType,
    ) -> Result<'a, Token<'a>> {
        match self.consume(token_type) {
            Some(token) => Ok(token),
            None => Err(ParserError::new(error, self.peek_token())),
        }
    }
}
