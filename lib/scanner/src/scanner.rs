use cursor::{Cursor, Line};
use errors::{Diagnostic, Diagnostics};

pub mod token;
pub use token::{Token, TokenData, TokenType};
use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
}

impl From<ScanError> for Diagnostic {
    fn from(e: ScanError) -> Self {
        Diagnostic::new(e.line, e.error)
    }
}

pub struct Scanner<'a> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        Self { start: cursor.clone(), current: cursor, tokens: Vec::new() }
    }

    /// Scans the whole source. Problems are reported to `diagnostics` and the offending
    /// characters skipped, so this always returns a token sequence ending in exactly one `Eof`.
    pub fn scan_tokens(mut self, diagnostics: &mut Diagnostics) -> Vec<Token<'a>> {
        loop {
            self.start = self.current.clone();
            let Some(c) = self.current.next() else {
                break;
            };

            match self.scan_token(c) {
                Ok(Some(data)) => self.add_token(data),
                Ok(None) => (),
                Err(e) => diagnostics.report(e),
            }
        }

        self.tokens.push(Token::new(Eof, "", self.current.line()));
        self.tokens
    }

    fn add_token(&mut self, data: TokenData<'a>) {
        let token = Token::new(data, self.lexeme(), self.current.line());
        log::trace!("Scanned {:?}", token);
        self.tokens.push(token);
    }

    fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.current)
    }

    fn error(&self, error: ScanErrorType) -> ScanError {
        ScanError { error, line: self.current.line() }
    }

    fn scan_token(&mut self, c: char) -> Result<Option<TokenData<'a>>, ScanError> {
        let data = match c {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '*' => Star,
            '%' => Percent,
            '?' => Question,
            ':' => Colon,

            '!' => self.one_or_two('=', BangEqual, Bang),
            '=' => self.one_or_two('=', EqualEqual, Equal),
            '<' => self.one_or_two('=', LessEqual, Less),
            '>' => self.one_or_two('=', GreaterEqual, Greater),

            '/' => {
                if self.current.advance_if('/') {
                    // Comment
                    self.current.advance_while(|c| c != '\n');
                    return Ok(None);
                }
                Slash
            }

            '"' => self.string()?,
            d if d.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),

            ' ' | '\r' | '\t' | '\n' => return Ok(None),

            c => return Err(self.error(ScanErrorType::UnexpectedCharacter(c))),
        };
        Ok(Some(data))
    }

    fn one_or_two(
        &mut self,
        second: char,
        two: TokenData<'a>,
        one: TokenData<'a>,
    ) -> TokenData<'a> {
        if self.current.advance_if(second) {
            two
        } else {
            one
        }
    }

    fn string(&mut self) -> Result<TokenData<'a>, ScanError> {
        self.current.advance_while(|c| c != '"');
        if !self.current.advance_if('"') {
            // The whole rest of the input was swallowed, so there's nothing left to resume from.
            return Err(self.error(ScanErrorType::UnterminatedString));
        }

        let lexeme = self.lexeme();
        Ok(Str(&lexeme[1..lexeme.len() - 1]))
    }

    fn number(&mut self) -> TokenData<'a> {
        self.current.advance_while(|c| c.is_ascii_digit());

        // Only treat the dot as a decimal point if a digit follows, `1.foo` is a method access
        if self.current.peek() == Some('.')
            && self.current.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.current.next();
            self.current.advance_while(|c| c.is_ascii_digit());
        }

        // `digit+ ("." digit+)?` is always valid float syntax
        Number(self.lexeme().parse().unwrap_or_default())
    }

    fn identifier(&mut self) -> TokenData<'a> {
        self.current.advance_while(is_identifier_char);
        TokenData::keyword(self.lexeme()).unwrap_or(Identifier)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
