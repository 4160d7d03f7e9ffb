use std::{fmt::Display, ops::Deref};

use cursor::Line;
use itertools::Itertools;

/// One reported problem in the source: the line, a hint where on that line it happened
/// (e.g. ` at 'foo'` or ` at end`, may be empty) and a message.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{at}: {message}")]
pub struct Diagnostic {
    pub line: Line,
    pub at: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: Line, message: impl ToString) -> Self {
        Self { line, at: String::new(), message: message.to_string() }
    }

    pub fn at(line: Line, at: impl ToString, message: impl ToString) -> Self {
        Self { line, at: at.to_string(), message: message.to_string() }
    }
}

/// Collects the diagnostics of one run. A fresh collector is created for every independent run,
/// so errors from earlier input never leak into later runs.
#[derive(thiserror::Error, Clone, Debug, Default, PartialEq)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        log::debug!("Reporting {diagnostic}");
        self.0.push(diagnostic);
    }

    pub fn had_error(&self) -> bool {
        !self.0.is_empty()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(d: Diagnostic) -> Self {
        Self(vec![d])
    }
}

impl Deref for Diagnostics {
    type Target = Vec<Diagnostic>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formatting() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.had_error());

        diagnostics.report(Diagnostic::new(Line(1), "Unexpected character '@'."));
        diagnostics.report(Diagnostic::at(Line(3), " at end", "Expected an expression."));

        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.to_string(),
            "[line 1] Error: Unexpected character '@'.\n\
             [line 3] Error at end: Expected an expression."
        );
    }
}
