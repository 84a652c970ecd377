use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

/// Columns a tab occupies when a source line is echoed in a diagnostic.
pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxError,
    ReferenceError,
    ModuleNotFoundError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A diagnostic anchored to a source span. The first one raised ends the phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            span: Span::point(position),
        }
    }

    pub fn spanning(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::ModuleNotFoundError => "ModuleNotFoundError",
        }
    }

    /// Renders the diagnostic with the offending line and a caret underline.
    ///
    /// ```text
    /// In file main.hui, line 3:
    ///   1 2
    ///     ^
    /// SyntaxError: expected semicolon to finish the line
    /// ```
    pub fn render(&self) -> String {
        let start = &self.span.start;
        let mut text = format!(
            "In file {}, line {}:\n",
            start.filename,
            start.line_number + 1
        );

        let line = start
            .get_line()
            .map(|line| line.trim_end_matches(|c| c == '\n' || c == '\r'))
            .unwrap_or_default();

        if !line.is_empty() {
            let (offset, length) = self.underline(line);
            text.push_str(&format!(
                "  {}\n  {}{}\n",
                line.replace('\t', &" ".repeat(TAB_WIDTH)),
                " ".repeat(offset),
                "^".repeat(length)
            ));
        }

        text.push_str(&self.to_string());
        text
    }

    /// Caret offset and length on the tab-expanded line.
    fn underline(&self, line: &str) -> (usize, usize) {
        let start = &self.span.start;
        let end = &self.span.end;
        let chars: Vec<char> = line.chars().collect();

        // A span running onto later lines is underlined to the end of its first line.
        let last_column = if end.line_number == start.line_number {
            end.column.max(start.column)
        } else {
            chars.len().saturating_sub(1).max(start.column)
        };

        let is_tab = |c: &&char| **c == '\t';
        let tabs_before = chars.iter().take(start.column).filter(is_tab).count();
        let tabs_within = chars
            .iter()
            .skip(start.column)
            .take(last_column - start.column + 1)
            .filter(is_tab)
            .count();

        let offset = start.column + tabs_before * (TAB_WIDTH - 1);
        let length = last_column - start.column + 1 + tabs_within * (TAB_WIDTH - 1);
        (offset, length)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.get_error_name(), self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected char U+{code:04X}")]
    UnexpectedChar { code: u32 },
    #[error("incorrect use of `:`")]
    IncorrectColon,
    #[error("`{delimiter}` was never closed")]
    UnclosedDelimiter { delimiter: char },
    #[error("`{delimiter}` was never opened")]
    UnopenedDelimiter { delimiter: char },
    #[error("too many `.` in number literal")]
    RepeatedDot,
    #[error("exponent must be an integer")]
    FractionalExponent,
    #[error("exponent already specified in number literal")]
    RepeatedExponent,
    #[error("invalid number literal `{literal}`")]
    InvalidNumber { literal: String },
    #[error("expected semicolon to finish the line")]
    ExpectedSemicolon,
    #[error("unmatched '{delimiter}'")]
    Unmatched { delimiter: char },
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected identifier after `::`")]
    DanglingNamespace,
    #[error("brackets nested too deeply (limit is {limit})")]
    NestingTooDeep { limit: usize },
    #[error("`{name}` is not defined")]
    UndefinedName { name: String },
    #[error("module `{path}` not found")]
    ModuleNotFound { path: String },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::UndefinedName { .. } => ErrorKind::ReferenceError,
            ErrorImpl::ModuleNotFound { .. } => ErrorKind::ModuleNotFoundError,
            ErrorImpl::UnexpectedChar { .. }
            | ErrorImpl::IncorrectColon
            | ErrorImpl::UnclosedDelimiter { .. }
            | ErrorImpl::UnopenedDelimiter { .. }
            | ErrorImpl::RepeatedDot
            | ErrorImpl::FractionalExponent
            | ErrorImpl::RepeatedExponent
            | ErrorImpl::InvalidNumber { .. }
            | ErrorImpl::ExpectedSemicolon
            | ErrorImpl::Unmatched { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEof
            | ErrorImpl::DanglingNamespace
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::SyntaxError,
        }
    }
}
