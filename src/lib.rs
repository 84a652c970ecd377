#![allow(clippy::module_inception)]

//! Front end of the Huitr language: lexer, parser and the syntax tree they
//! build, plus the diagnostics both phases report.
//!
//! ```rust
//! use huitr::{ast::format::format_program, lexer::lexer::tokenize, parser::parser::parse};
//!
//! let tokens = tokenize("1, 2 > print;", Some(String::from("demo.hui"))).unwrap();
//! let program = parse(tokens).unwrap();
//! assert_eq!(format_program(&program), "(1, 2) > print;");
//! ```

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A cursor into a source buffer.
///
/// `index` and `column` count characters, not bytes. The filename and the
/// whole source text are shared, so any token or node can re-render its line
/// long after lexing finished.
#[derive(Debug, Clone)]
pub struct Position {
    pub line_number: usize,
    pub index: usize,
    pub column: usize,
    pub filename: Rc<String>,
    pub source: Rc<String>,
    /// The character under the cursor is `\n`; the next step starts a new line.
    newline_pending: bool,
}

impl Position {
    pub fn new(filename: Rc<String>, source: Rc<String>) -> Self {
        let newline_pending = source.starts_with('\n');
        Position {
            line_number: 0,
            index: 0,
            column: 0,
            filename,
            source,
            newline_pending,
        }
    }

    fn step(&mut self) {
        self.index += 1;
        self.column += 1;

        if self.newline_pending {
            self.line_number += 1;
            self.column = 0;
        }
    }

    /// Moves one character forward. The caller already knows the character
    /// that is now under the cursor (`None` at end of input).
    pub fn advance_over(&mut self, current_char: Option<char>) -> Option<char> {
        self.step();
        self.newline_pending = current_char == Some('\n');
        current_char
    }

    /// Moves `n` characters forward, looking each one up in the source.
    pub fn advance(&mut self, n: usize) -> Option<char> {
        let mut current = self.get_char_at_pos();
        for _ in 0..n {
            self.step();
            current = self.get_char_at_pos();
            self.newline_pending = current == Some('\n');
        }
        current
    }

    /// The character under the cursor, or `None` past the end of the line or source.
    pub fn get_char_at_pos(&self) -> Option<char> {
        self.get_line()?.chars().nth(self.column)
    }

    /// The full text of the cursor's line, trailing newline included.
    pub fn get_line(&self) -> Option<&str> {
        self.source.split_inclusive('\n').nth(self.line_number)
    }

    pub fn end_of_line(&self) -> bool {
        self.get_char_at_pos() == Some('\n')
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.line_number == other.line_number
            && self.index == other.index
            && self.column == other.column
            && self.filename == other.filename
            && (Rc::ptr_eq(&self.source, &other.source) || self.source == other.source)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}:{}]", self.filename, self.line_number, self.column)
    }
}

/// Inclusive start/end pair: `end` is the position of the last character covered.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn point(position: Position) -> Self {
        Span {
            start: position.clone(),
            end: position,
        }
    }

    /// From the start of `self` to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Position;

    fn position(source: &str) -> Position {
        Position::new(Rc::new("test.hui".to_string()), Rc::new(source.to_string()))
    }

    #[test]
    fn test_advance_applies_newline_on_next_step() {
        let mut pos = position("ab\ncd");
        assert_eq!(pos.get_char_at_pos(), Some('a'));

        assert_eq!(pos.advance(2), Some('\n'));
        assert_eq!((pos.line_number, pos.column, pos.index), (0, 2, 2));
        assert!(pos.end_of_line());

        assert_eq!(pos.advance(1), Some('c'));
        assert_eq!((pos.line_number, pos.column, pos.index), (1, 0, 3));
        assert!(!pos.end_of_line());

        assert_eq!(pos.advance(2), None);
        assert_eq!((pos.line_number, pos.column, pos.index), (1, 2, 5));
    }

    #[test]
    fn test_advance_over_matches_lookup() {
        let source = "x\n\ny";
        let mut looked_up = position(source);
        let mut supplied = position(source);

        for ch in source.chars().skip(1).map(Some).chain([None]) {
            assert_eq!(supplied.advance_over(ch), looked_up.advance(1));
            assert_eq!(supplied, looked_up);
        }
        assert_eq!(supplied.line_number, 2);
    }

    #[test]
    fn test_leading_newline() {
        let mut pos = position("\nz");
        assert!(pos.end_of_line());
        assert_eq!(pos.advance(1), Some('z'));
        assert_eq!((pos.line_number, pos.column), (1, 0));
    }

    #[test]
    fn test_get_line() {
        let mut pos = position("first\nsecond");
        assert_eq!(pos.get_line(), Some("first\n"));
        pos.advance(6);
        assert_eq!(pos.get_line(), Some("second"));

        let empty = position("");
        assert_eq!(empty.get_line(), None);
        assert_eq!(empty.get_char_at_pos(), None);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let mut pos = position("«a»");
        assert_eq!(pos.advance(1), Some('a'));
        assert_eq!(pos.advance(1), Some('»'));
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn test_copies_are_independent() {
        let mut pos = position("abc");
        let snapshot = pos.clone();
        pos.advance(1);
        assert_eq!(snapshot.index, 0);
        assert_ne!(snapshot, pos);
        assert_eq!(snapshot.to_string(), "[test.hui:0:0]");
    }
}
