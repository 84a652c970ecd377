//! Unit tests for error handling.
//!
//! This module contains tests for error kinds, messages and rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind};
use crate::{Position, Span};
use std::rc::Rc;

fn position_in(source: &str, index: usize) -> Position {
    let mut position = Position::new(
        Rc::new("test.hui".to_string()),
        Rc::new(source.to_string()),
    );
    position.advance(index);
    position
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedChar { code: '@' as u32 },
        position_in("@", 0),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(error.to_string(), "SyntaxError: unexpected char U+0040");
}

#[test]
fn test_error_span_defaults_to_start() {
    let error = Error::new(ErrorImpl::IncorrectColon, position_in("a : b", 2));

    assert_eq!(error.get_position().column, 2);
    assert_eq!(error.get_span().start, error.get_span().end);
}

#[test]
fn test_reference_error() {
    let error = Error::new(
        ErrorImpl::UndefinedName {
            name: "foo".to_string(),
        },
        position_in("foo;", 0),
    );

    assert_eq!(error.kind(), ErrorKind::ReferenceError);
    assert_eq!(error.to_string(), "ReferenceError: `foo` is not defined");
}

#[test]
fn test_module_not_found_error() {
    let error = Error::new(
        ErrorImpl::ModuleNotFound {
            path: "::std::io".to_string(),
        },
        position_in("::std::io;", 0),
    );

    assert_eq!(error.get_error_name(), "ModuleNotFoundError");
    assert_eq!(
        error.to_string(),
        "ModuleNotFoundError: module `::std::io` not found"
    );
}

#[test]
fn test_messages() {
    assert_eq!(
        ErrorImpl::UnexpectedChar { code: 0x20ac }.to_string(),
        "unexpected char U+20AC"
    );
    assert_eq!(
        ErrorImpl::UnclosedDelimiter { delimiter: '«' }.to_string(),
        "`«` was never closed"
    );
    assert_eq!(
        ErrorImpl::UnopenedDelimiter { delimiter: '»' }.to_string(),
        "`»` was never opened"
    );
    assert_eq!(
        ErrorImpl::Unmatched { delimiter: '(' }.to_string(),
        "unmatched '('"
    );
    assert_eq!(
        ErrorImpl::ExpectedSemicolon.to_string(),
        "expected semicolon to finish the line"
    );
}

#[test]
fn test_render_single_point() {
    let error = Error::new(ErrorImpl::ExpectedSemicolon, position_in("x\n1 2\n", 4));

    assert_eq!(
        error.render(),
        "In file test.hui, line 2:\n  1 2\n    ^\nSyntaxError: expected semicolon to finish the line"
    );
}

#[test]
fn test_render_span() {
    let source = "abc defg;";
    let error = Error::spanning(
        ErrorImpl::UnexpectedToken {
            token: "defg".to_string(),
        },
        Span::new(position_in(source, 4), position_in(source, 7)),
    );

    assert_eq!(
        error.render(),
        "In file test.hui, line 1:\n  abc defg;\n      ^^^^\nSyntaxError: unexpected token `defg`"
    );
}

#[test]
fn test_render_expands_tabs_before_span() {
    let error = Error::new(ErrorImpl::IncorrectColon, position_in("\tx :", 3));

    assert_eq!(
        error.render(),
        String::from("In file test.hui, line 1:\n      x :\n") + &" ".repeat(8) + "^\nSyntaxError: incorrect use of `:`"
    );
}

#[test]
fn test_render_expands_tabs_within_span() {
    let source = "a\tb";
    let error = Error::spanning(
        ErrorImpl::InvalidNumber {
            literal: "a\tb".to_string(),
        },
        Span::new(position_in(source, 0), position_in(source, 2)),
    );

    let rendered = error.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "  a    b");
    assert_eq!(lines[2], "  ^^^^^^");
}

#[test]
fn test_render_multiline_span_stops_at_line_end() {
    let source = "'ab\ncd";
    let error = Error::spanning(
        ErrorImpl::UnclosedDelimiter { delimiter: '\'' },
        Span::new(position_in(source, 0), position_in(source, 5)),
    );

    let rendered = error.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "  'ab");
    assert_eq!(lines[2], "  ^^^");
}

#[test]
fn test_render_without_source_line() {
    let error = Error::new(ErrorImpl::UnexpectedEof, position_in("", 0));

    assert_eq!(
        error.render(),
        "In file test.hui, line 1:\nSyntaxError: unexpected end of input"
    );
}

#[test]
fn test_nesting_error_is_a_syntax_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 64 }, position_in("((x))", 1));

    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(
        error.to_string(),
        "SyntaxError: brackets nested too deeply (limit is 64)"
    );
}
