//! Integration tests for the lexing and parsing pipeline.
//!
//! These tests run complete programs from source text through tokenization
//! and parsing, and check the rendered diagnostics a caller would print.

use huitr::{
    ast::{ast::Node, format::format_program},
    errors::errors::{Error, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn run(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source, Some("main.hui".to_string()))?;
    parse(tokens)
}

#[test]
fn test_parse_complete_program() {
    let source = "\
. greeting helpers
::io::print > out;
greet > [name | 'Hello, ', name > concat > out];

.. the main
   part ..
'world' > greet;;
(1, 2.5e1), 3 > ::math::sum > out
";

    let program = run(source).unwrap();
    let statements = program.elements().unwrap();
    assert_eq!(statements.len(), 4);
    assert!(statements.iter().all(|statement| statement.name() == "ChainNode"));

    assert_eq!(
        format_program(&program),
        "::io::print > out; \
         greet > [name | (\"Hello, \", name) > concat > out]; \
         \"world\" > greet; \
         ((1, 25.0), 3) > ::math::sum > out;"
    );
}

#[test]
fn test_program_positions_span_lines() {
    let program = run("a;\n\n  b > c").unwrap();
    let statements = program.elements().unwrap();

    let last = statements[1].span();
    assert_eq!(last.start.line_number, 2);
    assert_eq!(last.start.column, 2);
    assert_eq!(last.end.column, 6);
    assert_eq!(program.span().start.index, 0);
    assert_eq!(program.span().end.index, 10);
}

#[test]
fn test_lexer_error_is_rendered() {
    let error = run("x > y;\n  z : w;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::SyntaxError);
    assert_eq!(
        error.render(),
        "In file main.hui, line 2:\n    z : w;\n      ^\nSyntaxError: incorrect use of `:`"
    );
}

#[test]
fn test_parser_error_is_rendered() {
    let error = run("print 'x';").unwrap_err();

    assert_eq!(
        error.render(),
        "In file main.hui, line 1:\n  print 'x';\n        ^^^\nSyntaxError: expected semicolon to finish the line"
    );
}

#[test]
fn test_unmatched_bracket_is_rendered_at_opening_token() {
    let error = run("f > [x |\n  x > g;").unwrap_err();

    assert_eq!(
        error.render(),
        "In file main.hui, line 1:\n  f > [x |\n      ^\nSyntaxError: unmatched '['"
    );
}

#[test]
fn test_unclosed_string_is_rendered() {
    let error = run("a > «text").unwrap_err();

    assert_eq!(error.to_string(), "SyntaxError: `«` was never closed");
    assert_eq!(error.get_position().line_number, 0);
}

#[test]
fn test_tokens_without_filename() {
    let error = parse(tokenize("(", None).unwrap()).unwrap_err();

    assert!(error.render().starts_with("In file <undefined>, line 1:\n"));
}
