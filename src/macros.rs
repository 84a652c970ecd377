//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from two positions, or a single-point Span
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's optional literal value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, Some(TokenValue::Int(42)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span, cloning the positions it is given.
///
/// With one argument the span starts and ends at that position.
#[macro_export]
macro_rules! MK_SPAN {
    ($at:expr) => {
        $crate::Span::point($at.clone())
    };
    ($start:expr, $end:expr) => {
        $crate::Span::new($start.clone(), $end.clone())
    };
}
