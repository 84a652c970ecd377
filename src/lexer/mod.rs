//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Punctuation, the `>` chain operator and the `::` namespace separator
//! - Integer and float literals, with exponents and `_` digit separators
//! - String literals delimited by `'…'`, `"…"` or `«…»`
//! - Identifiers (the language has no reserved words)
//! - Line (`.`) and block (`..` … `..`) comments and whitespace skipping
//! - Character-accurate position tracking for error reporting

pub mod lexer;
pub mod tokens;
