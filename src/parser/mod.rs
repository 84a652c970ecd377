//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a tree of `Node`s. It handles:
//!
//! - Statement sequences separated by `;`
//! - Chains (`a > b`) and lists (`a, b`), switching between the two as the
//!   separators alternate
//! - Atoms: literals, `()`, parenthesised statements, identifiers, library
//!   paths and `[header | body]` function literals
//!
//! The parser is fail-fast: the first error ends parsing.

pub mod expr;
pub mod parser;
pub mod stmt;
