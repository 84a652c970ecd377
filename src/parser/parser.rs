//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The grammar functions live in `stmt` (statement sequences and function
//! literals) and `expr` (chains, lists and atoms). They share one token
//! cursor and decide between alternatives with a single token of lookahead;
//! the cursor never moves backwards.

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::stmt::{parse_statements, PROGRAM_STOP};

/// How many `(` and `[` may be open at once.
pub const NESTING_LIMIT: usize = 64;

/// The token cursor shared by all grammar functions.
pub struct Parser {
    /// The list of tokens to parse, always ending with EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Brackets currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A token list that does not end with EOF (the lexer always emits one)
    /// gets one appended after its last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| {
                    Position::new(Rc::new(String::from("<undefined>")), Rc::new(String::new()))
                });
            tokens.push(MK_TOKEN!(TokenKind::EOF, None, Span::point(end)));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Whether the current token is one of `kinds`.
    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_token_kind())
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The cursor stays on the final EOF token once it gets there.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Records that `open` starts a nested construct, failing once more
    /// than `NESTING_LIMIT` are open.
    pub fn enter(&mut self, open: &Token) -> Result<(), Error> {
        if self.depth >= NESTING_LIMIT {
            return Err(Error::spanning(
                ErrorImpl::NestingTooDeep {
                    limit: NESTING_LIMIT,
                },
                open.span.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// The error for a token that cannot appear where the cursor is.
    pub fn unexpected(&self) -> Error {
        let token = self.current_token();
        let error = if token.is_eof() {
            ErrorImpl::UnexpectedEof
        } else {
            ErrorImpl::UnexpectedToken {
                token: token.lexeme(),
            }
        };
        Error::spanning(error, token.span.clone())
    }
}

/// Parses a token stream into a syntax tree.
///
/// This is the main entry point for parsing. The root is `NoNode` for an
/// empty program and otherwise a `List` holding one node per statement.
/// Parsing stops at the first error.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    let program = parse_statements(&mut parser, PROGRAM_STOP);

    if let Err(error) = &program {
        tracing::debug!(kind = %error.kind(), at = %error.get_position(), "parsing failed");
    }

    program
}
