use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Characters that form a token on their own.
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('[', TokenKind::LSquare);
        map.insert(']', TokenKind::RSquare);
        map.insert('>', TokenKind::ChainOp);
        map.insert(',', TokenKind::Comma);
        map.insert(';', TokenKind::Semicolon);
        map.insert('|', TokenKind::Pipe);
        map
    };

    /// Opening string delimiter to its closing counterpart.
    pub static ref STRING_DELIMITERS: HashMap<char, char> = {
        let mut map = HashMap::new();
        map.insert('\'', '\'');
        map.insert('"', '"');
        map.insert('«', '»');
        map
    };
}

/// Space, newline, NBSP, narrow NBSP and tab.
pub const WHITESPACES: [char; 5] = [' ', '\n', '\u{a0}', '\u{202f}', '\t'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LSquare,
    RSquare,
    ChainOp, // >
    Comma,
    Semicolon,
    Pipe,

    String,
    Int,
    Float,
    Identifier,
    Namesp, // ::

    EOF,
}

impl TokenKind {
    /// Whether tokens of this kind carry a literal value.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Int | TokenKind::Float | TokenKind::Identifier
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LSquare => "LSQUARE",
            TokenKind::RSquare => "RSQUARE",
            TokenKind::ChainOp => "CHAINOP",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Pipe => "PIPE",
            TokenKind::String => "STRING",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Namesp => "NAMESP",
            TokenKind::EOF => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// Already-converted literal payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Str(value) => write!(f, "{}", value),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) if self.kind == TokenKind::String => {
                write!(f, "{}:\"{}\"", self.kind, value)
            }
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn matches(&self, kind: TokenKind, value: Option<&TokenValue>) -> bool {
        self.kind == kind && self.value.as_ref() == value
    }

    /// The text of a string or identifier token.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Str(text)) => Some(text),
            _ => None,
        }
    }

    /// How the token reads in source, used in diagnostics.
    pub fn lexeme(&self) -> String {
        match self.kind {
            TokenKind::LParen => String::from("("),
            TokenKind::RParen => String::from(")"),
            TokenKind::LSquare => String::from("["),
            TokenKind::RSquare => String::from("]"),
            TokenKind::ChainOp => String::from(">"),
            TokenKind::Comma => String::from(","),
            TokenKind::Semicolon => String::from(";"),
            TokenKind::Pipe => String::from("|"),
            TokenKind::Namesp => String::from("::"),
            TokenKind::EOF => String::from("EOF"),
            TokenKind::String | TokenKind::Int | TokenKind::Float | TokenKind::Identifier => self
                .value
                .as_ref()
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}
