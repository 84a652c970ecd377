use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SPAN, MK_TOKEN,
};

use super::tokens::{
    Token, TokenKind, TokenValue, PUNCTUATION_LOOKUP, STRING_DELIMITERS, WHITESPACES,
};

pub type Handler = fn(&mut Lexer) -> Result<(), Error>;

/// Single-pass cursor over the source characters.
///
/// Every handler is entered with the cursor on the first character of its
/// lexeme and leaves it on the last one; `tokenize` then steps past it.
pub struct Lexer {
    tokens: Vec<Token>,
    chars: Vec<char>,
    pos: Position,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("<undefined>")));

        Lexer {
            tokens: vec![],
            chars: source.chars().collect(),
            pos: Position::new(file_name, Rc::new(source.to_string())),
        }
    }

    pub fn advance(&mut self) -> Option<char> {
        let next = self.get_next(1);
        self.pos.advance_over(next)
    }

    pub fn push(&mut self, token: Token) {
        tracing::trace!(token = %token, "lexed");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.chars.get(self.pos.index).copied()
    }

    /// Looks `n` characters ahead without moving.
    pub fn get_next(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos.index + n).copied()
    }

    pub fn here(&self) -> Position {
        self.pos.clone()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn punctuation_handler(lexer: &mut Lexer) -> Result<(), Error> {
    if let Some(kind) = lexer.at().and_then(|c| PUNCTUATION_LOOKUP.get(&c)) {
        let here = lexer.here();
        lexer.push(MK_TOKEN!(*kind, None, MK_SPAN!(here)));
    }
    Ok(())
}

/// `..` opens a block comment closed by the next `..`; a lone `.` runs to end of line.
fn comment_handler(lexer: &mut Lexer) -> Result<(), Error> {
    if lexer.get_next(1) == Some('.') {
        lexer.advance();
        loop {
            match (lexer.get_next(1), lexer.get_next(2)) {
                (Some('.'), Some('.')) => {
                    lexer.advance();
                    lexer.advance();
                    break;
                }
                (None, _) => break,
                _ => {
                    lexer.advance();
                }
            }
        }
    } else {
        while !matches!(lexer.get_next(1), Some('\n') | None) {
            lexer.advance();
        }
    }

    Ok(())
}

fn namespace_handler(lexer: &mut Lexer) -> Result<(), Error> {
    if lexer.get_next(1) != Some(':') {
        return Err(Error::new(ErrorImpl::IncorrectColon, lexer.here()));
    }

    let start = lexer.here();
    lexer.advance();
    lexer.push(MK_TOKEN!(TokenKind::Namesp, None, MK_SPAN!(start, lexer.pos)));
    Ok(())
}

fn number_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.here();
    let mut literal: String = lexer.at().into_iter().collect();
    let mut seen_dot = false;
    let mut seen_exponent = false;
    let mut last_was_e = false;

    while let Some(next) = lexer.get_next(1) {
        let accepted = next.is_ascii_digit()
            || matches!(next, '_' | 'e' | 'E' | '.')
            || (next == '-' && last_was_e);
        if !accepted {
            break;
        }

        lexer.advance();
        let ch = next.to_ascii_lowercase();
        last_was_e = false;

        match ch {
            '.' if seen_exponent => {
                return Err(Error::new(ErrorImpl::FractionalExponent, lexer.here()));
            }
            '.' if seen_dot => return Err(Error::new(ErrorImpl::RepeatedDot, lexer.here())),
            '.' => seen_dot = true,
            'e' if seen_exponent => {
                return Err(Error::new(ErrorImpl::RepeatedExponent, lexer.here()));
            }
            'e' => {
                seen_exponent = true;
                last_was_e = true;
            }
            _ => {}
        }

        literal.push(ch);
    }

    let span = MK_SPAN!(start, lexer.pos);
    let digits: String = literal.chars().filter(|c| *c != '_').collect();
    let invalid = |literal: String, span| Error::spanning(ErrorImpl::InvalidNumber { literal }, span);

    if seen_dot || seen_exponent {
        match digits.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                lexer.push(MK_TOKEN!(TokenKind::Float, Some(TokenValue::Float(value)), span))
            }
            _ => return Err(invalid(literal, span)),
        }
    } else {
        match digits.parse::<i64>() {
            Ok(value) => lexer.push(MK_TOKEN!(TokenKind::Int, Some(TokenValue::Int(value)), span)),
            Err(_) => return Err(invalid(literal, span)),
        }
    }

    Ok(())
}

fn symbol_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.here();
    let mut identifier: String = lexer.at().into_iter().collect();

    while let Some(next) = lexer.get_next(1).filter(|c| is_ident_continue(*c)) {
        lexer.advance();
        identifier.push(next);
    }

    lexer.push(MK_TOKEN!(
        TokenKind::Identifier,
        Some(TokenValue::Str(identifier)),
        MK_SPAN!(start, lexer.pos)
    ));
    Ok(())
}

/// Content is taken verbatim up to the matching closer; there are no escapes.
fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let Some((opener, closer)) = lexer
        .at()
        .and_then(|c| STRING_DELIMITERS.get(&c).map(|closer| (c, *closer)))
    else {
        return Ok(());
    };

    let start = lexer.here();
    let mut content = String::new();

    loop {
        match lexer.get_next(1) {
            None => {
                return Err(Error::new(
                    ErrorImpl::UnclosedDelimiter { delimiter: opener },
                    lexer.here(),
                ))
            }
            Some(ch) if ch == closer => {
                lexer.advance();
                break;
            }
            Some(ch) => {
                lexer.advance();
                content.push(ch);
            }
        }
    }

    lexer.push(MK_TOKEN!(
        TokenKind::String,
        Some(TokenValue::Str(content)),
        MK_SPAN!(start, lexer.pos)
    ));
    Ok(())
}

fn unexpected_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let Some(ch) = lexer.at() else {
        return Ok(());
    };

    let is_closer = STRING_DELIMITERS.values().any(|closer| *closer == ch);
    let error = if is_closer && !STRING_DELIMITERS.contains_key(&ch) {
        ErrorImpl::UnopenedDelimiter { delimiter: ch }
    } else {
        ErrorImpl::UnexpectedChar { code: ch as u32 }
    };

    Err(Error::new(error, lexer.here()))
}

fn handler_for(ch: char) -> Handler {
    match ch {
        c if PUNCTUATION_LOOKUP.contains_key(&c) => punctuation_handler,
        '.' => comment_handler,
        ':' => namespace_handler,
        c if c.is_ascii_digit() => number_handler,
        c if is_ident_start(c) => symbol_handler,
        c if STRING_DELIMITERS.contains_key(&c) => string_handler,
        _ => unexpected_handler,
    }
}

/// Converts source text into tokens, ending with a single EOF token.
///
/// Lexing stops at the first error; no partial token list is returned.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(current) = lex.at() {
        if WHITESPACES.contains(&current) {
            lex.advance();
            continue;
        }

        if let Err(error) = handler_for(current)(&mut lex) {
            tracing::debug!(kind = %error.kind(), at = %error.get_position(), "lexing failed");
            return Err(error);
        }

        lex.advance();
    }

    let end = lex.here();
    lex.push(MK_TOKEN!(TokenKind::EOF, None, MK_SPAN!(end)));
    Ok(lex.tokens)
}
