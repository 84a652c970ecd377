use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    parser::Parser,
    stmt::{parse_function, parse_statement},
};

fn enclosing_span(elements: &[Node]) -> Option<Span> {
    Some(elements.first()?.span().to(elements.last()?.span()))
}

/// `[>] atom (> atom)*`, switching to a list when a `,` follows.
///
/// `first` is an already parsed left operand whose `>` has been consumed.
pub fn parse_chain(parser: &mut Parser, first: Option<Node>) -> Result<Node, Error> {
    let chain = collect_chain(parser, first)?;
    switch_modes(parser, chain)
}

/// Keeps feeding the node built so far into a list or a chain for as long as
/// the next separator asks for it. A `,` continues with `parse_list`, a `>`
/// with another chain.
fn switch_modes(parser: &mut Parser, mut node: Node) -> Result<Node, Error> {
    loop {
        node = match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
                parse_list(parser, node)?
            }
            TokenKind::ChainOp => {
                parser.advance();
                collect_chain(parser, Some(node))?
            }
            _ => return Ok(node),
        };
    }
}

fn collect_chain(parser: &mut Parser, first: Option<Node>) -> Result<Node, Error> {
    let mut elements = Vec::new();

    match first {
        Some(node) => elements.push(node),
        None if parser.current_token_kind() == TokenKind::ChainOp => {
            let operator = parser.advance();
            elements.push(Node::List {
                elements: vec![],
                span: operator.span,
            });
        }
        None => {}
    }

    elements.push(parse_atom(parser)?);
    while parser.current_token_kind() == TokenKind::ChainOp {
        parser.advance();
        elements.push(parse_atom(parser)?);
    }

    let Some(span) = enclosing_span(&elements) else {
        return Err(parser.unexpected());
    };
    Ok(Node::Chain { elements, span })
}

/// `atom (, atom)*` continuing from `first`, whose `,` has been consumed.
fn parse_list(parser: &mut Parser, first: Node) -> Result<Node, Error> {
    let mut elements = vec![first.unwrap_trivial_chain(), parse_atom(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        elements.push(parse_atom(parser)?);
    }

    let Some(span) = enclosing_span(&elements) else {
        return Err(parser.unexpected());
    };
    Ok(Node::List { elements, span })
}

pub fn parse_atom(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::String => Ok(Node::String {
            token: parser.advance(),
        }),
        TokenKind::Int => Ok(Node::Int {
            token: parser.advance(),
        }),
        TokenKind::Float => Ok(Node::Float {
            token: parser.advance(),
        }),
        TokenKind::LParen => parse_group(parser),
        TokenKind::Identifier | TokenKind::Namesp => parse_identifier(parser),
        TokenKind::LSquare => parse_function(parser),
        TokenKind::RParen
        | TokenKind::RSquare
        | TokenKind::ChainOp
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Pipe
        | TokenKind::EOF => Err(parser.unexpected()),
    }
}

/// `()` is the unit value; `( statement )` is the statement itself.
pub fn parse_group(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.advance();
    parser.enter(&open)?;
    let group = parse_group_contents(parser, &open);
    parser.leave();
    group
}

fn parse_group_contents(parser: &mut Parser, open: &Token) -> Result<Node, Error> {
    let unmatched = || Error::spanning(ErrorImpl::Unmatched { delimiter: '(' }, open.span.clone());

    match parser.current_token_kind() {
        TokenKind::RParen => {
            let close = parser.advance();
            return Ok(Node::Unit {
                span: open.span.to(&close.span),
            });
        }
        TokenKind::EOF => return Err(unmatched()),
        _ => {}
    }

    let inner = parse_statement(parser)?;

    if parser.current_token_kind() != TokenKind::RParen {
        return Err(unmatched());
    }
    parser.advance();

    Ok(inner)
}

/// `[::] name (:: name)*`. A leading `::` makes a library path, which may
/// also end with a dangling `::`.
pub fn parse_identifier(parser: &mut Parser) -> Result<Node, Error> {
    let first = parser.current_token().clone();
    let is_library = first.kind == TokenKind::Namesp;
    let mut segments = Vec::new();
    let mut end = first.span.clone();

    if is_library {
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::Identifier {
        let segment = parser.advance();
        end = segment.span.clone();
        segments.push(segment);

        while parser.current_token_kind() == TokenKind::Namesp {
            let separator = parser.advance();

            if parser.current_token_kind() == TokenKind::Identifier {
                let segment = parser.advance();
                end = segment.span.clone();
                segments.push(segment);
            } else if is_library {
                end = separator.span;
                break;
            } else {
                return Err(Error::spanning(ErrorImpl::DanglingNamespace, separator.span));
            }
        }
    } else if !is_library {
        return Err(parser.unexpected());
    }

    let span = first.span.to(&end);
    if is_library {
        Ok(Node::LibIdentifier { segments, span })
    } else {
        Ok(Node::Identifier { segments, span })
    }
}
