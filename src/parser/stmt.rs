use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_SPAN,
};

use super::{expr::parse_chain, parser::Parser};

/// Tokens that end the top-level statement sequence.
pub const PROGRAM_STOP: &[TokenKind] = &[TokenKind::EOF];
/// Tokens that end the statement sequence of a function body.
pub const BODY_STOP: &[TokenKind] = &[TokenKind::RSquare, TokenKind::EOF];

pub fn parse_statements(parser: &mut Parser, stop: &[TokenKind]) -> Result<Node, Error> {
    parse_statements_after(parser, None, stop)
}

/// Parses `(statement ;+)*` up to a token in `stop`, continuing from an
/// already parsed first statement when one is given.
///
/// The last statement may omit its semicolon. Zero statements give `NoNode`.
pub fn parse_statements_after(
    parser: &mut Parser,
    first: Option<Node>,
    stop: &[TokenKind],
) -> Result<Node, Error> {
    let start = parser.current_token().span.start.clone();
    let mut statements = Vec::new();
    let mut pending = first;

    loop {
        let statement = match pending.take() {
            Some(statement) => statement,
            None if parser.at_any(stop) => break,
            None => parse_statement(parser)?,
        };
        statements.push(statement);

        if parser.at_any(stop) {
            break;
        }

        if parser.current_token_kind() != TokenKind::Semicolon {
            return Err(Error::spanning(
                ErrorImpl::ExpectedSemicolon,
                parser.current_token().span.clone(),
            ));
        }

        while parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
    }

    let span = match (statements.first(), statements.last()) {
        (Some(first), Some(last)) => first.span().to(last.span()),
        _ => return Ok(Node::NoNode { span: MK_SPAN!(start) }),
    };

    Ok(Node::List {
        elements: statements,
        span,
    })
}

pub fn parse_statement(parser: &mut Parser) -> Result<Node, Error> {
    Ok(parse_chain(parser, None)?.unwrap_trivial_chain())
}

/// `[` [statement `|`] statements `]`
///
/// Whether the first statement is a parameter header is decided by the
/// token that follows it.
pub fn parse_function(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.advance();
    parser.enter(&open)?;
    let function = parse_function_contents(parser, open);
    parser.leave();
    function
}

fn parse_function_contents(parser: &mut Parser, open: Token) -> Result<Node, Error> {
    let (header, body) = match parser.current_token_kind() {
        TokenKind::Pipe => {
            parser.advance();
            let header = Node::NoNode {
                span: MK_SPAN!(open.span.start),
            };
            (Some(Box::new(header)), parse_statements(parser, BODY_STOP)?)
        }
        kind if BODY_STOP.contains(&kind) => (None, parse_statements(parser, BODY_STOP)?),
        _ => {
            let first = parse_statement(parser)?;
            if parser.current_token_kind() == TokenKind::Pipe {
                parser.advance();
                (Some(Box::new(first)), parse_statements(parser, BODY_STOP)?)
            } else {
                (None, parse_statements_after(parser, Some(first), BODY_STOP)?)
            }
        }
    };

    if parser.current_token_kind() != TokenKind::RSquare {
        return Err(Error::spanning(
            ErrorImpl::Unmatched { delimiter: '[' },
            open.span,
        ));
    }

    let close = parser.advance();

    Ok(Node::FuncDef {
        header,
        body: Box::new(body),
        span: open.span.to(&close.span),
    })
}
