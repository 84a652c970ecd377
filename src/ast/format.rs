//! Source-like rendering of syntax trees.
//!
//! Printing is a pure function of the tree: the output of a literal,
//! identifier, list or chain node parses back to a structurally equal tree.

use std::fmt::Display;

use crate::lexer::tokens::TokenValue;

use super::ast::Node;

/// Renders a child of a list or chain, parenthesising nested containers.
fn nested(node: &Node) -> String {
    match node {
        Node::Chain { .. } | Node::List { .. } => format!("({})", node),
        _ => node.to_string(),
    }
}

fn quote(text: &str) -> String {
    if !text.contains('"') {
        format!("\"{}\"", text)
    } else if !text.contains('\'') {
        format!("'{}'", text)
    } else {
        format!("«{}»", text)
    }
}

/// Statements separated by `;`, without a trailing one.
fn statements(node: &Node) -> String {
    match node {
        Node::List { elements, .. } => elements
            .iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<_>>()
            .join("; "),
        Node::NoNode { .. } => String::new(),
        other => other.to_string(),
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Chain { elements, .. } => {
                let parts: Vec<String> = elements
                    .iter()
                    .enumerate()
                    .map(|(i, element)| {
                        if i == 0 && element.is_placeholder() {
                            String::new()
                        } else {
                            nested(element)
                        }
                    })
                    .collect();
                write!(f, "{}", parts.join(" > ").trim_start())
            }
            Node::List { elements, .. } => {
                let parts: Vec<String> = elements.iter().map(nested).collect();
                write!(f, "{}", parts.join(", "))
            }
            Node::String { token } => write!(f, "{}", quote(token.text().unwrap_or_default())),
            Node::Int { token } | Node::Float { token } => match &token.value {
                Some(value @ (TokenValue::Int(_) | TokenValue::Float(_))) => write!(f, "{}", value),
                _ => Ok(()),
            },
            Node::Identifier { segments, .. } => {
                let names: Vec<&str> = segments.iter().filter_map(|s| s.text()).collect();
                write!(f, "{}", names.join("::"))
            }
            Node::LibIdentifier { segments, span } => {
                let names: Vec<&str> = segments.iter().filter_map(|s| s.text()).collect();
                // A span reaching past the last segment ends on a dangling `::`.
                let dangling = segments
                    .last()
                    .is_some_and(|last| last.span.end != span.end);
                write!(f, "::{}{}", names.join("::"), if dangling { "::" } else { "" })
            }
            Node::FuncDef { header, body, .. } => {
                let body = statements(body);
                let header = header.as_ref().map(|header| match header.as_ref() {
                    Node::NoNode { .. } => String::from("|"),
                    header => format!("{} |", header),
                });

                match (header, body.is_empty()) {
                    (None, _) => write!(f, "[{}]", body),
                    (Some(header), true) => write!(f, "[{}]", header),
                    (Some(header), false) => write!(f, "[{} {}]", header, body),
                }
            }
            Node::Unit { .. } => write!(f, "()"),
            Node::NoNode { .. } => Ok(()),
        }
    }
}

/// Renders a parsed program: every statement terminated by `;`.
pub fn format_program(program: &Node) -> String {
    match program {
        Node::List { elements, .. } => elements
            .iter()
            .map(|statement| format!("{};", statement))
            .collect::<Vec<_>>()
            .join(" "),
        Node::NoNode { .. } => String::new(),
        other => format!("{};", other),
    }
}
