use crate::{lexer::tokens::Token, Span};

/// Syntax tree node. Every node owns its children and a copy of its span.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Items joined by `>`. A chain that starts with `>` holds an empty
    /// `List` placeholder as its first element.
    Chain { elements: Vec<Node>, span: Span },
    /// Items joined by `,`; also the container for a sequence of statements.
    List { elements: Vec<Node>, span: Span },
    String { token: Token },
    Int { token: Token },
    Float { token: Token },
    /// `a::b::c`
    Identifier { segments: Vec<Token>, span: Span },
    /// `::a::b`, rooted at a library. Segments may be absent (`::`).
    LibIdentifier { segments: Vec<Token>, span: Span },
    /// `[header | body]`. `header` is `None` when there is no `|` clause and
    /// `Some(NoNode)` for an empty one.
    FuncDef {
        header: Option<Box<Node>>,
        body: Box<Node>,
        span: Span,
    },
    /// `()`
    Unit { span: Span },
    /// No statements, or an empty function header.
    NoNode { span: Span },
}

impl Node {
    pub fn span(&self) -> &Span {
        match self {
            Node::String { token } | Node::Int { token } | Node::Float { token } => &token.span,
            Node::Chain { span, .. }
            | Node::List { span, .. }
            | Node::Identifier { span, .. }
            | Node::LibIdentifier { span, .. }
            | Node::FuncDef { span, .. }
            | Node::Unit { span }
            | Node::NoNode { span } => span,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Node::Chain { .. } => "ChainNode",
            Node::List { .. } => "ListNode",
            Node::String { .. } => "StringNode",
            Node::Int { .. } => "IntNode",
            Node::Float { .. } => "FloatNode",
            Node::Identifier { .. } => "IdentifierNode",
            Node::LibIdentifier { .. } => "LibIdentifierNode",
            Node::FuncDef { .. } => "FuncDefNode",
            Node::Unit { .. } => "UnitNode",
            Node::NoNode { .. } => "NoNode",
        }
    }

    /// Children of a chain or list.
    pub fn elements(&self) -> Option<&[Node]> {
        match self {
            Node::Chain { elements, .. } | Node::List { elements, .. } => Some(elements),
            _ => None,
        }
    }

    /// The empty list standing in for "nothing piped yet" in `> x`.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Node::List { elements, .. } if elements.is_empty())
    }

    /// A chain of exactly one element is replaced by that element.
    pub fn unwrap_trivial_chain(self) -> Node {
        match self {
            Node::Chain { mut elements, span } => {
                if elements.len() == 1 {
                    if let Some(only) = elements.pop() {
                        return only;
                    }
                }
                Node::Chain { elements, span }
            }
            other => other,
        }
    }

    /// Whether `self` ends exactly where `other` starts.
    pub fn pos_eq(&self, other: &Node) -> bool {
        self.span().end == other.span().start
    }

    /// Equality of shape and literal values, ignoring positions.
    pub fn structural_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Chain { elements: a, .. }, Node::Chain { elements: b, .. })
            | (Node::List { elements: a, .. }, Node::List { elements: b, .. }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.structural_eq(b))
            }
            (Node::String { token: a }, Node::String { token: b })
            | (Node::Int { token: a }, Node::Int { token: b })
            | (Node::Float { token: a }, Node::Float { token: b }) => a.value == b.value,
            (Node::Identifier { segments: a, .. }, Node::Identifier { segments: b, .. })
            | (Node::LibIdentifier { segments: a, .. }, Node::LibIdentifier { segments: b, .. }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.value == b.value)
            }
            (
                Node::FuncDef {
                    header: header_a,
                    body: body_a,
                    ..
                },
                Node::FuncDef {
                    header: header_b,
                    body: body_b,
                    ..
                },
            ) => {
                let headers_match = match (header_a, header_b) {
                    (Some(a), Some(b)) => a.structural_eq(b),
                    (None, None) => true,
                    _ => false,
                };
                headers_match && body_a.structural_eq(body_b)
            }
            (Node::Unit { .. }, Node::Unit { .. }) | (Node::NoNode { .. }, Node::NoNode { .. }) => true,
            _ => false,
        }
    }
}
