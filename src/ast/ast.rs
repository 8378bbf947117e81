use std::fmt::Display;

use crate::Position;

use super::statements::Statements;

/// Arity
///
/// The structural tag of a node. It is derived from the node's kind, so a
/// node can never carry children inconsistent with its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Literal,
    Name,
    This,
    Unary,
    Binary,
    Ternary,
    Statement,
    Function,
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Arity::Literal => "literal",
            Arity::Name => "name",
            Arity::This => "this",
            Arity::Unary => "unary",
            Arity::Binary => "binary",
            Arity::Ternary => "ternary",
            Arity::Statement => "statement",
            Arity::Function => "function",
        };
        write!(f, "{}", name)
    }
}

/// The value carried by a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::String(string) => write!(f, "{:?}", string),
            Value::Bool(boolean) => write!(f, "{}", boolean),
            Value::Null => write!(f, "null"),
        }
    }
}

/// Node Kinds
///
/// Every grammar form the parser can produce. Operator text lives in
/// [`Node::id`]; the kind fixes the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// `1`, `"s"`, `true`, `pi`, and property names after `.`
    Literal(Value),
    Name(String),
    This,
    /// `-x`, `!x`, `typeof x`
    Prefix(Box<Node>),
    /// `[a, b]`
    Array(Vec<Node>),
    /// `{k: v}`; each entry carries its key in [`Node::key`]
    Object(Vec<Node>),
    /// Arithmetic, comparison and logical operators
    Binary(Box<Node>, Box<Node>),
    /// `=`, `+=`, `-=` used as an expression
    Assignment(Box<Node>, Box<Node>),
    /// The `name = value` part of a `var` statement
    Declaration(Box<Node>, Box<Node>),
    /// `object.property`; the property is a string literal
    Member(Box<Node>, Box<Node>),
    /// `object[index]`
    Index(Box<Node>, Box<Node>),
    /// `callee(arguments)`
    Call(Box<Node>, Vec<Node>),
    /// `condition ? consequent : alternative`
    Ternary(Box<Node>, Box<Node>, Box<Node>),
    /// A `{ ... }` statement with its own scope
    Block(Statements),
    While(Box<Node>, Statements),
    If(Box<Node>, Statements, Statements),
    Break,
    Return(Option<Box<Node>>),
    Function {
        name: Option<String>,
        parameters: Vec<Node>,
        body: Statements,
    },
}

/// A node of the syntax tree. Each node owns its children.
///
/// Equality compares structure only; source positions are ignored.
#[derive(Debug, Clone)]
pub struct Node {
    /// The symbol the node was produced by: `+`, `(`, `function`, `(name)`...
    pub id: String,
    pub kind: NodeKind,
    /// Set on the values of an object literal.
    pub key: Option<String>,
    pub position: Position,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.key == other.key && self.kind == other.kind
    }
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Position) -> Self {
        Node {
            id: id.into(),
            kind,
            key: None,
            position,
        }
    }

    pub fn name(value: impl Into<String>, position: Position) -> Self {
        Node::new("(name)", NodeKind::Name(value.into()), position)
    }

    pub fn literal(value: Value, position: Position) -> Self {
        Node::new("(literal)", NodeKind::Literal(value), position)
    }

    pub fn arity(&self) -> Arity {
        match &self.kind {
            NodeKind::Literal(_) => Arity::Literal,
            NodeKind::Name(_) => Arity::Name,
            NodeKind::This => Arity::This,
            NodeKind::Prefix(_) | NodeKind::Array(_) | NodeKind::Object(_) => Arity::Unary,
            NodeKind::Binary(..)
            | NodeKind::Assignment(..)
            | NodeKind::Declaration(..)
            | NodeKind::Member(..)
            | NodeKind::Index(..)
            | NodeKind::Call(..) => Arity::Binary,
            NodeKind::Ternary(..) => Arity::Ternary,
            NodeKind::Block(_)
            | NodeKind::While(..)
            | NodeKind::If(..)
            | NodeKind::Break
            | NodeKind::Return(_) => Arity::Statement,
            NodeKind::Function { .. } => Arity::Function,
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self.kind, NodeKind::Assignment(..))
    }

    pub fn is_call(&self) -> bool {
        matches!(self.kind, NodeKind::Call(..))
    }

    /// Whether the node can stand on the left of an assignment.
    pub fn is_lvalue(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Name(_) | NodeKind::Member(..) | NodeKind::Index(..)
        )
    }

    /// Whether the node can be invoked with `(...)`.
    pub fn is_callable(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Name(_)
                | NodeKind::Function { .. }
                | NodeKind::Member(..)
                | NodeKind::Index(..)
                | NodeKind::Call(..)
        )
    }

    /// The node's direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Literal(_) | NodeKind::Name(_) | NodeKind::This | NodeKind::Break => vec![],
            NodeKind::Prefix(operand) => vec![&**operand],
            NodeKind::Array(items) | NodeKind::Object(items) => items.iter().collect(),
            NodeKind::Binary(first, second)
            | NodeKind::Assignment(first, second)
            | NodeKind::Declaration(first, second)
            | NodeKind::Member(first, second)
            | NodeKind::Index(first, second) => vec![&**first, &**second],
            NodeKind::Call(callee, arguments) => {
                std::iter::once(&**callee).chain(arguments.iter()).collect()
            }
            NodeKind::Ternary(first, second, third) => vec![&**first, &**second, &**third],
            NodeKind::Block(body) => body.iter().collect(),
            NodeKind::While(condition, body) => {
                std::iter::once(&**condition).chain(body.iter()).collect()
            }
            NodeKind::If(condition, then, otherwise) => std::iter::once(&**condition)
                .chain(then.iter())
                .chain(otherwise.iter())
                .collect(),
            NodeKind::Return(value) => value.iter().map(|value| &**value).collect(),
            NodeKind::Function {
                parameters, body, ..
            } => parameters.iter().chain(body.iter()).collect(),
        }
    }
}
