use std::fmt::Display;

use crate::Position;

/// The classes of token the tokenizer produces. Operators and punctuation
/// share one kind; the parser tells them apart by their text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Name,
    Operator,
    String,
    Number,
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Name => "name",
            TokenKind::Operator => "operator",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::End => "end",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for names, operators and numbers; the decoded contents
    /// for strings.
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn end(position: Position) -> Self {
        Token::new(TokenKind::End, "(end)", position)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::String | TokenKind::Number)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{:>7} {:<8} {:?}", self.position, self.kind, self.value),
            _ => write!(f, "{:>7} {:<8} {}", self.position, self.kind, self.value),
        }
    }
}
