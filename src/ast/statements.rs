use std::slice::Iter;

use super::ast::Node;

/// Zero or more statements.
///
/// A run of statements collapses to `Empty` when nothing was produced and to
/// `Single` when exactly one statement was, so a one-statement body is the
/// statement itself. Iterate with [`Statements::iter`] to treat all three
/// shapes alike.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Statements {
    #[default]
    Empty,
    Single(Box<Node>),
    Sequence(Vec<Node>),
}

impl Statements {
    pub fn from_vec(mut nodes: Vec<Node>) -> Self {
        match nodes.len() {
            0 => Statements::Empty,
            1 => match nodes.pop() {
                Some(node) => Statements::Single(Box::new(node)),
                None => Statements::Empty,
            },
            _ => Statements::Sequence(nodes),
        }
    }

    pub fn iter(&self) -> Iter<'_, Node> {
        match self {
            Statements::Empty => <&[Node]>::default().iter(),
            Statements::Single(node) => std::slice::from_ref(&**node).iter(),
            Statements::Sequence(nodes) => nodes.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Statements::Empty)
    }

    pub fn into_vec(self) -> Vec<Node> {
        match self {
            Statements::Empty => vec![],
            Statements::Single(node) => vec![*node],
            Statements::Sequence(nodes) => nodes,
        }
    }

    /// The only statement, if there is exactly one.
    pub fn single(&self) -> Option<&Node> {
        match self {
            Statements::Single(node) => Some(node),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Statements {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Node> for Statements {
    fn from(node: Node) -> Self {
        Statements::Single(Box::new(node))
    }
}
