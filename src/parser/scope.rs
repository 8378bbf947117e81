use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
};

use super::lookups::SymbolTable;

/// What a scope knows about one name.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub node: Node,
    /// Set when the name was used as a keyword in this scope rather than
    /// declared as a variable.
    pub reserved: bool,
}

/// One lexical scope: the names declared or reserved directly in it.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    definitions: HashMap<String, Definition>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }
}

/// The chain of scopes open at the current point of the parse.
///
/// The global scope is always present; `push` and `pop` manage the nested
/// ones opened by blocks and function bodies.
#[derive(Debug, Clone, Default)]
pub struct ScopeChain {
    global: Scope,
    nested: Vec<Scope>,
}

impl ScopeChain {
    pub fn new() -> Self {
        ScopeChain::default()
    }

    /// Number of open scopes, the global one included.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    pub fn push(&mut self) -> usize {
        self.nested.push(Scope::default());
        trace!(depth = self.depth(), "push scope");
        self.depth()
    }

    /// Closes the innermost scope. The global scope is never popped.
    pub fn pop(&mut self) -> Option<Scope> {
        let scope = self.nested.pop();
        trace!(depth = self.depth(), "pop scope");
        scope
    }

    pub fn current(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.global)
    }

    fn current_mut(&mut self) -> &mut Scope {
        self.nested.last_mut().unwrap_or(&mut self.global)
    }

    /// Innermost first.
    fn chain(&self) -> impl Iterator<Item = &Scope> {
        self.nested.iter().rev().chain(std::iter::once(&self.global))
    }

    fn lookup(&self, name: &str) -> Option<&Definition> {
        self.chain().find_map(|scope| scope.get(name))
    }

    fn is_reserved(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|definition| definition.reserved)
    }

    /// Declares a variable in the innermost scope.
    ///
    /// Fails if that scope already declares or reserves the name. Enclosing
    /// scopes are not consulted, so a nested scope may shadow them.
    pub fn define(&mut self, node: Node) -> Result<Node, Error> {
        let NodeKind::Name(name) = &node.kind else {
            return Err(Error::new(
                ErrorImpl::ExpectedNewVariableName {
                    found: node.id.clone(),
                },
                node.position,
            ));
        };

        if let Some(existing) = self.current().get(name) {
            let error = if existing.reserved {
                ErrorImpl::AlreadyReserved { name: name.clone() }
            } else {
                ErrorImpl::AlreadyDefined { name: name.clone() }
            };
            return Err(Error::new(error, node.position));
        }

        trace!(name = %name, depth = self.depth(), "define");
        self.current_mut().definitions.insert(
            name.clone(),
            Definition {
                node: node.clone(),
                reserved: false,
            },
        );
        Ok(node)
    }

    /// Marks a keyword as used in the innermost scope so it can no longer be
    /// declared as a variable there.
    ///
    /// Only name nodes are affected, and reserving an already reserved name
    /// does nothing.
    pub fn reserve(&mut self, node: &Node) -> Result<(), Error> {
        let NodeKind::Name(name) = &node.kind else {
            return Ok(());
        };
        if self.is_reserved(name) {
            return Ok(());
        }

        if self.current().get(name).is_some() {
            return Err(Error::new(
                ErrorImpl::AlreadyDefined { name: name.clone() },
                node.position,
            ));
        }

        trace!(name = %name, depth = self.depth(), "reserve");
        self.current_mut().definitions.insert(
            name.clone(),
            Definition {
                node: node.clone(),
                reserved: true,
            },
        );
        Ok(())
    }

    /// Resolves a name to the symbol id it should be parsed as.
    ///
    /// The nearest scope that knows the name decides: a declared variable is
    /// `(name)`, a reserved keyword is its own symbol. Names no scope knows
    /// resolve to their registry symbol if there is one, else to `(name)`.
    pub fn find(&self, name: &str, symbols: &SymbolTable) -> String {
        match self.lookup(name) {
            Some(definition) if definition.reserved && symbols.contains(name) => name.to_string(),
            Some(_) => String::from("(name)"),
            None if symbols.contains(name) => name.to_string(),
            None => String::from("(name)"),
        }
    }
}
