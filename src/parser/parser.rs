//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct, which walks a token stream with a
//! one-symbol lookahead, and the public entry points. Expressions are parsed
//! with the Pratt approach: every symbol id carries NUD (prefix), LED (infix)
//! and statement handlers plus a binding power, all held in a shared
//! [`SymbolTable`].

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    ast::{ast::Node, statements::Statements},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, SymbolTable},
    scope::ScopeChain,
    stmt::parse_stmts,
};

/// A token together with the symbol id it resolved to when the cursor
/// reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolToken {
    pub id: String,
    pub token: Token,
}

impl SymbolToken {
    pub fn value(&self) -> &str {
        &self.token.value
    }

    pub fn position(&self) -> Position {
        self.token.position
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Whether the underlying token was spelled as a name, keyword or not.
    pub fn is_name(&self) -> bool {
        self.token.kind == TokenKind::Name
    }

    /// The token as a name node, for scope bookkeeping.
    pub fn as_name(&self) -> Node {
        Node::name(self.token.value.clone(), self.token.position)
    }
}

/// The state of one parse.
///
/// A parser consumes its token stream; build a new one for every parse.
/// Parsers hold the grammar through an [`Arc`] so independent parses on
/// different threads can share one table.
pub struct Parser {
    /// The tokens still to be read
    tokens: Vec<Token>,
    /// Index of the next token to classify
    pos: usize,
    /// The lookahead symbol
    current: SymbolToken,
    scopes: ScopeChain,
    symbols: Arc<SymbolTable>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_symbols(tokens, Arc::new(SymbolTable::grammar()))
    }

    pub fn with_symbols(tokens: Vec<Token>, symbols: Arc<SymbolTable>) -> Self {
        Parser {
            tokens,
            pos: 0,
            current: SymbolToken {
                id: String::from("(end)"),
                token: Token::end(Position::start()),
            },
            scopes: ScopeChain::new(),
            symbols,
        }
    }

    pub fn current_token(&self) -> &SymbolToken {
        &self.current
    }

    pub fn current_id(&self) -> &str {
        &self.current.id
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.symbols.binding_power(&self.current.id)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeChain {
        &mut self.scopes
    }

    /// Moves to the next token and returns the previous lookahead.
    pub fn advance(&mut self) -> Result<SymbolToken, Error> {
        let next = match self.tokens.get(self.pos).cloned() {
            Some(token) => {
                self.pos += 1;
                self.classify(token)?
            }
            None => SymbolToken {
                id: String::from("(end)"),
                token: Token::end(self.end_position()),
            },
        };

        trace!(id = %next.id, position = %next.position(), "advance");
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Checks that the lookahead is `expected_id`, then advances past it.
    pub fn expect(&mut self, expected_id: &str) -> Result<SymbolToken, Error> {
        if self.current.id != expected_id {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_id.to_string(),
                    found: self.current.token.value.clone(),
                },
                self.current.position(),
            ));
        }

        self.advance()
    }

    /// Expects `expected_id`, closing the innermost scope before the token
    /// after it is classified.
    pub fn expect_scope_end(&mut self, expected_id: &str) -> Result<SymbolToken, Error> {
        if self.current.id != expected_id {
            return self.expect(expected_id);
        }

        self.scopes.pop();
        self.advance()
    }

    /// Marks a keyword token as used in the current scope.
    pub fn reserve(&mut self, token: &SymbolToken) -> Result<(), Error> {
        if !token.is_name() {
            return Ok(());
        }
        self.scopes.reserve(&token.as_name())
    }

    fn classify(&self, token: Token) -> Result<SymbolToken, Error> {
        let id = match token.kind {
            TokenKind::Name => self.scopes.find(&token.value, &self.symbols),
            TokenKind::Operator => {
                if !self.symbols.contains(&token.value) {
                    return Err(Error::new(
                        ErrorImpl::UnknownOperator {
                            operator: token.value.clone(),
                        },
                        token.position,
                    ));
                }
                token.value.clone()
            }
            TokenKind::String | TokenKind::Number => String::from("(literal)"),
            TokenKind::End => {
                if self.pos < self.tokens.len() {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenKind {
                            token: token.kind.to_string(),
                        },
                        token.position,
                    ));
                }
                String::from("(end)")
            }
        };

        Ok(SymbolToken { id, token })
    }

    fn end_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.position)
            .unwrap_or_else(Position::start)
    }

    /// Parses the whole token stream as a program.
    pub fn parse_program(mut self) -> Result<Statements, Error> {
        debug!(tokens = self.tokens.len(), "parsing program");
        self.advance()?;
        let statements = parse_stmts(&mut self)?;
        self.expect("(end)")?;
        debug!(statements = statements.len(), "parsed program");
        Ok(statements)
    }

    /// Parses the whole token stream as a single expression.
    pub fn parse_single_expression(mut self) -> Result<Node, Error> {
        debug!(tokens = self.tokens.len(), "parsing expression");
        self.advance()?;
        let expression = parse_expr(&mut self, BindingPower::DEFAULT)?;
        self.expect("(end)")?;
        Ok(expression)
    }
}

/// Parses a token stream into the program's statements.
pub fn parse(tokens: Vec<Token>) -> Result<Statements, Error> {
    Parser::new(tokens).parse_program()
}

/// Parses a token stream holding exactly one expression.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Node, Error> {
    Parser::new(tokens).parse_single_expression()
}

