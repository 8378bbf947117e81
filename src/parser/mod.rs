//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns a stream of tokens into a tree of [`Node`]s. It uses a
//! Pratt parser (top down operator precedence) for expressions and statement
//! handlers keyed by keyword for everything else:
//!
//! - lookups: The symbol registry and the grammar registered in it
//! - scope: Lexical scopes, declarations and reserved keywords
//! - parser: The token cursor and the entry points
//! - expr: The expression climber and its prefix and infix rules
//! - stmt: Statement rules
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//!
//! [`Node`]: crate::ast::ast::Node

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod scope;
pub mod stmt;
