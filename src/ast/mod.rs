/// AST (Abstract Syntax Tree) module
/// Contains the tree the parser produces
///
/// Submodules:
/// - ast: The node type, its closed set of kinds and the arity tag
/// - statements: The zero-or-more statement sequence
/// - printer: Outline and source renderings of a tree
pub mod ast;
pub mod printer;
pub mod statements;
