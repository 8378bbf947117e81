//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into the
//! flat token sequence the parser consumes. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Names, numbers, quoted strings with escapes
//! - Maximal-munch operators built from configurable character sets
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
