//! Error types and error handling for the parser.
//!
//! This module defines the single error type shared by the tokenizer and
//! the parser. It includes:
//!
//! - Error structures with source position information
//! - One variant per failure kind, tokenizer and parser alike
//! - Stable error names and human-facing tips for the CLI

pub mod errors;

#[cfg(test)]
mod tests;
