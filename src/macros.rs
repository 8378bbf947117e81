//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched
//!   text as a token of one kind
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a lexer handler that pushes the text matched by the pattern's
/// regex as a token of the given kind and advances past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: NAME_REGEX.clone(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Name),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer, regex| {
            let matched = lexer.matched(regex);
            let position = lexer.position();
            lexer.advance_n(matched.len());
            lexer.push(MK_TOKEN!($kind, matched, position));
            Ok(())
        }
    };
}
