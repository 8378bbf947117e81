//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Names and keywords
//! - Numeric literals (integers, fractions, exponents)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments and positions
//! - Error cases

use super::{
    lexer::{tokenize, OperatorChars},
    tokens::{Token, TokenKind},
};
use crate::{errors::errors::ErrorImpl, Position};

fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source, &OperatorChars::default())
        .unwrap()
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

fn values(source: &str) -> Vec<String> {
    lex(source).into_iter().map(|(_, value)| value).collect()
}

#[test]
fn test_tokenize_names() {
    let tokens = lex("foo bar baz_123 _underscore var if");

    for (kind, _) in &tokens[..6] {
        assert_eq!(*kind, TokenKind::Name);
    }
    assert_eq!(tokens[2].1, "baz_123");
    assert_eq!(tokens[3].1, "_underscore");
    assert_eq!(tokens[6].0, TokenKind::End);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 0 1e3 2.5E-2");

    assert!(tokens[..5].iter().all(|(kind, _)| *kind == TokenKind::Number));
    assert_eq!(values("42 3.14 0 1e3 2.5E-2")[..5], ["42", "3.14", "0", "1e3", "2.5E-2"]);
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex(r#""hello" 'world' "multiple words""#);

    assert_eq!(tokens[0], (TokenKind::String, "hello".to_string()));
    assert_eq!(tokens[1], (TokenKind::String, "world".to_string()));
    assert_eq!(tokens[2], (TokenKind::String, "multiple words".to_string()));
    assert_eq!(tokens[3].0, TokenKind::End);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = lex(r#""a\nb\t\"q\" \\ \u0041 it\'s""#);

    assert_eq!(tokens[0].1, "a\nb\t\"q\" \\ \u{0041} it's");
}

#[test]
fn test_tokenize_other_quote_inside_string() {
    let tokens = lex(r#"'say "hi"'"#);

    assert_eq!(tokens[0].1, "say \"hi\"");
}

#[test]
fn test_tokenize_operators_maximal_munch() {
    assert_eq!(
        values("a === b !== c <= d += e && f || g"),
        ["a", "===", "b", "!==", "c", "<=", "d", "+=", "e", "&&", "f", "||", "g", "(end)"]
    );
}

#[test]
fn test_tokenize_punctuation_is_single_character() {
    let tokens = lex("f(a[0]).b{}:;,?");
    let expected = [
        "f", "(", "a", "[", "0", "]", ")", ".", "b", "{", "}", ":", ";", ",", "?", "(end)",
    ];

    assert_eq!(tokens.iter().map(|(_, v)| v.as_str()).collect::<Vec<_>>(), expected);
    assert_eq!(tokens[1].0, TokenKind::Operator);
    assert_eq!(tokens[7].0, TokenKind::Operator);
}

#[test]
fn test_suffix_characters_never_start_a_second_operator() {
    // `=` is both a prefix and a suffix character, so `=-` munches only `=`.
    assert_eq!(values("a=-1"), ["a", "=", "-", "1", "(end)"]);
    assert_eq!(values("a-=1"), ["a", "-=", "1", "(end)"]);
}

#[test]
fn test_custom_operator_chars() {
    let chars = OperatorChars::new("+", "");
    let tokens = tokenize("a ++ b", &chars).unwrap();

    assert_eq!(tokens[1].value, "+");
    assert_eq!(tokens[2].value, "+");
}

#[test]
fn test_tokenize_comments() {
    let source = "a = 1; // the answer\nb = 2;";

    assert_eq!(values(source), ["a", "=", "1", ";", "b", "=", "2", ";", "(end)"]);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("var x;\n  x = 'é';\n", &OperatorChars::default()).unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[3].position, Position::new(2, 3));
    assert_eq!(tokens[5].position, Position::new(2, 7));
    assert_eq!(tokens[6].position, Position::new(2, 10));
    assert_eq!(tokens[7].kind, TokenKind::End);
    assert_eq!(tokens[7].position, Position::new(3, 1));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("");

    assert_eq!(tokens, vec![(TokenKind::End, "(end)".to_string())]);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("x = \"abc\n\";", &OperatorChars::default()).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(*error.get_position(), Position::new(1, 5));
}

#[test]
fn test_bad_escape() {
    let error = tokenize(r#""\q""#, &OperatorChars::default()).unwrap_err();

    assert_eq!(error.get_error_name(), "BadEscape");
}

#[test]
fn test_bad_number() {
    let error = tokenize("x = 12abc;", &OperatorChars::default()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::BadNumber {
            token: "12abc".to_string()
        }
    );
}

#[test]
fn test_unrecognised_control_character() {
    let error = tokenize("a \u{7} b", &OperatorChars::default()).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(*error.get_position(), Position::new(1, 3));
}

#[test]
fn test_unknown_printable_character_is_an_operator_token() {
    let tokens = lex("a @ b");

    assert_eq!(tokens[1], (TokenKind::Operator, "@".to_string()));
}

#[test]
fn test_token_lines_are_aligned() {
    let name = Token::new(TokenKind::Name, "total", Position::new(3, 5));
    let string = Token::new(TokenKind::String, "a\n", Position::new(12, 10));

    assert_eq!(name.to_string(), "    3:5 name     total");
    assert_eq!(string.to_string(), "  12:10 string   \"a\\n\"");
}
