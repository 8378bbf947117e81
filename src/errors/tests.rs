//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "\u{7}".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: ";".to_string(),
            found: "}".to_string(),
        },
        Position::new(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::AlreadyDefined {
            name: "x".to_string(),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.to_string(), "already defined: \"x\" at 3:7");
}

#[test]
fn test_error_kind_is_exposed() {
    let error = Error::new(ErrorImpl::BadLvalue, Position::start());

    assert_eq!(error.get_kind(), &ErrorImpl::BadLvalue);
    assert_eq!(error.get_error_name(), "BadLvalue");
}

#[test]
fn test_parser_error_names() {
    let cases = [
        (ErrorImpl::UndefinedPrefix { token: "else".to_string() }, "UndefinedPrefix"),
        (ErrorImpl::MissingOperator { token: "x".to_string() }, "MissingOperator"),
        (ErrorImpl::UnknownOperator { operator: "%".to_string() }, "UnknownOperator"),
        (ErrorImpl::UnexpectedTokenKind { token: "(end)".to_string() }, "UnexpectedTokenKind"),
        (ErrorImpl::AlreadyReserved { name: "if".to_string() }, "AlreadyReserved"),
        (ErrorImpl::BadExpressionStatement, "BadExpressionStatement"),
        (ErrorImpl::UnreachableStatement, "UnreachableStatement"),
        (ErrorImpl::ExpectedVariableName, "ExpectedVariableName"),
        (ErrorImpl::ExpectedPropertyName { found: "1".to_string() }, "ExpectedPropertyName"),
        (ErrorImpl::BadKey { found: "[".to_string() }, "BadKey"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, Position::start()).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "\u{7}".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: ")".to_string(),
            found: ";".to_string(),
        },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("Expected `)` but found `;`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
