use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A parse or tokenize failure. The first one aborts the whole pass.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::BadEscape { .. } => "BadEscape",
            ErrorImpl::BadNumber { .. } => "BadNumber",
            ErrorImpl::UndefinedPrefix { .. } => "UndefinedPrefix",
            ErrorImpl::MissingOperator { .. } => "MissingOperator",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::UnexpectedTokenKind { .. } => "UnexpectedTokenKind",
            ErrorImpl::AlreadyDefined { .. } => "AlreadyDefined",
            ErrorImpl::AlreadyReserved { .. } => "AlreadyReserved",
            ErrorImpl::BadLvalue => "BadLvalue",
            ErrorImpl::BadExpressionStatement => "BadExpressionStatement",
            ErrorImpl::UnreachableStatement => "UnreachableStatement",
            ErrorImpl::ExpectedVariableName => "ExpectedVariableName",
            ErrorImpl::ExpectedPropertyName { .. } => "ExpectedPropertyName",
            ErrorImpl::ExpectedNewVariableName { .. } => "ExpectedNewVariableName",
            ErrorImpl::ExpectedParameterName { .. } => "ExpectedParameterName",
            ErrorImpl::BadKey { .. } => "BadKey",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Strings must close on the line they open"))
            }
            ErrorImpl::BadEscape { escape } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}` in string literal",
                escape
            )),
            ErrorImpl::BadNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, names cannot start with a digit",
                token
            )),
            ErrorImpl::UndefinedPrefix { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::MissingOperator { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot continue an expression",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`, did you miss a bracket or semicolon?",
                expected, found
            )),
            ErrorImpl::UnknownOperator { operator } => {
                ErrorTip::Suggestion(format!("`{}` is not an operator of this language", operator))
            }
            ErrorImpl::UnexpectedTokenKind { .. } => ErrorTip::None,
            ErrorImpl::AlreadyDefined { name } => ErrorTip::Suggestion(format!(
                "`{}` is already defined in this scope",
                name
            )),
            ErrorImpl::AlreadyReserved { name } => ErrorTip::Suggestion(format!(
                "`{}` is used as a keyword here and cannot be a variable name",
                name
            )),
            ErrorImpl::BadLvalue => ErrorTip::Suggestion(String::from(
                "Only names, properties and indexed elements can be assigned to",
            )),
            ErrorImpl::BadExpressionStatement => ErrorTip::Suggestion(String::from(
                "A statement must be an assignment or a call",
            )),
            ErrorImpl::UnreachableStatement => ErrorTip::Suggestion(String::from(
                "`break` and `return` must be the last statement of their block",
            )),
            ErrorImpl::ExpectedVariableName => ErrorTip::Suggestion(String::from(
                "Only names, functions, properties, elements and call results can be called",
            )),
            ErrorImpl::ExpectedPropertyName { .. } => {
                ErrorTip::Suggestion(String::from("`.` must be followed by a property name"))
            }
            ErrorImpl::ExpectedNewVariableName { .. } => {
                ErrorTip::Suggestion(String::from("`var` must be followed by a name"))
            }
            ErrorImpl::ExpectedParameterName { .. } => {
                ErrorTip::Suggestion(String::from("Parameters must be plain names"))
            }
            ErrorImpl::BadKey { .. } => ErrorTip::Suggestion(String::from(
                "Object keys must be names, strings or numbers",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Tokenizer
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("bad escape sequence: {escape:?}")]
    BadEscape { escape: String },
    #[error("bad number: {token:?}")]
    BadNumber { token: String },

    // Parser
    #[error("undefined: {token:?}")]
    UndefinedPrefix { token: String },
    #[error("missing operator: {token:?}")]
    MissingOperator { token: String },
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("unknown operator: {operator:?}")]
    UnknownOperator { operator: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedTokenKind { token: String },
    #[error("already defined: {name:?}")]
    AlreadyDefined { name: String },
    #[error("already reserved: {name:?}")]
    AlreadyReserved { name: String },
    #[error("bad lvalue")]
    BadLvalue,
    #[error("bad expression statement")]
    BadExpressionStatement,
    #[error("unreachable statement")]
    UnreachableStatement,
    #[error("expected a variable name")]
    ExpectedVariableName,
    #[error("expected a property name, found {found:?}")]
    ExpectedPropertyName { found: String },
    #[error("expected a new variable name, found {found:?}")]
    ExpectedNewVariableName { found: String },
    #[error("expected a parameter name, found {found:?}")]
    ExpectedParameterName { found: String },
    #[error("bad key: {found:?}")]
    BadKey { found: String },
}
