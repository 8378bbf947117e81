use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"^\s+").expect("valid whitespace pattern");
    static ref COMMENT_REGEX: Regex = Regex::new(r"^//[^\n]*").expect("valid comment pattern");
    static ref NAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").expect("valid name pattern");
    static ref NUMBER_REGEX: Regex =
        Regex::new(r"^[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?").expect("valid number pattern");
    static ref NUMBER_TAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_.]*").expect("valid number tail pattern");
    static ref STRING_REGEX: Regex = Regex::new(r#"^["']"#).expect("valid string pattern");
    static ref SINGLE_CHAR_REGEX: Regex =
        Regex::new(r"^[^\s\p{Cc}]").expect("valid single character pattern");
}

/// The characters that may start a multi-character operator, and the ones
/// that may continue it. An operator token is one `prefix` character
/// followed by as many `suffix` characters as are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorChars {
    pub prefix: String,
    pub suffix: String,
}

impl OperatorChars {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        OperatorChars {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    fn operator_regex(&self) -> Option<Regex> {
        if self.prefix.is_empty() {
            return None;
        }

        let suffix = if self.suffix.is_empty() {
            String::new()
        } else {
            format!("[{}]*", regex::escape(&self.suffix))
        };

        Regex::new(&format!("^[{}]{}", regex::escape(&self.prefix), suffix)).ok()
    }
}

impl Default for OperatorChars {
    fn default() -> Self {
        OperatorChars::new("=<>!+-*&|/%^", "=<>&|")
    }
}

pub type RegexHandler = fn(&mut Lexer<'_>, &Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer<'src> {
    tokens: Vec<Token>,
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves forward `n` bytes, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn patterns(chars: &OperatorChars) -> Vec<RegexPattern> {
    let mut patterns = vec![
        RegexPattern { regex: WHITESPACE_REGEX.clone(), handler: skip_handler },
        RegexPattern { regex: COMMENT_REGEX.clone(), handler: skip_handler },
        RegexPattern { regex: NAME_REGEX.clone(), handler: MK_DEFAULT_HANDLER!(TokenKind::Name) },
        RegexPattern { regex: NUMBER_REGEX.clone(), handler: number_handler },
        RegexPattern { regex: STRING_REGEX.clone(), handler: string_handler },
    ];

    if let Some(regex) = chars.operator_regex() {
        patterns.push(RegexPattern { regex, handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) });
    }

    patterns.push(RegexPattern {
        regex: SINGLE_CHAR_REGEX.clone(),
        handler: MK_DEFAULT_HANDLER!(TokenKind::Operator),
    });

    patterns
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex).len();
    lexer.advance_n(matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let position = lexer.position();
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());

    // `12abc` and `1.2.3` are one malformed number, not a number and a name.
    if lexer
        .remainder()
        .starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '.')
    {
        let tail = lexer.matched(&NUMBER_TAIL_REGEX);
        return Err(Error::new(
            ErrorImpl::BadNumber { token: format!("{}{}", matched, tail) },
            position,
        ));
    }

    lexer.push(MK_TOKEN!(TokenKind::Number, matched, position));
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let position = lexer.position();
    let remainder = lexer.remainder();

    let mut chars = remainder.char_indices();
    let Some((_, quote)) = chars.next() else {
        return Err(Error::new(ErrorImpl::UnterminatedString, position));
    };

    let mut result = String::new();
    let mut consumed = None;

    while let Some((index, ch)) = chars.next() {
        match ch {
            c if c == quote => {
                consumed = Some(index + c.len_utf8());
                break;
            }
            '\n' | '\r' => break,
            '\\' => {
                let Some((_, escape)) = chars.next() else {
                    break;
                };
                match escape {
                    'n' => result.push('\n'),
                    't' => result.push('\t'),
                    'r' => result.push('\r'),
                    'b' => result.push('\u{8}'),
                    'f' => result.push('\u{c}'),
                    '0' => result.push('\0'),
                    '\\' | '/' | '"' | '\'' => result.push(escape),
                    'u' => {
                        let hex: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                        let decoded = u32::from_str_radix(&hex, 16)
                            .ok()
                            .filter(|_| hex.len() == 4)
                            .and_then(char::from_u32);
                        match decoded {
                            Some(c) => result.push(c),
                            None => {
                                return Err(Error::new(
                                    ErrorImpl::BadEscape { escape: format!("u{}", hex) },
                                    position,
                                ))
                            }
                        }
                    }
                    other => {
                        return Err(Error::new(
                            ErrorImpl::BadEscape { escape: other.to_string() },
                            position,
                        ))
                    }
                }
            }
            c => result.push(c),
        }
    }

    let Some(consumed) = consumed else {
        return Err(Error::new(ErrorImpl::UnterminatedString, position));
    };

    lexer.advance_n(consumed);
    lexer.push(MK_TOKEN!(TokenKind::String, result, position));
    Ok(())
}

/// Splits `source` into tokens, ending with a single `End` token.
pub fn tokenize(source: &str, chars: &OperatorChars) -> Result<Vec<Token>, Error> {
    debug!(bytes = source.len(), "tokenizing");

    let patterns = patterns(chars);
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
            }
        }
    }

    let end = lex.position();
    lex.push(Token::end(end));

    debug!(tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
