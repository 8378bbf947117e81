#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::{
    ast::statements::Statements,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::{tokenize, OperatorChars},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("{}:{}", self.line, self.column))
    }
}

/// Tokenizes `source` with the default operator characters and parses it.
pub fn parse_source(source: &str) -> Result<Statements, Error> {
    let tokens = tokenize(source, &OperatorChars::default())?;
    parse(tokens)
}

/// Returns the text of the 1-based `line` in `source`, without its newline.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }";

        assert_eq!(get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 2), Some("second"));
        assert_eq!(get_line_at_position(source, 3), Some(""));
        assert_eq!(get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(get_line_at_position(source, 5), None);
        assert_eq!(get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_position_honours_width() {
        assert_eq!(format!("{:>7}", Position::new(3, 14)), "   3:14");
        assert_eq!(format!("{:<6}|", Position::start()), "1:1   |");
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "var a;\n  a = #;\n";
        let error = parse_source(source).unwrap_err();
        let rendered = render_error(&error, Path::new("bad.js"), source);

        assert!(rendered.contains("-> bad.js"));
        assert!(rendered.contains("2 | a = #;"));
        assert!(rendered.lines().last().unwrap().ends_with("----^"));
    }
}

/// Renders an error with the offending source line and a caret under the
/// reported column.
///
/// ```text
/// Error: ExpectedToken (Expected `;`)
/// -> final.js
///    |
/// 20 | var a = 1
///    | ---------^
/// ```
pub fn render_error(error: &Error, file: &Path, source: &str) -> String {
    let position = error.get_position();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}\n", file.to_string_lossy(), position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}
