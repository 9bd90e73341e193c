#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use parser::parser::{parse, parse_with_config, Parser, ParserConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    /// Offsets past `u32::MAX` are clamped to it.
    pub fn from_offset(offset: usize, file: Arc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text (including its newline) and
/// the offset of `position` within that line. An offset at the very end of the
/// source maps to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character of the final line
    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            Some((line_number - 1, last.to_string(), last.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> main.xl
           |
         1 | let x 5;
           | ------^
    */

    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }

    let position = error.get_position();
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    const SOURCE: &str = "let a = 1;\nlet b = 2;\n    let c 3;\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 28).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "    let c 3;\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x = ", 8).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x = ");
        assert_eq!(line_pos, 8);

        assert!(super::get_line_at_position("abc", 10).is_none());
    }

    #[test]
    fn test_position_from_offset() {
        let file = Arc::new(String::from("main.xl"));

        assert_eq!(Position::from_offset(42, Arc::clone(&file)).0, 42);
        assert_eq!(
            Position::from_offset(u32::MAX as usize, Arc::clone(&file)).0,
            u32::MAX
        );
        assert_eq!(Position::from_offset(usize::MAX, file).0, u32::MAX);
    }

    #[test]
    fn test_format_error_points_at_offset() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assign,
                found: TokenKind::Int,
            },
            Position(32, Arc::new(String::from("main.xl"))),
        );

        let rendered = super::format_error(&error, SOURCE);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Error: UnexpectedToken ("));
        assert_eq!(lines[1], "-> main.xl");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "3 | let c 3;");
        assert_eq!(lines[4], "  | ------^");
    }
}
