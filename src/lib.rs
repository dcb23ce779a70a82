#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line's text and the offset within
/// the line, or `None` when the offset lies past the end of `content`.
pub fn get_line_at_position(content: &str, pos: usize) -> Option<(usize, String, usize)> {

    let mut start = 0;
    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = "class Counter {\n  count\n  inc() { count = 1 }\n}\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 6).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "class Counter {\n");
        assert_eq!(line_pos, 6);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "  inc() { count = 1 }\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
    }

    #[test]
    fn test_format_error_points_at_token() {
        let source = "class A x { }";
        let tokens = crate::lexer::lexer::tokenize(source.to_string(), Some("a.frappe".to_string())).unwrap();
        let (_, result) = crate::parser::parser::parse(tokens, std::rc::Rc::new("a.frappe".to_string()));
        let rendered = super::format_error(&result.unwrap_err(), source, "a.frappe");

        assert_eq!(
            rendered,
            "Error: UnexpectedTokenText (Expected `{` here, found `x`)\n\
             -> a.frappe\n\
             \x20 |\n\
             1 | class A x { }\n\
             \x20 | --------^\n"
        );
    }

    #[test]
    fn test_format_error_tab_indent_and_multibyte_text() {
        let source = "class A {\n\tf() { s = \"é\" ) }\n}\n";
        let tokens = crate::lexer::lexer::tokenize(source.to_string(), Some("a.frappe".to_string())).unwrap();
        let (_, result) = crate::parser::parser::parse(tokens, std::rc::Rc::new("a.frappe".to_string()));
        let rendered = super::format_error(&result.unwrap_err(), source, "a.frappe");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "2 | f() { s = \"é\" ) }");
        assert_eq!(lines[4], "  | --------------^");
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_position_beyond_u32_range() {
        let offset = u32::MAX as usize + 10;
        let error = crate::errors::errors::Error::new(
            crate::errors::errors::ErrorImpl::DeadlineExceeded,
            super::Position(offset, std::rc::Rc::new("big.frappe".to_string())),
        );

        assert_eq!(error.get_position().0, offset);
        assert!(super::get_line_at_position(SOURCE, offset).is_none());
        assert!(error.to_string().ends_with(&format!("big.frappe:{}", offset)));
    }
}

/// Renders `error` as a caret-marked snippet of `source`.
///
/// ```text
/// Error: UnexpectedTokenText (Expected `{` here, found `x`)
/// -> a.frappe
///   |
/// 1 | class A x { }
///   | --------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    // Errors at end of input have no line to show
    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        out.push_str(&format!("   {}\n", error.get_error()));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Columns are counted in chars, offsets are in bytes
    let column = line_text
        .get(removed_whitespace..line_pos)
        .map(|before| before.chars().count())
        .unwrap_or(0);
    let arrows = column + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Strips leading whitespace, returning the rest and the number of bytes removed.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();

    (trimmed, string.len() - trimmed.len())
}
