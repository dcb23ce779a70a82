//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{SymbolClass, Token};
use crate::{Position, Span};
use std::rc::Rc;

fn token(kind: SymbolClass, detail: &str, offset: usize) -> Token {
    let file = Rc::new("test.frappe".to_string());
    Token {
        kind,
        detail: detail.to_string(),
        span: Span {
            start: Position(offset, Rc::clone(&file)),
            end: Position(offset + detail.len(), file),
        },
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.frappe".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position_comes_from_token() {
    let found = token(SymbolClass::Name, "x", 42);
    let error = Error::unexpected_kind("class", SymbolClass::ClassName, &found);

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.frappe");
}

#[test]
fn test_unexpected_kind_error() {
    let found = token(SymbolClass::Name, "a", 6);
    let error = Error::unexpected_kind("class", SymbolClass::ClassName, &found);

    assert_eq!(error.get_error_name(), "UnexpectedTokenKind");
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedTokenKind {
            production: "class",
            expected: SymbolClass::ClassName,
            found_kind: SymbolClass::Name,
            found_text: "a".to_string(),
        }
    );
    assert_eq!(
        error.get_error().to_string(),
        "expected `className`, found `name` `a` in <class>"
    );
}

#[test]
fn test_unexpected_text_error_message() {
    let found = token(SymbolClass::Name, "x", 8);
    let error = Error::unexpected_text("class", SymbolClass::Single, "{", &found);

    assert_eq!(error.get_error_name(), "UnexpectedTokenText");
    assert_eq!(
        error.get_error().to_string(),
        "expected `single` with text `{`, found `name` `x` in <class>"
    );
}

#[test]
fn test_unexpected_alternative_error() {
    let found = token(SymbolClass::Num, "5", 0);
    let error = Error::unexpected_alternative("member", "`static`, a name or a class name", &found);

    assert_eq!(error.get_error_name(), "UnexpectedAlternative");
    assert!(error.to_string().starts_with("expected `static`, a name or a class name, found `num` `5`"));
}

#[test]
fn test_recursion_limit_error() {
    let error = Error::new(
        ErrorImpl::RecursionLimitExceeded { limit: 8 },
        Position(0, Rc::new("test.frappe".to_string())),
    );

    assert_eq!(error.get_error_name(), "RecursionLimitExceeded");
    assert_eq!(error.get_error().to_string(), "recursion limit of 8 exceeded");
}

#[test]
fn test_error_display_includes_location() {
    let found = token(SymbolClass::Eof, "EOF", 17);
    let error = Error::unexpected_kind("class", SymbolClass::ClassName, &found);

    assert_eq!(
        error.to_string(),
        "expected `className`, found `eof` `EOF` in <class> at test.frappe:17"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.frappe".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let found = token(SymbolClass::Single, "}", 3);
    let error = Error::unexpected_text("restOfMethod", SymbolClass::Single, "(", &found);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `(` here, found `}`"),
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
