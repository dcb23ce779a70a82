use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::{SymbolClass, Token}, Position};

#[derive(Debug, Clone)]
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

    pub fn unexpected_kind(production: &'static str, expected: SymbolClass, found: &Token) -> Self {
        Error::new(
            ErrorImpl::UnexpectedTokenKind {
                production,
                expected,
                found_kind: found.kind,
                found_text: found.detail.clone(),
            },
            found.span.start.clone(),
        )
    }

    pub fn unexpected_text(
        production: &'static str,
        expected_kind: SymbolClass,
        expected_text: &str,
        found: &Token,
    ) -> Self {
        Error::new(
            ErrorImpl::UnexpectedTokenText {
                production,
                expected_kind,
                expected_text: expected_text.to_string(),
                found_kind: found.kind,
                found_text: found.detail.clone(),
            },
            found.span.start.clone(),
        )
    }

    pub fn unexpected_alternative(production: &'static str, expected: &str, found: &Token) -> Self {
        Error::new(
            ErrorImpl::UnexpectedAlternative {
                production,
                expected: expected.to_string(),
                found_kind: found.kind,
                found_text: found.detail.clone(),
            },
            found.span.start.clone(),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedTokenKind { .. } => "UnexpectedTokenKind",
            ErrorImpl::UnexpectedTokenText { .. } => "UnexpectedTokenText",
            ErrorImpl::UnexpectedAlternative { .. } => "UnexpectedAlternative",
            ErrorImpl::RecursionLimitExceeded { .. } => "RecursionLimitExceeded",
            ErrorImpl::DeadlineExceeded => "DeadlineExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedTokenKind { production, expected, found_kind, found_text } => {
                ErrorTip::Suggestion(format!(
                    "Expected a `{}` while parsing <{}>, found {} `{}`",
                    expected, production, found_kind, found_text
                ))
            }
            ErrorImpl::UnexpectedTokenText { expected_text, found_text, .. } => ErrorTip::Suggestion(format!(
                "Expected `{}` here, found `{}`",
                expected_text, found_text
            )),
            ErrorImpl::UnexpectedAlternative { production, expected, .. } => ErrorTip::Suggestion(format!(
                "A <{}> must start with {}",
                production, expected
            )),
            ErrorImpl::RecursionLimitExceeded { limit } => ErrorTip::Suggestion(format!(
                "Nesting is deeper than the limit of {}",
                limit
            )),
            ErrorImpl::DeadlineExceeded => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected `{expected}`, found `{found_kind}` `{found_text}` in <{production}>")]
    UnexpectedTokenKind {
        production: &'static str,
        expected: SymbolClass,
        found_kind: SymbolClass,
        found_text: String,
    },
    #[error("expected `{expected_kind}` with text `{expected_text}`, found `{found_kind}` `{found_text}` in <{production}>")]
    UnexpectedTokenText {
        production: &'static str,
        expected_kind: SymbolClass,
        expected_text: String,
        found_kind: SymbolClass,
        found_text: String,
    },
    #[error("expected {expected}, found `{found_kind}` `{found_text}` in <{production}>")]
    UnexpectedAlternative {
        production: &'static str,
        expected: String,
        found_kind: SymbolClass,
        found_text: String,
    },
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: usize },
    #[error("parse deadline exceeded")]
    DeadlineExceeded,
}
