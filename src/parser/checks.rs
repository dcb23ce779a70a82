//! Token conformance checks.
//!
//! Both checks take a token the caller has already read from the stream and
//! hand it back unchanged on success. Neither touches the stream.

use crate::{
    errors::errors::Error,
    lexer::tokens::{SymbolClass, Token},
};

/// Checks that `token` is of class `kind`.
pub fn expect_kind(token: Token, kind: SymbolClass, production: &'static str) -> Result<Token, Error> {
    if token.is_kind(kind) {
        Ok(token)
    } else {
        Err(Error::unexpected_kind(production, kind, &token))
    }
}

/// Checks that `token` is of class `kind` and reads exactly `text`.
pub fn expect_kind_and_text(
    token: Token,
    kind: SymbolClass,
    text: &str,
    production: &'static str,
) -> Result<Token, Error> {
    if token.matches(kind, text) {
        Ok(token)
    } else {
        Err(Error::unexpected_text(production, kind, text, &token))
    }
}
