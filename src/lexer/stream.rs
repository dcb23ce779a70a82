//! Pushback token stream consumed by the parser.

use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{SymbolClass, Token};

/// Anything the parser can pull tokens from.
///
/// Implementations must hand back pushed-back tokens in LIFO order before
/// drawing anything new, and must keep returning an `eof` token once the
/// input is exhausted.
pub trait TokenSource {
    /// Returns and consumes the next token.
    fn next_token(&mut self) -> Token;
    /// Returns `token` to the front of the stream.
    fn push_back(&mut self, token: Token);
}

/// A `TokenSource` over an already scanned token vector.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    /// Replayed from the top before `tokens` is read again
    pushed_back: Vec<Token>,
    file: Rc<String>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        TokenStream {
            tokens,
            pos: 0,
            pushed_back: Vec::new(),
            file,
        }
    }

    /// Number of tokens currently waiting on the pushback stack.
    pub fn pending(&self) -> usize {
        self.pushed_back.len()
    }

    /// True once every token has been handed out and nothing is pushed back.
    pub fn is_drained(&self) -> bool {
        self.pushed_back.is_empty() && self.pos >= self.tokens.len()
    }

    fn eof(&self) -> Token {
        match self.tokens.last() {
            Some(last) if last.is_kind(SymbolClass::Eof) => last.clone(),
            Some(last) => {
                let end = last.span.end.clone();
                MK_TOKEN!(SymbolClass::Eof, String::from("EOF"), Span { start: end.clone(), end })
            }
            None => {
                let position = Position(0, Rc::clone(&self.file));
                MK_TOKEN!(SymbolClass::Eof, String::from("EOF"), Span { start: position.clone(), end: position })
            }
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if let Some(token) = self.pushed_back.pop() {
            return token;
        }

        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => self.eof(),
        }
    }

    fn push_back(&mut self, token: Token) {
        self.pushed_back.push(token);
    }
}
