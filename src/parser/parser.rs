//! Parser implementation for building the parse tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The grammar routines themselves live in `class`, `stmt` and `expr` and
//! take the parser as their first argument.
//!
//! The parser reads tokens through a `TokenSource`, deciding between grammar
//! alternatives by reading ahead and pushing the read tokens back so the
//! chosen routine starts at the first token of its own production.

use std::{rc::Rc, time::Instant};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::{TokenSource, TokenStream},
        tokens::{SymbolClass, Token},
    },
};

use super::{
    checks::{expect_kind, expect_kind_and_text},
    class::parse_program,
};

/// Limits applied while parsing.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Deepest block/statement/expression nesting accepted before giving up.
    ///
    /// The default keeps the deepest accepted input well inside a 2 MiB thread stack.
    pub max_depth: usize,
    /// Point in time after which the parse is abandoned
    pub deadline: Option<Instant>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: 128,
            deadline: None,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// Holds the token source and the current nesting depth. All lookahead
/// state lives in the source's pushback stack.
pub struct Parser<S: TokenSource = TokenStream> {
    /// Where tokens are read from and pushed back to
    source: S,
    options: ParserOptions,
    /// Current block/statement/expression nesting depth
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser reading from `source`.
    pub fn new(source: S, options: ParserOptions) -> Self {
        Parser {
            source,
            options,
            depth: 0,
        }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.source.next_token()
    }

    /// Returns a token to the front of the stream.
    pub fn push_back(&mut self, token: Token) {
        self.source.push_back(token);
    }

    /// Reads the next token and immediately pushes it back.
    pub fn peek(&mut self) -> Token {
        let token = self.next_token();
        self.push_back(token.clone());
        token
    }

    /// Reads the next token and checks its class.
    pub fn expect(&mut self, kind: SymbolClass, production: &'static str) -> Result<Token, Error> {
        expect_kind(self.next_token(), kind, production)
    }

    /// Reads the next token and checks it is the given punctuation.
    pub fn expect_single(&mut self, text: &str, production: &'static str) -> Result<Token, Error> {
        expect_kind_and_text(self.next_token(), SymbolClass::Single, text, production)
    }

    /// Runs `parse_fn` one nesting level deeper, enforcing the depth limit and deadline.
    pub fn nested<T>(
        &mut self,
        production: &'static str,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.depth += 1;

        if self.depth > self.options.max_depth {
            log::debug!("recursion limit hit in <{}> at depth {}", production, self.depth);
            let position = self.peek().span.start;
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded {
                    limit: self.options.max_depth,
                },
                position,
            ));
        }

        if let Some(deadline) = self.options.deadline {
            if Instant::now() >= deadline {
                let position = self.peek().span.start;
                return Err(Error::new(ErrorImpl::DeadlineExceeded, position));
            }
        }

        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

/// Parses a scanned token vector into a parse tree.
///
/// This is the main entry point for parsing. It wraps the tokens in a
/// `TokenStream` and parses with default options.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root Program or the first Error met
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Program, Error>) {
    parse_with(TokenStream::new(tokens, file), ParserOptions::default())
}

/// Parses everything `source` yields, with explicit options.
pub fn parse_with<S: TokenSource>(source: S, options: ParserOptions) -> (Parser<S>, Result<Program, Error>) {
    let mut parser = Parser::new(source, options);

    log::debug!("parse start");
    let program = parse_program(&mut parser);

    match &program {
        Ok(program) => log::debug!("parse finished: {} classes", program.classes.iter().count()),
        Err(error) => log::debug!("parse aborted: {}", error),
    }

    (parser, program)
}
