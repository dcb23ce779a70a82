//! Lexical analysis module for the parser.
//!
//! This module contains the scanner that converts Frappe source code
//! into a stream of classified tokens, and the pushback stream the
//! parser reads them through. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Classification of keywords, names, class names, literals and punctuation
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//! - LIFO token pushback for parser lookahead

pub mod lexer;
pub mod stream;
pub mod tokens;
