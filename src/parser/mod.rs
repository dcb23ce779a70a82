//! Parser module for building the Frappe parse tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a parse tree, one routine per grammar production:
//!
//! - Class-level productions (program, classes, members, methods)
//! - Statement productions (while, if, return, assignment, new)
//! - Expression productions (literals, reference chains, argument lists)
//! - Token conformance checks used by every routine
//!
//! Alternatives are chosen by reading ahead and pushing the read tokens
//! back onto the token source. The first error aborts the whole parse.

pub mod checks;
pub mod class;
pub mod expr;
pub mod parser;
pub mod stmt;
