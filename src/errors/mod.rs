//! Error types and error handling for the parser.
//!
//! This module defines the error types used by the scanner and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a parse can fail
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
