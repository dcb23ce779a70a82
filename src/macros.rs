//! Utility macros for the parser crate.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for punctuation
//! - `MK_CHAIN!` - Folds a list of parsed elements into a right-leaning list node

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The SymbolClass
/// * `$detail` - The token's literal text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(SymbolClass::Num, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $detail:expr, $span:expr) => {
        Token {
            kind: $kind,
            detail: $detail,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for single-character punctuation.
///
/// Generates a handler function that pushes a `single` token holding the
/// character and advances the lexer position past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\{").unwrap(),
///     handler: MK_DEFAULT_HANDLER!("{"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let start = lexer.pos;
            let span = lexer.span(start, start + $value.len());
            lexer.push(MK_TOKEN!(SymbolClass::Single, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}

/// Folds a head element and a `Vec` of trailing elements into a right-leaning
/// chain of list nodes, preserving source order.
///
/// The list type must have a field (named by `$field`) holding one element and
/// a `rest: Option<Box<Self>>` field linking to the remaining elements.
///
/// # Example
///
/// ```ignore
/// let members: Members = MK_CHAIN!(Members, first, a, vec![b, c]);
/// ```
#[macro_export]
macro_rules! MK_CHAIN {
    ($list:ident, $field:ident, $head:expr, $tail:expr) => {{
        let mut rest: Option<Box<$list>> = None;
        for item in $tail.into_iter().rev() {
            rest = Some(Box::new($list { $field: item, rest }));
        }
        $list { $field: $head, rest }
    }};
}
