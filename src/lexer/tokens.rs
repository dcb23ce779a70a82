use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, SymbolClass> = {
        let mut map = HashMap::new();
        map.insert("class", SymbolClass::Class);
        map.insert("static", SymbolClass::Static);
        map.insert("while", SymbolClass::While);
        map.insert("if", SymbolClass::If);
        map.insert("return", SymbolClass::Return);
        map.insert("new", SymbolClass::New);
        map.insert("null", SymbolClass::Null);
        map.insert("true", SymbolClass::True);
        map.insert("false", SymbolClass::False);
        map.insert("this", SymbolClass::This);
        map
    };
}

/// The fixed set of token classes produced by the scanner.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolClass {
    // Reserved
    Class,
    Static,
    While,
    If,
    Return,
    New,

    // Literal kinds
    Str,
    Num,
    Null,
    True,
    False,
    This,

    Name,
    ClassName,

    /// Punctuation, the detail holds the character: `{ } ( ) , . = ;`
    Single,

    Eof,
}

impl SymbolClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolClass::Class => "class",
            SymbolClass::Static => "static",
            SymbolClass::While => "while",
            SymbolClass::If => "if",
            SymbolClass::Return => "return",
            SymbolClass::New => "new",
            SymbolClass::Str => "str",
            SymbolClass::Num => "num",
            SymbolClass::Null => "null",
            SymbolClass::True => "true",
            SymbolClass::False => "false",
            SymbolClass::This => "this",
            SymbolClass::Name => "name",
            SymbolClass::ClassName => "className",
            SymbolClass::Single => "single",
            SymbolClass::Eof => "eof",
        }
    }
}

impl Display for SymbolClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: SymbolClass,
    pub detail: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.detail)
    }
}

impl Token {
    pub fn kind(&self) -> SymbolClass {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_kind(&self, kind: SymbolClass) -> bool {
        self.kind == kind
    }

    /// True when both the class and the literal text agree.
    pub fn matches(&self, kind: SymbolClass, detail: &str) -> bool {
        self.kind == kind && self.detail == detail
    }

    pub fn is_single(&self, detail: &str) -> bool {
        self.matches(SymbolClass::Single, detail)
    }
}
