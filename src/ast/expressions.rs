use std::{fmt::Display, iter::successors};

use crate::lexer::tokens::SymbolClass;

use super::ast::{impl_node, Node};

/// Expression
///
/// Either a literal leaf or a reference chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    RefChain(RefChain),
}

/// Literal Kinds
///
/// The six token classes that form a literal leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Str,
    Num,
    Null,
    True,
    False,
    This,
}

impl LiteralKind {
    pub fn from_symbol(kind: SymbolClass) -> Option<LiteralKind> {
        match kind {
            SymbolClass::Str => Some(LiteralKind::Str),
            SymbolClass::Num => Some(LiteralKind::Num),
            SymbolClass::Null => Some(LiteralKind::Null),
            SymbolClass::True => Some(LiteralKind::True),
            SymbolClass::False => Some(LiteralKind::False),
            SymbolClass::This => Some(LiteralKind::This),
            _ => None,
        }
    }
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LiteralKind::Str => "str",
            LiteralKind::Num => "num",
            LiteralKind::Null => "null",
            LiteralKind::True => "true",
            LiteralKind::False => "false",
            LiteralKind::This => "this",
        };
        write!(f, "{}", name)
    }
}

/// Literal value, kept as its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: String,
}

/// `caller ["." refChain]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefChain {
    pub caller: Caller,
    pub rest: Option<Box<RefChain>>,
}

impl RefChain {
    pub fn iter(&self) -> impl Iterator<Item = &Caller> {
        successors(Some(self), |chain| chain.rest.as_deref()).map(|chain| &chain.caller)
    }

    /// Number of segments in the chain.
    pub fn depth(&self) -> usize {
        self.iter().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerKind {
    Name,
    ClassName,
    This,
}

/// One segment of a reference chain, a call when `args` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub kind: CallerKind,
    pub name: String,
    pub args: Option<ArgsPart>,
}

impl Caller {
    pub fn is_call(&self) -> bool {
        self.args.is_some()
    }
}

/// Parenthesised, possibly empty argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsPart {
    pub args: Option<Box<Args>>,
}

impl ArgsPart {
    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        self.args.iter().flat_map(|args| args.iter())
    }
}

/// Right-leaning list of argument expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub first: Expression,
    pub rest: Option<Box<Args>>,
}

impl Args {
    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        successors(Some(self), |args| args.rest.as_deref()).map(|args| &args.first)
    }
}

/// `new ClassName argsPart`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewObject {
    pub class_name: String,
    pub args: ArgsPart,
}

impl_node! {
    Expression => "expression",
    Literal => "literal",
    RefChain => "refChain",
    Caller => "caller",
    ArgsPart => "argsPart",
    Args => "args",
    NewObject => "newObject",
}
