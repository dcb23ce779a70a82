use std::{fmt::Debug, iter::successors};

use super::{expressions::Expression, statements::Statements};

/// Node Trait
///
/// Shared behaviour of every parse tree node.
pub trait Node: Debug {
    /// Returns the name of the grammar production the node represents.
    fn label(&self) -> &'static str;
}

/// Implements `Node` for a list of node types with their production labels.
macro_rules! impl_node {
    ($($node:ty => $label:literal),* $(,)?) => {
        $(
            impl Node for $node {
                fn label(&self) -> &'static str {
                    $label
                }
            }
        )*
    };
}

pub(crate) use impl_node;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub classes: Classes,
}

/// Right-leaning list of classes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classes {
    pub first: Class,
    pub rest: Option<Box<Classes>>,
}

impl Classes {
    pub fn iter(&self) -> impl Iterator<Item = &Class> {
        successors(Some(self), |classes| classes.rest.as_deref()).map(|classes| &classes.first)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub members: Members,
}

/// Right-leaning list of class members in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Members {
    pub first: Member,
    pub rest: Option<Box<Members>>,
}

impl Members {
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        successors(Some(self), |members| members.rest.as_deref()).map(|members| &members.first)
    }
}

/// Member
///
/// Exactly one of the five member alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    StaticField(StaticField),
    StaticMethod(StaticMethod),
    InstanceField(InstanceField),
    InstanceMethod(InstanceMethod),
    Constructor(Constructor),
}

impl Member {
    /// The node of the alternative this member was parsed as.
    pub fn child(&self) -> &dyn Node {
        match self {
            Member::StaticField(field) => field,
            Member::StaticMethod(method) => method,
            Member::InstanceField(field) => field,
            Member::InstanceMethod(method) => method,
            Member::Constructor(constructor) => constructor,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::StaticField(field) => &field.name,
            Member::StaticMethod(method) => &method.name,
            Member::InstanceField(field) => &field.name,
            Member::InstanceMethod(method) => &method.name,
            Member::Constructor(constructor) => &constructor.name,
        }
    }
}

/// `static` field, optionally initialised by an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticField {
    pub name: String,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMethod {
    pub name: String,
    pub rest: RestOfMethod,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceField {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceMethod {
    pub name: String,
    pub rest: RestOfMethod,
}

/// Constructor, named after its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub name: String,
    pub rest: RestOfMethod,
}

/// Parameter list and body shared by methods and constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestOfMethod {
    pub params: Option<Params>,
    pub body: MethodBody,
}

/// Right-leaning list of parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub name: String,
    pub rest: Option<Box<Params>>,
}

impl Params {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        successors(Some(self), |params| params.rest.as_deref()).map(|params| params.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBody {
    pub statements: Option<Box<Statements>>,
}

impl_node! {
    Program => "program",
    Classes => "classes",
    Class => "class",
    Members => "members",
    Member => "member",
    StaticField => "staticField",
    StaticMethod => "staticMethod",
    InstanceField => "instanceField",
    InstanceMethod => "instanceMethod",
    Constructor => "constructor",
    RestOfMethod => "restOfMethod",
    Params => "params",
    MethodBody => "methodBody",
}
