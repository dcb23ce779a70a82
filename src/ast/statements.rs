use std::iter::successors;

use super::{
    ast::{impl_node, Node},
    expressions::{Expression, NewObject},
};

/// Right-leaning list of statements in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub first: Statement,
    pub rest: Option<Box<Statements>>,
}

impl Statements {
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        successors(Some(self), |statements| statements.rest.as_deref()).map(|statements| &statements.first)
    }
}

/// Statement
///
/// One statement alternative, chosen by its leading token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    While(WhileStatement),
    If(IfStatement),
    Return(ReturnStatement),
    Assignment(Assignment),
    New(NewObject),
}

impl Statement {
    pub fn child(&self) -> &dyn Node {
        match self {
            Statement::While(statement) => statement,
            Statement::If(statement) => statement,
            Statement::Return(statement) => statement,
            Statement::Assignment(assignment) => assignment,
            Statement::New(new_object) => new_object,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: LoopBody,
}

/// `if` without an `else` branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    pub condition: Expression,
    pub body: LoopBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Expression,
}

/// `name = rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub rhs: Rhs,
}

/// Brace-delimited body of a `while` or `if`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopBody {
    pub statements: Option<Box<Statements>>,
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rhs {
    Expression(Expression),
    New(NewObject),
}

impl_node! {
    Statements => "statements",
    Statement => "statement",
    WhileStatement => "whileStatement",
    IfStatement => "ifStatement",
    ReturnStatement => "returnStatement",
    Assignment => "assignment",
    LoopBody => "loopBody",
    Rhs => "rhs",
}
