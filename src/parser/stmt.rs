use crate::{
    ast::statements::{
        Assignment, IfStatement, LoopBody, ReturnStatement, Rhs, Statement, Statements, WhileStatement,
    },
    errors::errors::Error,
    lexer::{stream::TokenSource, tokens::SymbolClass},
    MK_CHAIN,
};

use super::{
    expr::{parse_expression, parse_new_object},
    parser::Parser,
};

/// `"{" [statements] "}"`, shared by method and loop bodies.
///
/// Each block counts as one nesting level on top of the statement that owns it.
pub fn parse_block<S: TokenSource>(
    parser: &mut Parser<S>,
    production: &'static str,
) -> Result<Option<Box<Statements>>, Error> {
    parser.nested(production, |parser| {
        parser.expect_single("{", production)?;

        let statements = if parser.peek().is_single("}") {
            None
        } else {
            Some(Box::new(parse_statements(parser)?))
        };

        parser.expect_single("}", production)?;

        Ok(statements)
    })
}

/// Statements up to, not including, the closing `}`.
pub fn parse_statements<S: TokenSource>(parser: &mut Parser<S>) -> Result<Statements, Error> {
    log::trace!("parsing <statements>");
    let first = parse_statement(parser)?;

    let mut rest = Vec::new();
    while !parser.peek().is_single("}") {
        rest.push(parse_statement(parser)?);
    }

    Ok(MK_CHAIN!(Statements, first, first, rest))
}

pub fn parse_statement<S: TokenSource>(parser: &mut Parser<S>) -> Result<Statement, Error> {
    log::trace!("parsing <statement>");
    parser.nested("statement", |parser| {
        let token = parser.next_token();
        let kind = token.kind;

        match kind {
            SymbolClass::While | SymbolClass::If | SymbolClass::Return | SymbolClass::Name | SymbolClass::New => {
                parser.push_back(token);
            }
            _ => {
                return Err(Error::unexpected_alternative(
                    "statement",
                    "`while`, `if`, `return`, `new` or a name",
                    &token,
                ))
            }
        }

        Ok(match kind {
            SymbolClass::While => Statement::While(parse_while_statement(parser)?),
            SymbolClass::If => Statement::If(parse_if_statement(parser)?),
            SymbolClass::Return => Statement::Return(parse_return_statement(parser)?),
            SymbolClass::New => Statement::New(parse_new_object(parser)?),
            _ => Statement::Assignment(parse_assignment(parser)?),
        })
    })
}

pub fn parse_while_statement<S: TokenSource>(parser: &mut Parser<S>) -> Result<WhileStatement, Error> {
    log::trace!("parsing <whileStatement>");
    parser.expect(SymbolClass::While, "whileStatement")?;
    parser.expect_single("(", "whileStatement")?;
    let condition = parse_expression(parser)?;
    parser.expect_single(")", "whileStatement")?;
    let body = parse_loop_body(parser)?;

    Ok(WhileStatement { condition, body })
}

pub fn parse_if_statement<S: TokenSource>(parser: &mut Parser<S>) -> Result<IfStatement, Error> {
    log::trace!("parsing <ifStatement>");
    parser.expect(SymbolClass::If, "ifStatement")?;
    parser.expect_single("(", "ifStatement")?;
    let condition = parse_expression(parser)?;
    parser.expect_single(")", "ifStatement")?;
    let body = parse_loop_body(parser)?;

    Ok(IfStatement { condition, body })
}

pub fn parse_loop_body<S: TokenSource>(parser: &mut Parser<S>) -> Result<LoopBody, Error> {
    log::trace!("parsing <loopBody>");
    let statements = parse_block(parser, "loopBody")?;

    Ok(LoopBody { statements })
}

pub fn parse_return_statement<S: TokenSource>(parser: &mut Parser<S>) -> Result<ReturnStatement, Error> {
    log::trace!("parsing <returnStatement>");
    parser.expect(SymbolClass::Return, "returnStatement")?;
    let value = parse_expression(parser)?;

    Ok(ReturnStatement { value })
}

pub fn parse_assignment<S: TokenSource>(parser: &mut Parser<S>) -> Result<Assignment, Error> {
    log::trace!("parsing <assignment>");
    let name = parser.expect(SymbolClass::Name, "assignment")?;
    parser.expect_single("=", "assignment")?;
    let rhs = parse_rhs(parser)?;

    Ok(Assignment {
        name: name.detail,
        rhs,
    })
}

pub fn parse_rhs<S: TokenSource>(parser: &mut Parser<S>) -> Result<Rhs, Error> {
    log::trace!("parsing <rhs>");
    if parser.peek().is_kind(SymbolClass::New) {
        Ok(Rhs::New(parse_new_object(parser)?))
    } else {
        Ok(Rhs::Expression(parse_expression(parser)?))
    }
}
