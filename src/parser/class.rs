//! Class-level grammar routines: program, classes, members and methods.

use crate::{
    ast::ast::{
        Class, Classes, Constructor, InstanceField, InstanceMethod, Member, Members, MethodBody, Params, Program,
        RestOfMethod, StaticField, StaticMethod,
    },
    errors::errors::Error,
    lexer::{stream::TokenSource, tokens::SymbolClass},
    MK_CHAIN,
};

use super::{checks::expect_kind, expr::parse_expression, parser::Parser, stmt::parse_block};

pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Result<Program, Error> {
    log::trace!("parsing <program>");
    let classes = parse_classes(parser)?;
    parser.expect(SymbolClass::Eof, "program")?;

    Ok(Program { classes })
}

pub fn parse_classes<S: TokenSource>(parser: &mut Parser<S>) -> Result<Classes, Error> {
    log::trace!("parsing <classes>");
    let first = parse_class(parser)?;

    let mut rest = Vec::new();
    while !parser.peek().is_kind(SymbolClass::Eof) {
        rest.push(parse_class(parser)?);
    }

    Ok(MK_CHAIN!(Classes, first, first, rest))
}

pub fn parse_class<S: TokenSource>(parser: &mut Parser<S>) -> Result<Class, Error> {
    log::trace!("parsing <class>");
    parser.expect(SymbolClass::Class, "class")?;
    let name = parser.expect(SymbolClass::ClassName, "class")?;
    parser.expect_single("{", "class")?;

    let members = parse_members(parser)?;

    parser.expect_single("}", "class")?;

    Ok(Class {
        name: name.detail,
        members,
    })
}

pub fn parse_members<S: TokenSource>(parser: &mut Parser<S>) -> Result<Members, Error> {
    log::trace!("parsing <members>");
    let first = parse_member(parser)?;

    let mut rest = Vec::new();
    while !parser.peek().is_single("}") {
        rest.push(parse_member(parser)?);
    }

    Ok(MK_CHAIN!(Members, first, first, rest))
}

/// Picks one of the five member alternatives.
///
/// Up to three tokens are read to decide and all of them are pushed back,
/// so the chosen routine re-reads its production from the start.
pub fn parse_member<S: TokenSource>(parser: &mut Parser<S>) -> Result<Member, Error> {
    log::trace!("parsing <member>");
    let token = parser.next_token();

    match token.kind {
        SymbolClass::Static => {
            let name = expect_kind(parser.next_token(), SymbolClass::Name, "member")?;
            let lookahead = parser.next_token();
            let is_method = lookahead.is_single("(");

            parser.push_back(lookahead);
            parser.push_back(name);
            parser.push_back(token);

            if is_method {
                Ok(Member::StaticMethod(parse_static_method(parser)?))
            } else {
                Ok(Member::StaticField(parse_static_field(parser)?))
            }
        }
        SymbolClass::Name => {
            let lookahead = parser.next_token();
            let is_method = lookahead.is_single("(");

            parser.push_back(lookahead);
            parser.push_back(token);

            if is_method {
                Ok(Member::InstanceMethod(parse_instance_method(parser)?))
            } else {
                Ok(Member::InstanceField(parse_instance_field(parser)?))
            }
        }
        SymbolClass::ClassName => {
            parser.push_back(token);
            Ok(Member::Constructor(parse_constructor(parser)?))
        }
        _ => Err(Error::unexpected_alternative(
            "member",
            "`static`, a name or a class name",
            &token,
        )),
    }
}

pub fn parse_static_field<S: TokenSource>(parser: &mut Parser<S>) -> Result<StaticField, Error> {
    log::trace!("parsing <staticField>");
    parser.expect(SymbolClass::Static, "staticField")?;
    let name = parser.expect(SymbolClass::Name, "staticField")?;

    let token = parser.next_token();
    let initializer = if token.is_single("=") {
        Some(parse_expression(parser)?)
    } else {
        parser.push_back(token);
        None
    };

    Ok(StaticField {
        name: name.detail,
        initializer,
    })
}

pub fn parse_static_method<S: TokenSource>(parser: &mut Parser<S>) -> Result<StaticMethod, Error> {
    log::trace!("parsing <staticMethod>");
    parser.expect(SymbolClass::Static, "staticMethod")?;
    let name = parser.expect(SymbolClass::Name, "staticMethod")?;
    let rest = parse_rest_of_method(parser)?;

    Ok(StaticMethod {
        name: name.detail,
        rest,
    })
}

pub fn parse_instance_field<S: TokenSource>(parser: &mut Parser<S>) -> Result<InstanceField, Error> {
    log::trace!("parsing <instanceField>");
    let name = parser.expect(SymbolClass::Name, "instanceField")?;

    Ok(InstanceField { name: name.detail })
}

pub fn parse_instance_method<S: TokenSource>(parser: &mut Parser<S>) -> Result<InstanceMethod, Error> {
    log::trace!("parsing <instanceMethod>");
    let name = parser.expect(SymbolClass::Name, "instanceMethod")?;
    let rest = parse_rest_of_method(parser)?;

    Ok(InstanceMethod {
        name: name.detail,
        rest,
    })
}

pub fn parse_constructor<S: TokenSource>(parser: &mut Parser<S>) -> Result<Constructor, Error> {
    log::trace!("parsing <constructor>");
    let name = parser.expect(SymbolClass::ClassName, "constructor")?;
    let rest = parse_rest_of_method(parser)?;

    Ok(Constructor {
        name: name.detail,
        rest,
    })
}

pub fn parse_rest_of_method<S: TokenSource>(parser: &mut Parser<S>) -> Result<RestOfMethod, Error> {
    log::trace!("parsing <restOfMethod>");
    parser.expect_single("(", "restOfMethod")?;

    let params = if parser.peek().is_single(")") {
        None
    } else {
        Some(parse_params(parser)?)
    };

    parser.expect_single(")", "restOfMethod")?;
    let body = parse_method_body(parser)?;

    Ok(RestOfMethod { params, body })
}

/// Parameter names up to, not including, the closing `)`.
pub fn parse_params<S: TokenSource>(parser: &mut Parser<S>) -> Result<Params, Error> {
    log::trace!("parsing <params>");
    let first = parser.expect(SymbolClass::Name, "params")?.detail;

    let mut rest = Vec::new();
    while parser.peek().is_single(",") {
        parser.next_token();
        rest.push(parser.expect(SymbolClass::Name, "params")?.detail);
    }

    Ok(MK_CHAIN!(Params, name, first, rest))
}

pub fn parse_method_body<S: TokenSource>(parser: &mut Parser<S>) -> Result<MethodBody, Error> {
    log::trace!("parsing <methodBody>");
    let statements = parse_block(parser, "methodBody")?;

    Ok(MethodBody { statements })
}
