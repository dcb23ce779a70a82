use crate::{
    ast::expressions::{Args, ArgsPart, Caller, CallerKind, Expression, Literal, LiteralKind, NewObject, RefChain},
    errors::errors::Error,
    lexer::{stream::TokenSource, tokens::SymbolClass},
    MK_CHAIN,
};

use super::parser::Parser;

pub fn parse_expression<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expression, Error> {
    log::trace!("parsing <expression>");
    parser.nested("expression", |parser| {
        let token = parser.next_token();

        if let Some(kind) = LiteralKind::from_symbol(token.kind) {
            // `this.x` and `this(..)` start a chain, a bare `this` is a literal
            let starts_chain = kind == LiteralKind::This && {
                let next = parser.peek();
                next.is_single(".") || next.is_single("(")
            };
            if !starts_chain {
                return Ok(Expression::Literal(Literal {
                    kind,
                    value: token.detail,
                }));
            }
        }

        match token.kind {
            SymbolClass::Name | SymbolClass::ClassName | SymbolClass::This => {
                parser.push_back(token);
                Ok(Expression::RefChain(parse_ref_chain(parser)?))
            }
            _ => Err(Error::unexpected_alternative(
                "expression",
                "a literal, a name or a class name",
                &token,
            )),
        }
    })
}

pub fn parse_ref_chain<S: TokenSource>(parser: &mut Parser<S>) -> Result<RefChain, Error> {
    log::trace!("parsing <refChain>");
    let first = parse_caller(parser)?;

    let mut rest = Vec::new();
    while parser.peek().is_single(".") {
        parser.next_token();
        rest.push(parse_caller(parser)?);
    }

    Ok(MK_CHAIN!(RefChain, caller, first, rest))
}

/// One chain segment, with its own argument list when followed by `(`.
pub fn parse_caller<S: TokenSource>(parser: &mut Parser<S>) -> Result<Caller, Error> {
    log::trace!("parsing <caller>");
    let token = parser.next_token();

    let kind = match token.kind {
        SymbolClass::Name => CallerKind::Name,
        SymbolClass::ClassName => CallerKind::ClassName,
        SymbolClass::This => CallerKind::This,
        _ => {
            return Err(Error::unexpected_alternative(
                "caller",
                "a name, a class name or `this`",
                &token,
            ))
        }
    };

    let args = if parser.peek().is_single("(") {
        Some(parse_args_part(parser)?)
    } else {
        None
    };

    Ok(Caller {
        kind,
        name: token.detail,
        args,
    })
}

pub fn parse_new_object<S: TokenSource>(parser: &mut Parser<S>) -> Result<NewObject, Error> {
    log::trace!("parsing <newObject>");
    parser.expect(SymbolClass::New, "newObject")?;
    let class_name = parser.expect(SymbolClass::ClassName, "newObject")?;
    let args = parse_args_part(parser)?;

    Ok(NewObject {
        class_name: class_name.detail,
        args,
    })
}

pub fn parse_args_part<S: TokenSource>(parser: &mut Parser<S>) -> Result<ArgsPart, Error> {
    log::trace!("parsing <argsPart>");
    parser.expect_single("(", "argsPart")?;

    let args = if parser.peek().is_single(")") {
        None
    } else {
        Some(Box::new(parse_args(parser)?))
    };

    parser.expect_single(")", "argsPart")?;

    Ok(ArgsPart { args })
}

/// Argument expressions up to, not including, the closing `)`.
pub fn parse_args<S: TokenSource>(parser: &mut Parser<S>) -> Result<Args, Error> {
    log::trace!("parsing <args>");
    let first = parse_expression(parser)?;

    let mut rest = Vec::new();
    while parser.peek().is_single(",") {
        parser.next_token();
        rest.push(parse_expression(parser)?);
    }

    Ok(MK_CHAIN!(Args, first, first, rest))
}
