//! Integration tests for end-to-end parsing.
//!
//! These tests run complete Frappe programs through tokenization and
//! parsing using only the public API, and check the resulting tree or
//! the rendered diagnostic.

use std::rc::Rc;

use frappe::{
    ast::{
        ast::{Member, Program},
        expressions::Expression,
        statements::{Rhs, Statement},
    },
    errors::errors::{Error, ErrorImpl},
    format_error, get_line_at_position,
    lexer::{lexer::tokenize, stream::TokenStream, tokens::SymbolClass},
    parser::parser::{parse, parse_with, ParserOptions},
};

const COUNTER: &str = include_str!("programs/counter.frappe");
const LINKED_LIST: &str = include_str!("programs/linked_list.frappe");
const MISSING_PAREN: &str = include_str!("programs/missing_paren.frappe");

fn parse_file(source: &str, file: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    let (_, result) = parse(tokens, Rc::new(file.to_string()));
    result
}

#[test]
fn test_parse_counter_program() {
    let program = parse_file(COUNTER, "counter.frappe").unwrap();

    let classes: Vec<&str> = program.classes.iter().map(|class| class.name.as_str()).collect();
    assert_eq!(classes, vec!["Counter", "Main"]);

    let counter = program.classes.iter().next().unwrap();
    let members: Vec<(&str, &str)> = counter
        .members
        .iter()
        .map(|member| (member.child().label(), member.name()))
        .collect();
    assert_eq!(
        members,
        vec![
            ("staticField", "created"),
            ("instanceField", "count"),
            ("instanceField", "step"),
            ("constructor", "Counter"),
            ("instanceMethod", "next"),
            ("instanceMethod", "reset"),
        ]
    );
}

#[test]
fn test_parse_counter_main_body() {
    let program = parse_file(COUNTER, "counter.frappe").unwrap();
    let main = program.classes.iter().nth(1).unwrap();

    let method = match &main.members.first {
        Member::StaticMethod(method) => method,
        other => panic!("Expected a static method, found {:?}", other),
    };
    assert_eq!(method.name, "main");
    assert!(method.rest.params.is_none());

    let labels: Vec<&str> = method
        .rest
        .body
        .statements
        .as_ref()
        .unwrap()
        .iter()
        .map(|statement| statement.child().label())
        .collect();
    assert_eq!(labels, vec!["assignment", "whileStatement", "ifStatement", "returnStatement"]);
}

#[test]
fn test_parse_linked_list_program() {
    let program = parse_file(LINKED_LIST, "linked_list.frappe").unwrap();
    let list = program.classes.iter().nth(1).unwrap();
    assert_eq!(list.name, "List");

    let push = list
        .members
        .iter()
        .find(|member| member.name() == "push")
        .unwrap();
    let statements: Vec<Statement> = match push {
        Member::InstanceMethod(method) => method.rest.body.statements.as_ref().unwrap().iter().cloned().collect(),
        other => panic!("Expected an instance method, found {:?}", other),
    };

    assert!(matches!(&statements[0], Statement::Assignment(assignment) if matches!(assignment.rhs, Rhs::New(_))));
    match &statements[1] {
        Statement::Assignment(assignment) => match &assignment.rhs {
            Rhs::Expression(Expression::RefChain(chain)) => {
                assert_eq!(chain.depth(), 2);
                assert_eq!(chain.caller.name, "this");
                let call = &chain.rest.as_deref().unwrap().caller;
                assert_eq!(call.name, "link");
                assert_eq!(call.args.as_ref().unwrap().iter().count(), 2);
            }
            other => panic!("Expected a reference chain, found {:?}", other),
        },
        other => panic!("Expected an assignment, found {:?}", other),
    }
}

#[test]
fn test_parse_is_repeatable_across_runs() {
    let first = parse_file(LINKED_LIST, "linked_list.frappe").unwrap();
    let second = parse_file(LINKED_LIST, "linked_list.frappe").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parse_drains_stream_for_whole_file() {
    let tokens = tokenize(COUNTER.to_string(), Some("counter.frappe".to_string())).unwrap();
    let stream = TokenStream::new(tokens, Rc::new("counter.frappe".to_string()));
    let (parser, result) = parse_with(stream, ParserOptions::default());

    assert!(result.is_ok());
    assert!(parser.source().is_drained());
    assert_eq!(parser.source().pending(), 0);
}

#[test]
fn test_missing_paren_reports_while_statement() {
    let error = parse_file(MISSING_PAREN, "missing_paren.frappe").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedTokenText {
            production: "whileStatement",
            expected_kind: SymbolClass::Single,
            expected_text: ")".to_string(),
            found_kind: SymbolClass::Single,
            found_text: "{".to_string(),
        }
    );

    let (line, text, _) = get_line_at_position(MISSING_PAREN, error.get_position().0).unwrap();
    assert_eq!(line, 3);
    assert_eq!(text.trim(), "while (ready {");
}

#[test]
fn test_missing_paren_rendered_diagnostic() {
    let error = parse_file(MISSING_PAREN, "missing_paren.frappe").unwrap_err();
    let rendered = format_error(&error, MISSING_PAREN, "missing_paren.frappe");

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Error: UnexpectedTokenText (Expected `)` here, found `{`)");
    assert_eq!(lines[1], "-> missing_paren.frappe");
    assert_eq!(lines[3], "3 | while (ready {");
    assert_eq!(lines[4], "  | -------------^");
}

#[test]
fn test_scan_error_surfaces_through_parse_file() {
    let error = parse_file("class A { x = # }", "hash.frappe").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 14);
}

#[test]
fn test_error_at_end_of_input_renders_without_snippet() {
    let source = "class A { x";
    let error = parse_file(source, "short.frappe").unwrap_err();
    let rendered = format_error(&error, source, "short.frappe");

    assert!(rendered.starts_with("Error: UnexpectedAlternative"));
    assert!(rendered.contains("found `eof` `EOF` in <member>"));
}
