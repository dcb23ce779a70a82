/// AST module
/// Contains the parse tree produced by the parser, one type per grammar production
///
/// Submodules:
/// - ast: The `Node` trait and the class-level productions
/// - expressions: Expressions, reference chains and argument lists
/// - statements: Statements and statement bodies
pub mod ast;
pub mod expressions;
pub mod statements;
