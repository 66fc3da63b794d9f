use std::iter::Peekable;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token},
        parser::statement::parse_statement,
    },
};

/// Parsing evaluates declarations and constant expressions as it goes, so a
/// parse can fail with runtime errors as well as syntax errors.
pub type ParseResult<T> = Result<T, Error>;

/// Parses every statement in the token stream.
///
/// Each statement is numbered in `context` before it is parsed. Declarations
/// and bare constant expressions take effect immediately and contribute no
/// node; bare dictionaries are collected unevaluated, in source order.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
/// - `context`: The context declarations are written to.
///
/// # Returns
/// The top-level nodes awaiting the final evaluation pass.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>, context: &mut Context)
                            -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut nodes = Vec::new();

    while tokens.peek().is_some() {
        context.begin_statement();
        if let Some(node) = parse_statement(tokens, context)? {
            nodes.push(node);
        }
    }

    Ok(nodes)
}
