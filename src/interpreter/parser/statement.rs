use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token},
        parser::{
            core::ParseResult,
            expression::parse_constant_expression,
            value::{parse_dictionary, parse_value},
        },
    },
};

/// Parses a single top-level statement.
///
/// A statement may be one of:
/// - a variable declaration, `var <identifier> <value>`,
/// - a bare dictionary, `$[ ... ]`,
/// - a bare constant expression, `?{ <expression> }`.
///
/// Only the dictionary produces a node, and it is returned unevaluated. The
/// declaration stores its evaluated value in `context`. The constant
/// expression is evaluated for its side effects and its result is dropped.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
/// - `context`: The evaluation context.
///
/// # Returns
/// `Some(node)` for a dictionary, `None` otherwise.
///
/// # Errors
/// `UnexpectedToken` if the statement starts with anything else, plus any
/// error from the statement itself.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, context: &mut Context)
                              -> ParseResult<Option<Node>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, position)) = tokens.peek().copied() else {
        return Ok(None);
    };

    match token {
        Token::Var => {
            tokens.next();
            parse_variable_declaration(tokens, context, position.line)?;
            Ok(None)
        },
        Token::DictOpen => parse_dictionary(tokens, context).map(Some),
        Token::ConstOpen => {
            tokens.next();
            let expr = parse_constant_expression(tokens, context, position.line)?;
            let discarded = context.reduce_expr(&expr)?;
            log::trace!("discarded constant expression result {discarded} on line {}",
                        position.line);
            Ok(None)
        },
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line:  position.line, }.into()),
    }
}

/// Parses the rest of a variable declaration after `var`.
///
/// The value is evaluated right away, so any variable or function it mentions
/// must already be resolvable. The result is stored in `context`, replacing
/// any earlier value under the same name.
///
/// Grammar: `declaration := "var" identifier value`
///
/// # Errors
/// - `ExpectedVariableName` if no identifier follows `var`.
/// - Any error from parsing or evaluating the value.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     context: &mut Context,
                                     line: usize)
                                     -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let name = match tokens.peek() {
        Some((Token::Identifier(name), _)) => name.clone(),
        _ => return Err(ParseError::ExpectedVariableName { line }.into()),
    };
    tokens.next();

    let node = parse_value(tokens, context)?;
    let value = context.reduce_value(&node)?;
    context.declare(&name, value);

    Ok(())
}
