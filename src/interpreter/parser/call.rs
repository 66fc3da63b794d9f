use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token},
        parser::{core::ParseResult, expression::parse_expression, utils::parse_comma_separated},
    },
};

/// Parses a function call of the form `name(arg1, arg2, ...)`.
///
/// Arguments are full expressions. The call itself is not performed here;
/// it is returned as a `Node::FunctionCall` and runs when the node is reduced.
///
/// Grammar: `call := identifier "(" (expression ("," expression)* ","?)? ")"`
///
/// # Errors
/// - `UnexpectedToken` if the call does not start with `name(`.
/// - `ExpectedSeparator` if an argument is followed by neither `,` nor `)`.
/// - `UnclosedArguments` if the input ends before `)`.
pub fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, context: &mut Context)
                                  -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), position)) => (name.clone(), position.line),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected function name, found {tok}"),
                                                     line:  position.line, }.into());
        },
        None => return Err(ParseError::UnexpectedEndOfInput { expected: "a function name" }.into()),
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '(' after {name}, found {tok}"),
                                                     line:  position.line, }.into());
        },
        None => return Err(ParseError::UnclosedArguments { name, line }.into()),
    }

    let arguments = parse_comma_separated(tokens,
                                          context,
                                          parse_expression,
                                          &Token::RParen,
                                          || ParseError::UnclosedArguments { name: name.clone(),
                                                                             line })?;

    Ok(Node::FunctionCall { name,
                            arguments,
                            line })
}
