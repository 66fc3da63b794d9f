use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token},
        parser::core::ParseResult,
        value::core::Value,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by dictionary literals and function argument lists.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list, and a
/// single trailing comma before the closing token is accepted.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening delimiter.
/// - `context`: The evaluation context, passed through to `parse_item`.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (`]` or `)`).
/// - `unclosed`: Builds the error reported when the input ends first.
///
/// # Errors
/// Returns an error if:
/// - an item fails to parse,
/// - an item is followed by neither a comma nor the closing token,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    context: &mut Context,
    parse_item: impl Fn(&mut Peekable<I>, &mut Context) -> ParseResult<T>,
    closing: &Token,
    unclosed: impl Fn() -> ParseError)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();

    loop {
        match tokens.peek() {
            Some((tok, _)) if tok == closing => {
                tokens.next();
                return Ok(items);
            },
            Some(_) => {},
            None => return Err(unclosed().into()),
        }

        items.push(parse_item(tokens, context)?);

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {},
            Some((tok, position)) => {
                return Err(ParseError::ExpectedSeparator { closing: closing.to_string(),
                                                           found:   tok.to_string(),
                                                           line:    position.line, }.into());
            },
            None => return Err(unclosed().into()),
        }
    }
}

/// Whether the token after the current one is `(`.
///
/// Used to tell a function call from a plain identifier without consuming
/// anything.
pub(in crate::interpreter::parser) fn followed_by_paren<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.peek(), Some((Token::LParen, _)))
}

/// Converts a literal token into its value.
///
/// Returns `None` for tokens that are not numbers, strings or booleans.
pub(in crate::interpreter::parser) fn literal_value(token: &Token) -> Option<Value> {
    match token {
        Token::Integer(n) => Some(Value::Integer(*n)),
        Token::Float(r) => Some(Value::Float(*r)),
        Token::Str(s) => Some(Value::Str(s.clone())),
        Token::Bool(b) => Some(Value::Bool(*b)),
        _ => None,
    }
}
