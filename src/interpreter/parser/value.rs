use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token},
        parser::{
            call::parse_function_call,
            core::ParseResult,
            expression::parse_constant_expression,
            utils::{followed_by_paren, literal_value, parse_comma_separated},
        },
    },
};

/// Parses a value: the right-hand side of a declaration or a dictionary
/// entry.
///
/// Dispatches on the current token:
/// - numbers, strings and booleans become literals,
/// - `name(...)` becomes an unevaluated function call,
/// - a bare `name` becomes a deferred variable reference,
/// - `$[` starts a dictionary,
/// - `?{` starts a constant expression, which is evaluated on the spot and
///   becomes a literal.
///
/// Grammar:
/// ```text
///     value := NUMBER | STRING | BOOLEAN
///            | identifier "(" arguments ")"
///            | identifier
///            | dictionary
///            | "?{" expression "}"
/// ```
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `InvalidValue` for tokens that cannot start a value.
/// - Any error from the nested construct.
pub fn parse_value<'a, I>(tokens: &mut Peekable<I>, context: &mut Context) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, position)) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "a value" }.into());
    };
    let line = position.line;

    if let Some(value) = literal_value(token) {
        tokens.next();
        return Ok(Node::literal(value, line));
    }

    match token {
        Token::Identifier(_) if followed_by_paren(tokens) => parse_function_call(tokens, context),
        Token::Identifier(name) => {
            tokens.next();
            Ok(Node::VariableRef { name: name.clone(),
                                   statement: context.current_statement(),
                                   line })
        },
        Token::DictOpen => parse_dictionary(tokens, context),
        Token::ConstOpen => {
            tokens.next();
            let expr = parse_constant_expression(tokens, context, line)?;
            let value = context.reduce_expr(&expr)?;
            Ok(Node::literal(value, line))
        },
        tok => Err(ParseError::InvalidValue { token: tok.to_string(),
                                              line }.into()),
    }
}

/// Parses a dictionary literal of the form `$[ key: value, ... ]`.
///
/// Entry values are parsed with [`parse_value`], so they may stay unresolved
/// until the dictionary is reduced. Keys may repeat; the entries keep source
/// order.
///
/// Grammar: `dictionary := "$[" (entry ("," entry)* ","?)? "]"`
///
/// # Errors
/// - `ExpectedDictionaryKey` if an entry does not start with an identifier.
/// - `ExpectedColon` if a key is not followed by `:`.
/// - `ExpectedSeparator` if an entry is followed by neither `,` nor `]`.
/// - `UnclosedDictionary` if the input ends before `]`.
pub fn parse_dictionary<'a, I>(tokens: &mut Peekable<I>, context: &mut Context)
                               -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let line = match tokens.next() {
        Some((Token::DictOpen, position)) => position.line,
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '$[', found {tok}"),
                                                     line:  position.line, }.into());
        },
        None => return Err(ParseError::UnexpectedEndOfInput { expected: "'$['" }.into()),
    };

    let entries = parse_comma_separated(tokens,
                                        context,
                                        parse_dictionary_entry,
                                        &Token::DictClose,
                                        || ParseError::UnclosedDictionary { line })?;

    Ok(Node::Dictionary { entries, line })
}

/// Parses one `key: value` entry.
fn parse_dictionary_entry<'a, I>(tokens: &mut Peekable<I>,
                                 context: &mut Context)
                                 -> ParseResult<(String, Node)>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (key, line) = match tokens.next() {
        Some((Token::Identifier(key), position)) => (key.clone(), position.line),
        Some((_, position)) => {
            return Err(ParseError::ExpectedDictionaryKey { line: position.line }.into());
        },
        None => return Err(ParseError::UnexpectedEndOfInput { expected: "a dictionary key" }.into()),
    };

    match tokens.next() {
        Some((Token::Colon, _)) => {},
        Some((_, position)) => {
            return Err(ParseError::ExpectedColon { key,
                                                   line: position.line }.into());
        },
        None => return Err(ParseError::ExpectedColon { key, line }.into()),
    }

    let value = parse_value(tokens, context)?;
    Ok((key, value))
}
