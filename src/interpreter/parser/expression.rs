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
            utils::{followed_by_paren, literal_value},
        },
    },
};

/// Parses an arithmetic expression.
///
/// All four operators share a single precedence level and associate to the
/// left, so `2 + 3 * 4` is built as `(2 + 3) * 4`.
///
/// Grammar: `expression := term (("+" | "-" | "*" | "/") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first term.
/// - `context`: Variables named in terms are resolved against it immediately.
///
/// # Returns
/// A left-leaning `Node::BinaryOp` chain, or the single term.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, context: &mut Context)
                               -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_term(tokens, context)?;

    while let Some((Token::Operator(op), position)) = tokens.peek() {
        let (op, line) = (*op, position.line);
        tokens.next();

        let right = parse_term(tokens, context)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses the body of `?{ ... }` after the opening delimiter, including the
/// closing `}`.
///
/// # Parameters
/// - `line`: Line of the opening `?{`, reported if the input ends early.
///
/// # Errors
/// `ExpectedClosingBrace` if the expression is not followed by `}`.
pub fn parse_constant_expression<'a, I>(tokens: &mut Peekable<I>,
                                        context: &mut Context,
                                        line: usize)
                                        -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let expr = parse_expression(tokens, context)?;

    match tokens.next() {
        Some((Token::ConstClose, _)) => Ok(expr),
        Some((_, position)) => {
            Err(ParseError::ExpectedClosingBrace { line: position.line }.into())
        },
        None => Err(ParseError::ExpectedClosingBrace { line }.into()),
    }
}

/// Parses a single term of an expression.
///
/// Unlike a value, a variable named in a term is looked up right away and
/// replaced by its current value. Function calls are kept unevaluated.
///
/// Grammar:
/// ```text
///     term := NUMBER | STRING | BOOLEAN
///           | identifier "(" arguments ")"
///           | identifier
///           | "(" expression ")"
/// ```
/// # Errors
/// - `UnknownVariable` if a named variable has not been declared.
/// - `ExpectedClosingParen` if a group is not closed.
/// - `InvalidTerm` for tokens that cannot start a term.
fn parse_term<'a, I>(tokens: &mut Peekable<I>, context: &mut Context) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, position)) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "an expression" }.into());
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
            let value = context.lookup(name, context.current_statement(), line)?;
            Ok(Node::literal(value, line))
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens, context)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                Some((_, position)) => {
                    Err(ParseError::ExpectedClosingParen { line: position.line }.into())
                },
                None => Err(ParseError::ExpectedClosingParen { line }.into()),
            }
        },
        tok => Err(ParseError::InvalidTerm { token: tok.to_string(),
                                             line }.into()),
    }
}
