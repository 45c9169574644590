use super::{Token, Tokenizer};
use crate::error::{ExpressionError, Result};
use crate::registry::Registry;
use log::{debug, trace};
use std::collections::HashSet;

/// Converts infix `expression` to postfix order with the shunting-yard
/// algorithm.
pub fn convert(
    expression: &str,
    registry: &Registry,
    variable_names: &HashSet<String>,
    implicit_multiplication: bool,
) -> Result<Vec<Token>> {
    debug!("Converting expression: {}", expression);

    let mut tokenizer =
        Tokenizer::new(expression, registry, variable_names, implicit_multiplication);
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();

    while tokenizer.has_next() {
        let token = tokenizer.next_token()?;
        match token {
            Token::Number(_) | Token::Variable(_) => output.push(token),
            Token::Function(_) | Token::OpenParen => stack.push(token),
            Token::ArgSeparator => {
                while let Some(top) = stack.last() {
                    if matches!(top, Token::OpenParen) {
                        break;
                    }
                    output.extend(stack.pop());
                }
                if !matches!(stack.last(), Some(Token::OpenParen)) {
                    return Err(ExpressionError::MisplacedSeparator);
                }
            }
            Token::Operator(ref o1) => {
                while let Some(Token::Operator(o2)) = stack.last() {
                    if o1.is_unary() && o2.is_binary() {
                        break;
                    }
                    let yields = (o1.is_left_associative() && o1.precedence() <= o2.precedence())
                        || o1.precedence() < o2.precedence();
                    if !yields {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token);
            }
            Token::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(Token::OpenParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(ExpressionError::MismatchedParentheses),
                    }
                }
                if matches!(stack.last(), Some(Token::Function(_))) {
                    output.extend(stack.pop());
                }
            }
        }
        trace!("Stack: {:?}", stack);
    }

    while let Some(token) = stack.pop() {
        if matches!(token, Token::OpenParen | Token::CloseParen) {
            return Err(ExpressionError::MismatchedParentheses);
        }
        output.push(token);
    }

    debug!("Postfix form: {}", super::render(&output));
    Ok(output)
}
