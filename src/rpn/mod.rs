//! Infix text to postfix program, and the two passes over the postfix form.

pub mod converter;
pub mod executor;
pub mod tokenizer;
pub mod validator;

use crate::functions::Function;
use crate::number::Number;
use crate::operators::Operator;
use std::fmt;
use std::sync::Arc;

pub use converter::convert;
pub use executor::execute;
pub use tokenizer::Tokenizer;
pub use validator::{validate, ValidationResult};

#[derive(Debug, Clone)]
pub enum Token {
    Number(Number),
    Variable(String),
    Operator(Arc<Operator>),
    Function(Arc<Function>),
    OpenParen,
    CloseParen,
    ArgSeparator,
}

impl Token {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Number(_) => "number",
            Token::Variable(_) => "variable",
            Token::Operator(_) => "operator",
            Token::Function(_) => "function",
            Token::OpenParen => "open parenthesis",
            Token::CloseParen => "close parenthesis",
            Token::ArgSeparator => "argument separator",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Function(func) => write!(f, "{}", func.name()),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::ArgSeparator => write!(f, ","),
        }
    }
}

/// Renders a token sequence space separated, e.g. `2 3 4 * +`.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
