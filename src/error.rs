use thiserror::Error;

/// Broad classification of an [`ExpressionError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised while registering operators/functions or building, before any parsing.
    Configuration,
    /// Raised while tokenizing or converting the expression text.
    Syntax,
    /// Operand or argument counts do not line up.
    Arity,
    /// Raised while evaluating a compiled expression.
    Evaluation,
}

/// Failure reported by an operator or function callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("The operator symbol '{symbol}' is invalid")]
    InvalidOperatorSymbol { symbol: String },

    #[error("Operator '{symbol}' must take 1 or 2 operands, not {arity}")]
    InvalidOperatorArity { symbol: String, arity: usize },

    #[error("The function name '{name}' is invalid")]
    InvalidFunctionName { name: String },

    #[error("The name '{name}' is used for both a variable and a function")]
    NameCollision { name: String },

    #[error("Expression can not be empty")]
    EmptyExpression,

    #[error("Unable to parse char '{ch}' at [{position}]")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Invalid number '{literal}' at [{position}]")]
    InvalidNumber { literal: String, position: usize },

    #[error("Unknown operator '{symbol}' at [{position}]")]
    UnknownOperator { symbol: String, position: usize },

    #[error("Unknown function or variable '{name}' at pos {position} in expression '{expression}'")]
    UnknownFunctionOrVariable {
        name: String,
        position: usize,
        expression: String,
    },

    #[error("Misplaced function separator ',' or mismatched parentheses")]
    MisplacedSeparator,

    #[error("Mismatched parentheses detected. Please check the expression")]
    MismatchedParentheses,

    #[error("Invalid number of operands available for '{symbol}' operator")]
    OperandCount { symbol: String },

    #[error("Invalid number of arguments available for '{name}' function")]
    ArgumentCount { name: String },

    #[error("Invalid number of items on the output queue ({remaining}). Might be caused by an invalid number of arguments for a function.")]
    LeftoverOperands { remaining: usize },

    #[error("The compiled expression produced no value")]
    EmptyResult,

    #[error("Unexpected {token} token in a compiled expression")]
    UnexpectedToken { token: &'static str },

    #[error("No value has been set for the variable '{name}'.")]
    UnsetVariable { name: String },

    #[error("Error applying '{name}': {source}")]
    Domain {
        name: String,
        #[source]
        source: DomainError,
    },
}

impl ExpressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpressionError::InvalidOperatorSymbol { .. }
            | ExpressionError::InvalidOperatorArity { .. }
            | ExpressionError::InvalidFunctionName { .. }
            | ExpressionError::NameCollision { .. } => ErrorKind::Configuration,

            ExpressionError::EmptyExpression
            | ExpressionError::UnexpectedCharacter { .. }
            | ExpressionError::InvalidNumber { .. }
            | ExpressionError::UnknownOperator { .. }
            | ExpressionError::UnknownFunctionOrVariable { .. }
            | ExpressionError::MisplacedSeparator
            | ExpressionError::MismatchedParentheses => ErrorKind::Syntax,

            ExpressionError::OperandCount { .. }
            | ExpressionError::ArgumentCount { .. }
            | ExpressionError::LeftoverOperands { .. }
            | ExpressionError::EmptyResult
            | ExpressionError::UnexpectedToken { .. } => ErrorKind::Arity,

            ExpressionError::UnsetVariable { .. } | ExpressionError::Domain { .. } => {
                ErrorKind::Evaluation
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpressionError>;
