mod builtin;

pub use builtin::{builtin_operator, multiplication};

use crate::error::{DomainError, ExpressionError, Result};
use crate::number::Number;
use std::fmt;
use std::sync::Arc;

/// Callback applied to an operator's operands, left to right.
pub type OperatorFn = Arc<dyn Fn(&[Number]) -> std::result::Result<Number, DomainError> + Send + Sync>;

pub const PRECEDENCE_ADDITION: i32 = 500;
pub const PRECEDENCE_SUBTRACTION: i32 = PRECEDENCE_ADDITION;
pub const PRECEDENCE_MULTIPLICATION: i32 = 1000;
pub const PRECEDENCE_DIVISION: i32 = PRECEDENCE_MULTIPLICATION;
pub const PRECEDENCE_MODULO: i32 = PRECEDENCE_DIVISION;
pub const PRECEDENCE_POWER: i32 = 10000;
pub const PRECEDENCE_UNARY_MINUS: i32 = 5000;
pub const PRECEDENCE_UNARY_PLUS: i32 = PRECEDENCE_UNARY_MINUS;

/// Characters an operator symbol may be built from.
pub const ALLOWED_OPERATOR_CHARS: [char; 23] = [
    '+', '-', '*', '/', '^', '%', '!', '#', '§', '$', '&', ';', ':', '~', '<', '>', '|', '=', '÷',
    '√', '∛', '⌈', '⌉',
];

pub fn is_allowed_operator_char(ch: char) -> bool {
    ALLOWED_OPERATOR_CHARS.contains(&ch)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone)]
pub struct Operator {
    symbol: String,
    arity: usize,
    associativity: Associativity,
    precedence: i32,
    apply: OperatorFn,
}

impl Operator {
    /// Creates an operator, rejecting symbols outside [`ALLOWED_OPERATOR_CHARS`]
    /// and arities other than 1 or 2.
    pub fn new<F>(
        symbol: &str,
        arity: usize,
        associativity: Associativity,
        precedence: i32,
        apply: F,
    ) -> Result<Self>
    where
        F: Fn(&[Number]) -> std::result::Result<Number, DomainError> + Send + Sync + 'static,
    {
        if symbol.is_empty() || !symbol.chars().all(is_allowed_operator_char) {
            return Err(ExpressionError::InvalidOperatorSymbol {
                symbol: symbol.to_string(),
            });
        }
        if arity != 1 && arity != 2 {
            return Err(ExpressionError::InvalidOperatorArity {
                symbol: symbol.to_string(),
                arity,
            });
        }
        Ok(Self {
            symbol: symbol.to_string(),
            arity,
            associativity,
            precedence,
            apply: Arc::new(apply),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn is_unary(&self) -> bool {
        self.arity == 1
    }

    pub fn is_binary(&self) -> bool {
        self.arity == 2
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity == Associativity::Left
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn apply(&self, operands: &[Number]) -> std::result::Result<Number, DomainError> {
        (self.apply)(operands)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("arity", &self.arity)
            .field("associativity", &self.associativity)
            .field("precedence", &self.precedence)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &[Number]) -> std::result::Result<Number, DomainError> {
        Ok(Number::from(0))
    }

    #[test]
    fn test_symbol_must_use_allowed_chars() {
        assert!(Operator::new(">=>", 2, Associativity::Left, 4, noop).is_ok());
        assert!(matches!(
            Operator::new("2", 2, Associativity::Left, 1, noop),
            Err(ExpressionError::InvalidOperatorSymbol { .. })
        ));
        assert!(matches!(
            Operator::new("a+", 2, Associativity::Left, 1, noop),
            Err(ExpressionError::InvalidOperatorSymbol { .. })
        ));
        assert!(Operator::new("", 1, Associativity::Left, 1, noop).is_err());
    }

    #[test]
    fn test_arity_is_one_or_two() {
        assert!(matches!(
            Operator::new("#", 3, Associativity::Left, 1, noop),
            Err(ExpressionError::InvalidOperatorArity { arity: 3, .. })
        ));
        assert!(Operator::new("#", 0, Associativity::Left, 1, noop).is_err());
    }

    #[test]
    fn test_apply_invokes_callback() {
        let reciprocal = Operator::new("$", 1, Associativity::Left, PRECEDENCE_DIVISION, |args| {
            crate::number::divide(&Number::from(1), &args[0])
        })
        .unwrap();
        assert_eq!(
            reciprocal.apply(&[Number::from(4)]).unwrap(),
            crate::number::parse("0.25").unwrap()
        );
        assert!(reciprocal.apply(&[Number::from(0)]).is_err());
    }
}
