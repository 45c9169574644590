pub mod error;
pub mod expression;
pub mod functions;
pub mod number;
pub mod operators;
pub mod registry;
pub mod rpn;

pub use error::{DomainError, ErrorKind, ExpressionError, Result};
pub use expression::{Expression, ExpressionBuilder};
pub use functions::Function;
pub use number::Number;
pub use operators::{Associativity, Operator};
pub use rpn::{Token, ValidationResult};
pub use shunt_macros::shunt_fn;

/// Compiles and evaluates `expression` in one go, with no variables beyond
/// the default constants.
pub fn evaluate_expression(expression: &str) -> Result<Number> {
    ExpressionBuilder::new(expression).build()?.evaluate()
}
