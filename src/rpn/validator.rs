use super::Token;
use crate::number::Number;
use std::collections::HashMap;

/// Outcome of [`validate`]: valid when no errors were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Checks operand and argument counts of a postfix program without
/// evaluating it. With `check_variables`, every referenced variable must
/// also be bound in `variables`.
pub fn validate(
    tokens: &[Token],
    variables: &HashMap<String, Number>,
    check_variables: bool,
) -> ValidationResult {
    let mut errors = Vec::new();
    if check_variables {
        for token in tokens {
            if let Token::Variable(name) = token {
                if !variables.contains_key(name) {
                    errors.push(format!("The variable '{}' has not been set", name));
                }
            }
        }
    }

    let mut depth: i64 = 0;
    for token in tokens {
        match token {
            Token::Number(_) | Token::Variable(_) => depth += 1,
            Token::Function(function) => {
                let count = function.num_arguments() as i64;
                if depth < count {
                    errors.push(format!("Not enough arguments for '{}'", function.name()));
                }
                if count > 1 {
                    depth -= count - 1;
                } else if count == 0 {
                    depth += 1;
                }
            }
            Token::Operator(op) => {
                if op.is_binary() {
                    depth -= 1;
                }
            }
            Token::OpenParen | Token::CloseParen | Token::ArgSeparator => {
                errors.push(format!("Unexpected {} token", token.kind_name()));
            }
        }
        if depth < 1 {
            errors.push("Too many operators".to_string());
            return ValidationResult { errors };
        }
    }

    if tokens.is_empty() {
        errors.push("The expression has no operands".to_string());
    } else if depth > 1 {
        errors.push("Too many operands".to_string());
    }
    ValidationResult { errors }
}
