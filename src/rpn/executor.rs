use super::Token;
use crate::error::{ExpressionError, Result};
use crate::number::Number;
use log::trace;
use std::collections::HashMap;

const INITIAL_CAPACITY: usize = 5;

/// Operand stack that grows by a fifth of its size plus one slot when full.
struct ValueStack {
    values: Vec<Number>,
}

impl ValueStack {
    fn new() -> Self {
        Self {
            values: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    fn push(&mut self, value: Number) {
        if self.values.len() == self.values.capacity() {
            self.values.reserve_exact(self.values.len() / 5 + 1);
        }
        self.values.push(value);
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    /// Removes the top `count` values, returned bottom to top.
    fn pop_n(&mut self, count: usize) -> Vec<Number> {
        let at = self.values.len() - count;
        self.values.split_off(at)
    }
}

/// Runs a postfix program against `variables` and returns the single value
/// it leaves behind.
pub fn execute(tokens: &[Token], variables: &HashMap<String, Number>) -> Result<Number> {
    let mut stack = ValueStack::new();

    for token in tokens {
        match token {
            Token::Number(value) => stack.push(value.clone()),
            Token::Variable(name) => {
                let value = variables
                    .get(name)
                    .ok_or_else(|| ExpressionError::UnsetVariable { name: name.clone() })?;
                stack.push(value.clone());
            }
            Token::Operator(op) => {
                if stack.len() < op.arity() {
                    return Err(ExpressionError::OperandCount {
                        symbol: op.symbol().to_string(),
                    });
                }
                let operands = stack.pop_n(op.arity());
                let result = op.apply(&operands).map_err(|source| ExpressionError::Domain {
                    name: op.symbol().to_string(),
                    source,
                })?;
                trace!("{} {:?} = {}", op.symbol(), operands, result);
                stack.push(result);
            }
            Token::Function(function) => {
                let count = function.num_arguments();
                if stack.len() < count {
                    return Err(ExpressionError::ArgumentCount {
                        name: function.name().to_string(),
                    });
                }
                let arguments = stack.pop_n(count);
                let result =
                    function
                        .apply(&arguments)
                        .map_err(|source| ExpressionError::Domain {
                            name: function.name().to_string(),
                            source,
                        })?;
                trace!("{}({:?}) = {}", function.name(), arguments, result);
                stack.push(result);
            }
            Token::OpenParen | Token::CloseParen | Token::ArgSeparator => {
                return Err(ExpressionError::UnexpectedToken {
                    token: token.kind_name(),
                });
            }
        }
    }

    match stack.len() {
        0 => Err(ExpressionError::EmptyResult),
        1 => Ok(stack.pop_n(1).remove(0)),
        remaining => Err(ExpressionError::LeftoverOperands { remaining }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Function;
    use crate::number::parse;
    use crate::operators::builtin_operator;
    use std::sync::Arc;

    fn num(n: i32) -> Token {
        Token::Number(Number::from(n))
    }

    fn op(symbol: char, arity: usize) -> Token {
        Token::Operator(builtin_operator(symbol, arity).unwrap())
    }

    #[test]
    fn test_binary_operands_keep_order() {
        let tokens = [num(7), num(2), op('-', 2)];
        assert_eq!(execute(&tokens, &HashMap::new()).unwrap(), Number::from(5));

        let tokens = [num(1), num(4), op('/', 2)];
        assert_eq!(
            execute(&tokens, &HashMap::new()).unwrap(),
            parse("0.25").unwrap()
        );
    }

    #[test]
    fn test_function_arguments_keep_call_order() {
        let minus = Function::new("minus", 2, |args| Ok(&args[0] - &args[1])).unwrap();
        let tokens = [num(10), num(3), Token::Function(Arc::new(minus))];
        assert_eq!(execute(&tokens, &HashMap::new()).unwrap(), Number::from(7));
    }

    #[test]
    fn test_variables() {
        let tokens = [num(3), Token::Variable("x".to_string()), op('*', 2)];
        let variables = HashMap::from([("x".to_string(), Number::from(4))]);
        assert_eq!(execute(&tokens, &variables).unwrap(), Number::from(12));

        let err = execute(&tokens, &HashMap::new()).unwrap_err();
        assert_eq!(err, ExpressionError::UnsetVariable { name: "x".to_string() });
    }

    #[test]
    fn test_operand_count() {
        let tokens = [num(1), op('+', 2)];
        assert!(matches!(
            execute(&tokens, &HashMap::new()),
            Err(ExpressionError::OperandCount { symbol }) if symbol == "+"
        ));
    }

    #[test]
    fn test_argument_count() {
        let pow = crate::functions::builtin_function("pow").unwrap();
        let tokens = [num(1), Token::Function(pow)];
        assert!(matches!(
            execute(&tokens, &HashMap::new()),
            Err(ExpressionError::ArgumentCount { name }) if name == "pow"
        ));
    }

    #[test]
    fn test_leftover_operands() {
        let tokens = [num(1), num(2), num(3), op('+', 2)];
        assert_eq!(
            execute(&tokens, &HashMap::new()),
            Err(ExpressionError::LeftoverOperands { remaining: 2 })
        );
        assert_eq!(execute(&[], &HashMap::new()), Err(ExpressionError::EmptyResult));
    }

    #[test]
    fn test_domain_error_names_operator() {
        let tokens = [num(14), num(0), op('%', 2)];
        match execute(&tokens, &HashMap::new()) {
            Err(ExpressionError::Domain { name, .. }) => assert_eq!(name, "%"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_paren_in_program_is_rejected() {
        let tokens = [num(1), Token::OpenParen];
        assert!(matches!(
            execute(&tokens, &HashMap::new()),
            Err(ExpressionError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_stack_grows_past_initial_capacity() {
        let mut tokens: Vec<Token> = (1..=40).map(num).collect();
        tokens.extend((1..40).map(|_| op('+', 2)));
        assert_eq!(execute(&tokens, &HashMap::new()).unwrap(), Number::from(820));
    }
}
