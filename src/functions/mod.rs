pub mod hyperbolic;
pub mod logarithmic;
pub mod other;
pub mod trigonometric;

use crate::error::{DomainError, ExpressionError, Result};
use crate::number::Number;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Callback applied to a function's arguments, in call order.
pub type FunctionFn = Arc<dyn Fn(&[Number]) -> std::result::Result<Number, DomainError> + Send + Sync>;

pub type FunctionMap = HashMap<String, Arc<Function>>;

#[derive(Clone)]
pub struct Function {
    name: String,
    num_arguments: usize,
    apply: FunctionFn,
}

impl Function {
    /// Creates a function. The name must start with a letter or `_` and
    /// continue with letters, digits or `_`.
    pub fn new<F>(name: &str, num_arguments: usize, apply: F) -> Result<Self>
    where
        F: Fn(&[Number]) -> std::result::Result<Number, DomainError> + Send + Sync + 'static,
    {
        if !is_valid_function_name(name) {
            return Err(ExpressionError::InvalidFunctionName {
                name: name.to_string(),
            });
        }
        Ok(Self::unchecked(name, num_arguments, apply))
    }

    fn unchecked<F>(name: &str, num_arguments: usize, apply: F) -> Self
    where
        F: Fn(&[Number]) -> std::result::Result<Number, DomainError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            num_arguments,
            apply: Arc::new(apply),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_arguments(&self) -> usize {
        self.num_arguments
    }

    pub fn apply(&self, args: &[Number]) -> std::result::Result<Number, DomainError> {
        (self.apply)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("num_arguments", &self.num_arguments)
            .finish_non_exhaustive()
    }
}

pub fn is_valid_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

static BUILTINS: LazyLock<FunctionMap> = LazyLock::new(|| {
    let mut functions = FunctionMap::new();
    trigonometric::register(&mut functions);
    hyperbolic::register(&mut functions);
    logarithmic::register(&mut functions);
    other::register(&mut functions);
    functions
});

pub(crate) fn register<F>(functions: &mut FunctionMap, name: &str, num_arguments: usize, apply: F)
where
    F: Fn(&[Number]) -> std::result::Result<Number, DomainError> + Send + Sync + 'static,
{
    functions.insert(
        name.to_string(),
        Arc::new(Function::unchecked(name, num_arguments, apply)),
    );
}

pub fn builtin_function(name: &str) -> Option<Arc<Function>> {
    BUILTINS.get(name).cloned()
}

pub fn builtin_function_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.keys().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_name_validation() {
        assert!(is_valid_function_name("foo"));
        assert!(is_valid_function_name("_foo2"));
        assert!(is_valid_function_name("λ"));
        assert!(!is_valid_function_name(""));
        assert!(!is_valid_function_name("1gd"));
        assert!(!is_valid_function_name("+1gd"));
        assert!(!is_valid_function_name("foo.bar"));
    }

    #[test]
    fn test_new_rejects_invalid_name() {
        let result = Function::new("1gd", 1, |_| Ok(Number::from(0)));
        assert!(matches!(
            result,
            Err(ExpressionError::InvalidFunctionName { .. })
        ));
    }

    #[test]
    fn test_zero_argument_function() {
        let now = Function::new("now", 0, |_| Ok(Number::from(42))).unwrap();
        assert_eq!(now.num_arguments(), 0);
        assert_eq!(now.apply(&[]).unwrap(), Number::from(42));
    }

    #[test]
    fn test_builtin_catalog() {
        for name in [
            "sin", "cos", "tan", "cot", "csc", "sec", "asin", "acos", "atan", "sinh", "cosh",
            "tanh", "coth", "csch", "sech", "log", "log2", "log10", "log1p", "logb", "exp",
            "expm1", "pow", "abs", "cbrt", "sqrt", "ceil", "floor", "signum", "toradian",
            "todegree",
        ] {
            assert!(builtin_function(name).is_some(), "missing builtin {}", name);
        }
        assert_eq!(builtin_function("pow").unwrap().num_arguments(), 2);
        assert_eq!(builtin_function("logb").unwrap().num_arguments(), 2);
        assert!(builtin_function("now").is_none());
        assert!(builtin_function_names().all(is_valid_function_name));
    }
}
