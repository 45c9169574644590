use crate::error::{ExpressionError, Result};
use crate::functions::{builtin_function, Function};
use crate::number::{self, Number, DEFAULT_CONSTANTS};
use crate::operators::Operator;
use crate::registry::Registry;
use crate::rpn::{self, Token, ValidationResult};
use log::debug;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Fluent construction of an [`Expression`].
///
/// ```
/// use shunt_rs::{ExpressionBuilder, Number};
///
/// let mut expression = ExpressionBuilder::new("3 * x + 1")
///     .variable("x")
///     .build()
///     .unwrap();
/// expression.set_variable("x", 4).unwrap();
/// assert_eq!(expression.evaluate().unwrap(), Number::from(13));
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    expression: String,
    registry: Registry,
    variable_names: HashSet<String>,
    implicit_multiplication: bool,
}

impl ExpressionBuilder {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            registry: Registry::new(),
            variable_names: HashSet::new(),
            implicit_multiplication: true,
        }
    }

    pub fn function(mut self, function: Function) -> Self {
        self.registry.register_function(function);
        self
    }

    pub fn functions(mut self, functions: impl IntoIterator<Item = Function>) -> Self {
        for function in functions {
            self.registry.register_function(function);
        }
        self
    }

    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variable_names.insert(name.into());
        self
    }

    pub fn variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variable_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.registry.register_operator(operator);
        self
    }

    pub fn operators(mut self, operators: impl IntoIterator<Item = Operator>) -> Self {
        for operator in operators {
            self.registry.register_operator(operator);
        }
        self
    }

    pub fn implicit_multiplication(mut self, enabled: bool) -> Self {
        self.implicit_multiplication = enabled;
        self
    }

    pub fn build(mut self) -> Result<Expression> {
        if self.expression.trim().is_empty() {
            return Err(ExpressionError::EmptyExpression);
        }

        self.variable_names
            .extend(DEFAULT_CONSTANTS.iter().map(|(name, _)| name.to_string()));
        if let Some(name) = self
            .variable_names
            .iter()
            .find(|name| self.registry.is_function(name))
        {
            return Err(ExpressionError::NameCollision { name: name.clone() });
        }

        let tokens = rpn::convert(
            &self.expression,
            &self.registry,
            &self.variable_names,
            self.implicit_multiplication,
        )?;
        Ok(Expression::new(
            tokens,
            self.registry.user_function_names().map(String::from).collect(),
        ))
    }
}

/// A compiled expression and its variable bindings.
///
/// The postfix program is shared between clones. Bindings are not, so a
/// clone can be handed to another thread and rebound independently.
#[derive(Debug, Clone)]
pub struct Expression {
    tokens: Arc<[Token]>,
    variables: HashMap<String, Number>,
    user_function_names: HashSet<String>,
}

impl Expression {
    fn new(tokens: Vec<Token>, user_function_names: HashSet<String>) -> Self {
        let variables = DEFAULT_CONSTANTS
            .iter()
            .filter_map(|(name, literal)| Some((name.to_string(), number::parse(literal)?)))
            .collect();
        Self {
            tokens: tokens.into(),
            variables,
            user_function_names,
        }
    }

    /// The compiled program in postfix order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn set_variable(&mut self, name: &str, value: impl Into<Number>) -> Result<&mut Self> {
        self.check_variable_name(name)?;
        self.variables.insert(name.to_string(), value.into());
        Ok(self)
    }

    /// Binds `value` through its shortest decimal rendering. NaN and the
    /// infinities are rejected.
    pub fn set_variable_f64(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        let value = number::from_f64(value).map_err(|source| ExpressionError::Domain {
            name: name.to_string(),
            source,
        })?;
        self.set_variable(name, value)
    }

    pub fn set_variables<I, S, N>(&mut self, variables: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (S, N)>,
        S: AsRef<str>,
        N: Into<Number>,
    {
        for (name, value) in variables {
            self.set_variable(name.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Removes every binding, the default constants included.
    pub fn clear_variables(&mut self) -> &mut Self {
        self.variables.clear();
        self
    }

    pub fn variable(&self, name: &str) -> Option<&Number> {
        self.variables.get(name)
    }

    /// Names of the variables the program refers to.
    pub fn variable_names(&self) -> HashSet<String> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Variable(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn validate(&self, check_variables: bool) -> ValidationResult {
        rpn::validate(&self.tokens, &self.variables, check_variables)
    }

    pub fn evaluate(&self) -> Result<Number> {
        rpn::execute(&self.tokens, &self.variables)
    }

    pub fn evaluate_f64(&self) -> Result<f64> {
        self.evaluate().map(|value| number::to_f64(&value))
    }

    /// Evaluates the program once per binding set on the rayon pool. Each
    /// evaluation works on its own clone; results keep the input order.
    pub fn evaluate_batch(&self, bindings: &[HashMap<String, Number>]) -> Vec<Result<Number>> {
        debug!("Evaluating batch of {} binding sets", bindings.len());
        bindings
            .par_iter()
            .map(|binding| {
                let mut expression = self.clone();
                expression.set_variables(binding.iter().map(|(k, v)| (k, v.clone())))?;
                expression.evaluate()
            })
            .collect()
    }

    /// Runs [`Expression::evaluate`] on a clone in tokio's blocking pool.
    /// Must be called from within a tokio runtime.
    pub fn evaluate_async(&self) -> JoinHandle<Result<Number>> {
        let expression = self.clone();
        tokio::task::spawn_blocking(move || expression.evaluate())
    }

    fn check_variable_name(&self, name: &str) -> Result<()> {
        if self.user_function_names.contains(name) || builtin_function(name).is_some() {
            return Err(ExpressionError::NameCollision {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
