//! User-supplied operators and functions layered over the built-in tables.

use crate::functions::{builtin_function, Function, FunctionMap};
use crate::operators::{builtin_operator, Operator};
use std::collections::HashMap;
use std::sync::Arc;

pub type OperatorMap = HashMap<String, Arc<Operator>>;

/// Lookup tables consulted by the tokenizer. User entries are searched
/// before the built-ins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: FunctionMap,
    operators: OperatorMap,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_function(&mut self, function: Function) {
        self.functions
            .insert(function.name().to_string(), Arc::new(function));
    }

    pub fn register_operator(&mut self, operator: Operator) {
        self.operators
            .insert(operator.symbol().to_string(), Arc::new(operator));
    }

    pub fn user_function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn lookup_function(&self, name: &str) -> Option<Arc<Function>> {
        self.functions
            .get(name)
            .cloned()
            .or_else(|| builtin_function(name))
    }

    /// Resolves a user operator by its full symbol. Single-character symbols
    /// with no user entry fall back to the built-in of the requested arity.
    pub fn lookup_operator(&self, symbol: &str, arity: usize) -> Option<Arc<Operator>> {
        if let Some(op) = self.operators.get(symbol) {
            return Some(Arc::clone(op));
        }
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => builtin_operator(ch, arity),
            _ => None,
        }
    }

    pub fn has_user_operator(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.lookup_function(name).is_some()
    }
}
