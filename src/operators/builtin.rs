use super::{
    Associativity, Operator, PRECEDENCE_ADDITION, PRECEDENCE_DIVISION,
    PRECEDENCE_MODULO, PRECEDENCE_MULTIPLICATION, PRECEDENCE_POWER, PRECEDENCE_SUBTRACTION,
    PRECEDENCE_UNARY_MINUS, PRECEDENCE_UNARY_PLUS,
};
use crate::error::DomainError;
use crate::number::{self, Number};
use std::sync::{Arc, LazyLock};

struct BuiltinOperators {
    addition: Arc<Operator>,
    subtraction: Arc<Operator>,
    multiplication: Arc<Operator>,
    division: Arc<Operator>,
    power: Arc<Operator>,
    modulo: Arc<Operator>,
    unary_minus: Arc<Operator>,
    unary_plus: Arc<Operator>,
}

static BUILTINS: LazyLock<BuiltinOperators> = LazyLock::new(|| BuiltinOperators {
    addition: operator("+", 2, Associativity::Left, PRECEDENCE_ADDITION, |args| {
        Ok(&args[0] + &args[1])
    }),
    subtraction: operator("-", 2, Associativity::Left, PRECEDENCE_SUBTRACTION, |args| {
        Ok(&args[0] - &args[1])
    }),
    multiplication: operator("*", 2, Associativity::Left, PRECEDENCE_MULTIPLICATION, |args| {
        Ok(&args[0] * &args[1])
    }),
    division: operator("/", 2, Associativity::Left, PRECEDENCE_DIVISION, |args| {
        number::divide(&args[0], &args[1])
    }),
    power: operator("^", 2, Associativity::Right, PRECEDENCE_POWER, |args| {
        number::power(&args[0], &args[1])
    }),
    modulo: operator("%", 2, Associativity::Left, PRECEDENCE_MODULO, |args| {
        number::modulo(&args[0], &args[1])
    }),
    unary_minus: operator("-", 1, Associativity::Right, PRECEDENCE_UNARY_MINUS, |args| {
        Ok(-args[0].clone())
    }),
    unary_plus: operator("+", 1, Associativity::Right, PRECEDENCE_UNARY_PLUS, |args| {
        Ok(args[0].clone())
    }),
});

fn operator<F>(
    symbol: &str,
    arity: usize,
    associativity: Associativity,
    precedence: i32,
    apply: F,
) -> Arc<Operator>
where
    F: Fn(&[Number]) -> Result<Number, DomainError> + Send + Sync + 'static,
{
    Arc::new(Operator {
        symbol: symbol.to_string(),
        arity,
        associativity,
        precedence,
        apply: Arc::new(apply),
    })
}

/// Looks up a built-in operator by its single-character symbol. `arity`
/// picks between the unary and binary forms of `+` and `-`; `÷` is an alias
/// for `/`.
pub fn builtin_operator(symbol: char, arity: usize) -> Option<Arc<Operator>> {
    let builtins = &*BUILTINS;
    let op = match symbol {
        '+' if arity == 1 => &builtins.unary_plus,
        '+' => &builtins.addition,
        '-' if arity == 1 => &builtins.unary_minus,
        '-' => &builtins.subtraction,
        '*' => &builtins.multiplication,
        '/' | '÷' => &builtins.division,
        '^' => &builtins.power,
        '%' => &builtins.modulo,
        _ => return None,
    };
    Some(Arc::clone(op))
}

/// The binary `*` inserted between adjacent values under implicit
/// multiplication.
pub fn multiplication() -> Arc<Operator> {
    Arc::clone(&BUILTINS.multiplication)
}
