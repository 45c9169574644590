use super::{register as insert, FunctionMap};
use crate::error::DomainError;
use crate::number::{from_f64, Number};
use shunt_macros::shunt_fn;

pub fn register(functions: &mut FunctionMap) {
    insert(functions, "sinh", 1, sinh);
    insert(functions, "cosh", 1, cosh);
    insert(functions, "tanh", 1, tanh);
    insert(functions, "coth", 1, coth);
    insert(functions, "csch", 1, csch);
    insert(functions, "sech", 1, sech);
}

#[shunt_fn]
fn sinh(x: f64) -> Result<Number, DomainError> {
    from_f64(x.sinh())
}

#[shunt_fn]
fn cosh(x: f64) -> Result<Number, DomainError> {
    from_f64(x.cosh())
}

#[shunt_fn]
fn tanh(x: f64) -> Result<Number, DomainError> {
    from_f64(x.tanh())
}

#[shunt_fn]
fn coth(x: f64) -> Result<Number, DomainError> {
    let tanh = x.tanh();
    if tanh == 0.0 {
        return Err(DomainError::new("Division by zero in hyperbolic cotangent!"));
    }
    from_f64(1.0 / tanh)
}

#[shunt_fn]
fn csch(x: f64) -> Result<Number, DomainError> {
    let sinh = x.sinh();
    if sinh == 0.0 {
        return Err(DomainError::new("Division by zero in hyperbolic cosecant!"));
    }
    from_f64(1.0 / sinh)
}

#[shunt_fn]
fn sech(x: f64) -> Result<Number, DomainError> {
    from_f64(1.0 / x.cosh())
}
