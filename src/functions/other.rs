use super::{register as insert, FunctionMap};
use crate::error::DomainError;
use crate::number::{from_f64, Number};
use num_traits::Signed;
use shunt_macros::shunt_fn;

pub fn register(functions: &mut FunctionMap) {
    insert(functions, "abs", 1, abs);
    insert(functions, "cbrt", 1, cbrt);
    insert(functions, "sqrt", 1, sqrt);
    insert(functions, "ceil", 1, ceil);
    insert(functions, "floor", 1, floor);
    insert(functions, "signum", 1, signum);
}

// exact on the decimal value, no float round trip
#[shunt_fn]
fn abs(x: Number) -> Result<Number, DomainError> {
    Ok(x.abs())
}

#[shunt_fn]
fn cbrt(x: f64) -> Result<Number, DomainError> {
    from_f64(x.cbrt())
}

#[shunt_fn]
fn sqrt(x: f64) -> Result<Number, DomainError> {
    from_f64(x.sqrt())
}

#[shunt_fn]
fn ceil(x: f64) -> Result<Number, DomainError> {
    from_f64(x.ceil())
}

#[shunt_fn]
fn floor(x: f64) -> Result<Number, DomainError> {
    from_f64(x.floor())
}

#[shunt_fn]
fn signum(x: Number) -> Result<Number, DomainError> {
    Ok(x.signum())
}
