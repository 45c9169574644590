use super::{register as insert, FunctionMap};
use crate::error::DomainError;
use crate::number::{from_f64, Number};
use shunt_macros::shunt_fn;

pub fn register(functions: &mut FunctionMap) {
    insert(functions, "sin", 1, sin);
    insert(functions, "cos", 1, cos);
    insert(functions, "tan", 1, tan);
    insert(functions, "cot", 1, cot);
    insert(functions, "csc", 1, csc);
    insert(functions, "sec", 1, sec);
    insert(functions, "asin", 1, asin);
    insert(functions, "acos", 1, acos);
    insert(functions, "atan", 1, atan);
    insert(functions, "toradian", 1, toradian);
    insert(functions, "todegree", 1, todegree);
}

#[shunt_fn]
fn sin(x: f64) -> Result<Number, DomainError> {
    from_f64(x.sin())
}

#[shunt_fn]
fn cos(x: f64) -> Result<Number, DomainError> {
    from_f64(x.cos())
}

#[shunt_fn]
fn tan(x: f64) -> Result<Number, DomainError> {
    from_f64(x.tan())
}

/// Cotangent: 1 / tan(x)
#[shunt_fn]
fn cot(x: f64) -> Result<Number, DomainError> {
    let tan = x.tan();
    if tan == 0.0 {
        return Err(DomainError::new("Division by zero in cotangent!"));
    }
    from_f64(1.0 / tan)
}

/// Cosecant: 1 / sin(x)
#[shunt_fn]
fn csc(x: f64) -> Result<Number, DomainError> {
    let sin = x.sin();
    if sin == 0.0 {
        return Err(DomainError::new("Division by zero in cosecant!"));
    }
    from_f64(1.0 / sin)
}

/// Secant: 1 / cos(x)
#[shunt_fn]
fn sec(x: f64) -> Result<Number, DomainError> {
    let cos = x.cos();
    if cos == 0.0 {
        return Err(DomainError::new("Division by zero in secant!"));
    }
    from_f64(1.0 / cos)
}

#[shunt_fn]
fn asin(x: f64) -> Result<Number, DomainError> {
    from_f64(x.asin())
}

#[shunt_fn]
fn acos(x: f64) -> Result<Number, DomainError> {
    from_f64(x.acos())
}

#[shunt_fn]
fn atan(x: f64) -> Result<Number, DomainError> {
    from_f64(x.atan())
}

#[shunt_fn]
fn toradian(degrees: f64) -> Result<Number, DomainError> {
    from_f64(degrees.to_radians())
}

#[shunt_fn]
fn todegree(radians: f64) -> Result<Number, DomainError> {
    from_f64(radians.to_degrees())
}
