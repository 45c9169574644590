use super::{register as insert, FunctionMap};
use crate::error::DomainError;
use crate::number::{from_f64, Number};
use shunt_macros::shunt_fn;

pub fn register(functions: &mut FunctionMap) {
    insert(functions, "log", 1, log);
    insert(functions, "log2", 1, log2);
    insert(functions, "log10", 1, log10);
    insert(functions, "log1p", 1, log1p);
    insert(functions, "logb", 2, logb);
    insert(functions, "exp", 1, exp);
    insert(functions, "expm1", 1, expm1);
    insert(functions, "pow", 2, pow);
}

/// Natural logarithm.
#[shunt_fn]
fn log(x: f64) -> Result<Number, DomainError> {
    from_f64(x.ln())
}

#[shunt_fn]
fn log2(x: f64) -> Result<Number, DomainError> {
    from_f64(x.log2())
}

#[shunt_fn]
fn log10(x: f64) -> Result<Number, DomainError> {
    from_f64(x.log10())
}

#[shunt_fn]
fn log1p(x: f64) -> Result<Number, DomainError> {
    from_f64(x.ln_1p())
}

/// Logarithm of `x` to an arbitrary `base`.
#[shunt_fn]
fn logb(base: f64, x: f64) -> Result<Number, DomainError> {
    from_f64(x.ln() / base.ln())
}

#[shunt_fn]
fn exp(x: f64) -> Result<Number, DomainError> {
    from_f64(x.exp())
}

#[shunt_fn]
fn expm1(x: f64) -> Result<Number, DomainError> {
    from_f64(x.exp_m1())
}

#[shunt_fn]
fn pow(base: f64, exponent: f64) -> Result<Number, DomainError> {
    from_f64(base.powf(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::to_f64;

    #[test]
    fn test_log_family() {
        assert_eq!(log(&[Number::from(1)]).unwrap(), Number::from(0));
        assert_eq!(log2(&[Number::from(8)]).unwrap(), Number::from(3));
        assert_eq!(log10(&[Number::from(1000)]).unwrap(), Number::from(3));
        let four = to_f64(&logb(&[Number::from(2), Number::from(16)]).unwrap());
        assert!((four - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_of_non_positive_is_domain_error() {
        assert!(log(&[Number::from(0)]).is_err());
        assert!(log(&[Number::from(-1)]).is_err());
        assert!(logb(&[Number::from(1), Number::from(16)]).is_err());
    }

    #[test]
    fn test_exp_and_pow() {
        assert_eq!(exp(&[Number::from(0)]).unwrap(), Number::from(1));
        assert!((to_f64(&expm1(&[Number::from(1)]).unwrap()) - 1f64.exp_m1()).abs() < 1e-15);
        assert_eq!(pow(&[Number::from(2), Number::from(10)]).unwrap(), Number::from(1024));
        assert!(pow(&[Number::from(2)]).is_err());
    }
}
