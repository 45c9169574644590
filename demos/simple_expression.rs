use log::debug;
use shunt_rs::{shunt_fn, DomainError, ExpressionBuilder, Function, Number};

#[shunt_fn]
fn hypot(a: f64, b: f64) -> Result<Number, DomainError> {
    shunt_rs::number::from_f64(a.hypot(b))
}

#[shunt_fn]
fn square(a: Number) -> Result<Number, DomainError> {
    Ok(&a * &a)
}

fn main() {
    pretty_env_logger::init();

    let functions = vec![
        Function::new("hypot", 2, hypot).unwrap(),
        Function::new("square", 1, square).unwrap(),
    ];

    let mut expression = ExpressionBuilder::new("hypot(3, x) + square(y) - 2pi")
        .functions(functions)
        .variables(["x", "y"])
        .build()
        .expect("Failed to compile");
    debug!("postfix: {}", shunt_rs::rpn::render(expression.tokens()));

    let validation = expression.validate(true);
    println!("Before binding: {:?}", validation.errors());

    expression
        .set_variable("x", 4)
        .and_then(|e| e.set_variable_f64("y", 1.5))
        .expect("Failed to bind variables");

    match expression.evaluate() {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }

    match shunt_rs::evaluate_expression("1/0") {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
