use shunt_rs::operators::{PRECEDENCE_ADDITION, PRECEDENCE_POWER};
use shunt_rs::{Associativity, DomainError, ExpressionBuilder, Number, Operator};

fn main() {
    pretty_env_logger::init();

    let factorial = Operator::new("!", 1, Associativity::Left, PRECEDENCE_POWER + 1, |args| {
        let n: u64 = args[0]
            .to_string()
            .parse()
            .map_err(|_| DomainError::new("Factorial needs a non-negative integer"))?;
        Ok((1..=n).fold(Number::from(1), |acc, i| acc * Number::from(i)))
    })
    .unwrap();

    let at_least = Operator::new(">=", 2, Associativity::Left, PRECEDENCE_ADDITION - 1, |args| {
        Ok(Number::from(u8::from(args[0] >= args[1])))
    })
    .unwrap();

    for text in ["5!", "3! >= 6", "2 * 4! - 1", "2.5!"] {
        let expression = ExpressionBuilder::new(text)
            .operator(factorial.clone())
            .operator(at_least.clone())
            .build();
        match expression.and_then(|e| e.evaluate()) {
            Ok(result) => println!("{} = {}", text, result),
            Err(err) => println!("{} failed: {}", text, err),
        }
    }
}
