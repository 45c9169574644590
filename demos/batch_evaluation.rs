use shunt_rs::{ExpressionBuilder, Number};
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let bindings: Vec<HashMap<String, Number>> = (1..=8)
        .map(|i| {
            HashMap::from([
                ("price".to_string(), Number::from(100 + i * 5)),
                ("volume".to_string(), Number::from(3000 - i * 250)),
            ])
        })
        .collect();

    let expression = ExpressionBuilder::new("price * volume / 1000")
        .variables(["price", "volume"])
        .build()
        .unwrap();

    for (i, result) in expression.evaluate_batch(&bindings).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut single = expression.clone();
    single
        .set_variables([("price", 120), ("volume", 3000)])
        .unwrap();
    let result = runtime.block_on(single.evaluate_async()).unwrap();
    println!("Async result: {:?}", result);
}
