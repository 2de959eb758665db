use math_ops::{default_registry, Value};

fn main() {
    env_logger::init();

    let registry = default_registry();

    // Evaluate the built-in operations by name
    let sum = registry
        .evaluate("Add", &[Value::Integer(2), Value::Integer(3)])
        .unwrap();
    println!("2 + 3 = {:?}", sum[0]);

    let difference = registry
        .evaluate("Subtract", &[Value::Float(5.0), Value::Float(3.0)])
        .unwrap();
    println!("5.0 - 3.0 = {:?}", difference[0]);

    // List everything the registry knows about
    for op_type in registry.op_types() {
        let metadata = registry.metadata(op_type).unwrap();
        println!(
            "{} ({}): {}",
            metadata.display_name,
            metadata.category.display_string(),
            metadata.description
        );
    }
}
