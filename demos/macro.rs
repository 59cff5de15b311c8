//! Using the logvalue! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use logvalue::{logvalue, stringify, Value};

fn main() {
    let null_val = logvalue!(null);
    let missing = logvalue!(undefined);
    let number = logvalue!(42);
    let text = logvalue!("Hello, logs!");

    println!("Primitives:");
    println!("  null:      {}", stringify(&null_val));
    println!("  undefined: {}", stringify(&missing));
    println!("  number:    {}", stringify(&number));
    println!("  text:      {}\n", stringify(&text));

    let numbers = logvalue!([1, 2, 3, 4, 5]);
    let mixed = logvalue!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", stringify(&numbers));
    println!("  Mixed:   {}\n", stringify(&mixed));

    let config = logvalue!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("  {}\n", stringify(&config));

    let items = vec![
        logvalue!({"id": 1, "status": "active"}),
        logvalue!({"id": 2, "status": "pending"}),
    ];
    let summary = logvalue!({
        "total": 2,
        "items": items
    });

    println!("Dynamic construction:");
    println!("  {}\n", stringify(&summary));

    if let Some(Value::Record(app)) = config.as_record().and_then(|r| r.get("app")) {
        if let Some(name) = app.get("name") {
            println!("Accessing values:");
            println!("  App name: {}", name);
        }
    }
}
