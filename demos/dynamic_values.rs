//! Inspecting and classifying values at runtime.
//!
//! Run with: cargo run --example dynamic_values

use logvalue::host::{ErrorObject, Instance, MapObject, RegExp};
use logvalue::{
    categories, classify, logvalue, special_tag, stringify, to_value, Callable, Value,
};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    println!("User as Value: {}\n", stringify(&user_value));

    if let Some(record) = user_value.as_record() {
        if let Some(id) = record.get("id").and_then(|v| v.as_i64()) {
            println!("Accessing field 'id': {}", id);
        }
        if let Some(Value::Array(roles)) = record.get("roles") {
            println!("Accessing field 'roles': {} items\n", roles.len());
        }
    }

    let samples = vec![
        ("null", Value::Null),
        ("number", logvalue!(3.5)),
        ("record", user_value),
        ("array", logvalue!([1, 2])),
        ("date", Value::from(chrono::Utc::now())),
        ("callable", Value::from(Callable::method("save"))),
        ("map", Value::object(MapObject::new())),
        ("regexp", Value::object(RegExp::new("^a+$"))),
        ("error", Value::object(ErrorObject::new("boom"))),
        ("instance", Value::object(Instance::new("Session"))),
        (
            "lookalike",
            logvalue!({ "getTime": (Callable::arrow()) }),
        ),
    ];

    println!("Classification:");
    for (label, value) in &samples {
        println!(
            "  {:<10} kind={:?} categories={:?} tag={:?} -> {}",
            label,
            classify(value),
            categories(value),
            special_tag(value).map(|t| t.name().to_string()),
            stringify(value)
        );
    }

    Ok(())
}
