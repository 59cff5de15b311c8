//! Rendering common values into log text.
//!
//! Run with: cargo run --example simple

use chrono::{TimeZone, Utc};
use logvalue::{stringify, to_value, Callable, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: Some("alice@example.com".to_string()),
        },
        User {
            id: 43,
            name: "Bob \"the builder\" Smith".to_string(),
            email: None,
        },
    ];

    let value = to_value(&users)?;
    println!("Users:\n  {}\n", stringify(&value));

    println!("Primitives:");
    println!("  {}", stringify(&Value::from("multi\nline")));
    println!("  {}", stringify(&Value::from(0.1 + 0.2)));
    println!("  {}", stringify(&Value::from(f64::NAN)));
    println!("  {}", stringify(&Value::Undefined));

    let started = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 45).single();
    if let Some(started) = started {
        println!("  {}", stringify(&Value::from(started)));
    }

    fn on_shutdown() {}
    println!("  {}", stringify(&Value::from(Callable::of(&on_shutdown))));
    println!("  {}", stringify(&Value::from(Callable::of(&|| ()))));

    Ok(())
}
