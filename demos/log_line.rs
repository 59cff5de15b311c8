//! Assembling complete log lines.
//!
//! Run with: cargo run --example log_line

use logvalue::host::ErrorObject;
use logvalue::{
    create_log_message, is_timestamp, logvalue, parse_log_args, parse_timestamp, FormatOptions,
    Value,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = FormatOptions::default();

    let message = parse_log_args(
        "info",
        vec![
            Value::from("User logged in from"),
            Value::from("192.168.1.1"),
            logvalue!({ "userId": 123, "sessionId": "abc123" }),
        ],
        None,
    );
    println!("{}", create_log_message(&message, &options));

    let raw = "2025-12-12T12:00:00Z";
    println!("\n{:?} is a timestamp: {}", raw, is_timestamp(raw));
    let at = parse_timestamp(raw)?;

    let message = parse_log_args(
        "error",
        vec![
            Value::from("request failed"),
            Value::from(503),
            Value::object(ErrorObject::new("upstream timeout")),
            logvalue!({ "retries": 3 }),
        ],
        Some(at),
    );
    println!("{}", create_log_message(&message, &options));
    println!(
        "{}",
        create_log_message(&message, &FormatOptions::new().with_show_millis(true))
    );

    match parse_timestamp("yesterday") {
        Ok(_) => println!("unexpected"),
        Err(err) => println!("\nRejected: {}", err),
    }

    Ok(())
}
