//! Customizing output with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use logvalue::host::{MapObject, SetObject};
use logvalue::{
    logvalue, stringify, stringify_with_options, FormatOptions, PlaceholderStyle, RecordRef, Value,
};

fn main() {
    let record = RecordRef::new();
    record.insert("cache", Value::object(MapObject::new()));
    record.insert("seen", Value::object(SetObject::new()));
    record.insert("self", Value::from(record.clone()));
    let value = Value::from(record.clone());

    println!("Default (angle placeholders):");
    println!("  {}\n", stringify(&value));

    println!("Square placeholders:");
    let square = FormatOptions::new().with_placeholder(PlaceholderStyle::Square);
    println!("  {}\n", stringify_with_options(&value, &square));

    let deep = logvalue!({ "a": { "b": { "c": { "d": [1, 2, 3] } } } });
    println!("Depth cap of 2:");
    let shallow = FormatOptions::new().with_max_depth(2);
    println!("  {}\n", stringify_with_options(&deep, &shallow));

    let long = Value::array(0..100);
    println!("Element cap of 5:");
    let short = FormatOptions::new().with_max_elements(5);
    println!("  {}", stringify_with_options(&long, &short));

    record.clear();
}
