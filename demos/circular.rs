//! Self-referencing and aliased containers.
//!
//! Run with: cargo run --example circular

use logvalue::{stringify, ArrayRef, RecordRef, Value};

fn main() {
    // An array that contains itself
    let list = ArrayRef::from(vec![Value::from(1)]);
    list.push(Value::from(list.clone()));
    println!("Self-referencing array:  {}", stringify(&Value::from(list.clone())));

    // A record that contains itself
    let node = RecordRef::new();
    node.insert("name", Value::from("root"));
    node.insert("self", Value::from(node.clone()));
    println!("Self-referencing record: {}", stringify(&Value::from(node.clone())));

    // Parent and child pointing at each other
    let parent = RecordRef::new();
    let child = RecordRef::new();
    parent.insert("child", Value::from(child.clone()));
    child.insert("parent", Value::from(parent.clone()));
    println!("Mutual references:       {}", stringify(&Value::from(parent.clone())));

    // The same array twice is not a cycle
    let shared = ArrayRef::from(vec![Value::from("x")]);
    let pair = Value::array(vec![Value::from(shared.clone()), Value::from(shared)]);
    println!("Shared sibling arrays:   {}", stringify(&pair));

    // Break the loops so the allocations are released
    list.clear();
    node.clear();
    parent.clear();
    child.clear();
}
