//! # logvalue
//!
//! Deterministic, cycle-safe, single-line stringification of heterogeneous
//! runtime values for human-readable log lines.
//!
//! ## What does it do?
//!
//! Logging calls receive anything: text, numbers, nested arrays and records,
//! dates, callables, opaque objects, and graphs that point back at
//! themselves. `logvalue` turns any such [`Value`] into one JSON-like line,
//! never panicking and never looping:
//!
//! - **Total**: every value has a defined rendering, worst case a placeholder
//! - **Cycle-safe**: self-references render as `[<Circular>]` / `{<Circular>}`
//! - **Deterministic**: record keys keep insertion order, numbers print the
//!   same way every time
//! - **Nominal classification**: a record carrying a `getTime` callable is
//!   still a record, never mistaken for a date
//!
//! ## Quick Start
//!
//! ```rust
//! use logvalue::{logvalue, stringify, Callable, Value};
//!
//! let value = logvalue!({
//!     "user": "alice",
//!     "scores": [1, 2.5, null],
//!     "retry": true
//! });
//! assert_eq!(
//!     stringify(&value),
//!     r#"{"user": "alice", "scores": [1, 2.5, null], "retry": true}"#
//! );
//!
//! assert_eq!(stringify(&Value::from(Callable::function("onTick"))), "[Function: onTick]");
//! assert_eq!(stringify(&Value::from(f64::NAN)), "NaN");
//! ```
//!
//! ### Cycles
//!
//! ```rust
//! use logvalue::{stringify, RecordRef, Value};
//!
//! let node = RecordRef::new();
//! node.insert("a", Value::from(1));
//! node.insert("self", Value::from(node.clone()));
//! assert_eq!(stringify(&Value::from(node.clone())), r#"{"a": 1, "self": {<Circular>}}"#);
//! # node.clear();
//! ```
//!
//! ### Opaque objects
//!
//! ```rust
//! use logvalue::host::{Instance, MapObject, RegExp};
//! use logvalue::{stringify, Value};
//!
//! assert_eq!(stringify(&Value::object(MapObject::new())), "<Map>");
//! assert_eq!(stringify(&Value::object(RegExp::new("x"))), "<RegExp>");
//! assert_eq!(stringify(&Value::object(Instance::new("Foo"))), "<Foo>");
//! ```
//!
//! ### From any `Serialize` type
//!
//! ```rust
//! use logvalue::{stringify, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(stringify(&value), r#"{"x": 1, "y": 2}"#);
//! ```
//!
//! ## Log lines
//!
//! [`parse_log_args`], [`format_values`] and [`create_log_message`] assemble
//! complete lines of the form `<timestamp> <LABEL> <message> <values>`.
//!
//! ## Diagnostics
//!
//! Circular substitutions, depth and element caps, and generic-coercion
//! fallbacks are reported as `tracing` events at `trace`/`debug` level. The
//! library never installs a subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Rendering common values
//! - **`macro.rs`** - Building values with the logvalue! macro
//! - **`circular.rs`** - Self-referencing and aliased containers
//! - **`dynamic_values.rs`** - Inspecting and classifying values
//! - **`custom_options.rs`** - Placeholder style, depth and element caps
//! - **`log_line.rs`** - Assembling full log lines
//!
//! Run any example with: `cargo run --example <name>`

pub mod callable;
pub mod classify;
pub mod compose;
pub mod convert;
pub mod error;
pub mod escape;
pub mod guard;
pub mod host;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod timestamp;
pub mod value;

pub use callable::{Callable, CallableForm};
pub use classify::{
    categories, classify, is_atomic, is_callable, is_collection, is_defined_data,
    is_single_value, special_tag, CollectionKind, SpecialTag, ValueCategory, ValueKind,
};
pub use compose::{
    create_log_message, format_messages, format_values, is_stringifiable, parse_log_args,
    LogMessage,
};
pub use convert::{to_value, ValueSerializer};
pub use error::{Error, Result};
pub use escape::escape;
pub use guard::CycleGuard;
pub use host::HostObject;
pub use map::LogMap;
pub use options::{FormatOptions, PlaceholderStyle};
pub use render::{render_array, render_record, render_value, Stringifier};
pub use timestamp::{is_timestamp, parse_timestamp, render_timestamp};
pub use value::{ArrayRef, Number, ObjectId, ObjectRef, RecordRef, Symbol, Value};

/// Renders any value with default options.
///
/// Each call uses its own cycle guard.
///
/// # Examples
///
/// ```rust
/// use logvalue::{stringify, Value};
///
/// assert_eq!(stringify(&Value::array(Vec::<Value>::new())), "[]");
/// assert_eq!(stringify(&Value::from("line\nbreak")), r#""line\nbreak""#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    stringify_with_options(value, &FormatOptions::default())
}

/// Renders any value with custom options.
///
/// # Examples
///
/// ```rust
/// use logvalue::{logvalue, stringify_with_options, FormatOptions};
///
/// let options = FormatOptions::new().with_max_elements(2);
/// assert_eq!(stringify_with_options(&logvalue!([1, 2, 3]), &options), "[1, 2, ...]");
/// ```
#[must_use]
pub fn stringify_with_options(value: &Value, options: &FormatOptions) -> String {
    let mut guard = CycleGuard::new();
    render_value(value, options, &mut guard)
}
