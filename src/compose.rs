//! Log line assembly.
//!
//! A logging call takes a label and a free list of arguments. Arguments
//! simple enough to read as text (strings, numbers, booleans, symbols, null,
//! undefined) become the message; everything else is kept as a structured
//! value and rendered after it:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use logvalue::{create_log_message, logvalue, parse_log_args, FormatOptions, Value};
//!
//! let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 45).unwrap();
//! let message = parse_log_args(
//!     "info",
//!     vec![Value::from("user logged in"), logvalue!({ "userId": 123 })],
//!     Some(at),
//! );
//! assert_eq!(
//!     create_log_message(&message, &FormatOptions::default()),
//!     r#"2025-01-15T10:30:45Z INFO user logged in {"userId": 123}"#
//! );
//! ```

use crate::render::Stringifier;
use crate::timestamp::render_timestamp;
use crate::{CycleGuard, FormatOptions, Value};
use chrono::{DateTime, Utc};

/// One parsed logging call.
#[derive(Clone, Debug, PartialEq)]
pub struct LogMessage {
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<String>,
    pub values: Vec<Value>,
}

impl LogMessage {
    pub fn new(label: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        LogMessage {
            label: label.into(),
            timestamp,
            messages: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Routes one argument to `messages` or `values`.
    pub fn push_arg(&mut self, arg: Value) {
        match plain_text(&arg) {
            Some(text) => self.messages.push(text),
            None => self.values.push(arg),
        }
    }
}

/// Returns `true` if the value reads naturally as message text.
///
/// Big integers are excluded, as are every container, date, callable and
/// host object.
///
/// # Examples
///
/// ```rust
/// use logvalue::{is_stringifiable, Value};
///
/// assert!(is_stringifiable(&Value::from(f64::NAN)));
/// assert!(is_stringifiable(&Value::Undefined));
/// assert!(!is_stringifiable(&Value::array(vec![1])));
/// ```
#[must_use]
pub fn is_stringifiable(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Symbol(_)
    )
}

/// Unquoted text for message arguments.
fn plain_text(value: &Value) -> Option<String> {
    match value {
        Value::Undefined => Some("undefined".to_string()),
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Symbol(s) => Some(s.to_string()),
        _ => None,
    }
}

/// Splits raw logging arguments into message text and structured values.
///
/// Argument order is kept within each group. Without a default timestamp the
/// current time is used.
pub fn parse_log_args<I>(
    label: impl Into<String>,
    args: I,
    default_timestamp: Option<DateTime<Utc>>,
) -> LogMessage
where
    I: IntoIterator<Item = Value>,
{
    let mut message = LogMessage::new(label, default_timestamp.unwrap_or_else(Utc::now));
    for arg in args {
        message.push_arg(arg);
    }
    message
}

/// Joins message parts with single spaces.
#[must_use]
pub fn format_messages<S: AsRef<str>>(messages: &[S]) -> String {
    messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the structured values of one logging call.
///
/// No values give an empty string, one value gives its bare rendering, and
/// more give `{v1, v2, ...}`. All values share one cycle guard.
///
/// # Examples
///
/// ```rust
/// use logvalue::{format_values, logvalue, FormatOptions, Value};
///
/// let options = FormatOptions::default();
/// assert_eq!(format_values(&[], &options), "");
/// assert_eq!(format_values(&[Value::Null], &options), "null");
/// assert_eq!(
///     format_values(&[logvalue!({ "a": 1 }), logvalue!({ "b": 2 })], &options),
///     r#"{{"a": 1}, {"b": 2}}"#
/// );
/// ```
#[must_use]
pub fn format_values(values: &[Value], options: &FormatOptions) -> String {
    let mut guard = CycleGuard::new();
    let mut stringifier = Stringifier::new(options, &mut guard);
    match values {
        [] => {}
        [single] => stringifier.write_value(single),
        many => {
            stringifier.write_raw("{");
            for (i, value) in many.iter().enumerate() {
                if i > 0 {
                    stringifier.write_raw(", ");
                }
                stringifier.write_value(value);
            }
            stringifier.write_raw("}");
        }
    }
    stringifier.into_inner()
}

/// Assembles `<timestamp> <LABEL> <message> <values>`, dropping empty parts.
#[must_use]
pub fn create_log_message(message: &LogMessage, options: &FormatOptions) -> String {
    let parts = [
        render_timestamp(&message.timestamp, options.show_millis),
        message.label.to_uppercase(),
        format_messages(&message.messages),
        format_values(&message.values, options),
    ];
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Callable, Symbol};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_736_937_045_123).unwrap()
    }

    #[test]
    fn test_stringifiable_kinds() {
        assert!(is_stringifiable(&Value::Null));
        assert!(is_stringifiable(&Value::from(Symbol::new("s"))));
        assert!(is_stringifiable(&Value::from(f64::NEG_INFINITY)));
        assert!(!is_stringifiable(&Value::from(num_bigint::BigInt::from(1))));
        assert!(!is_stringifiable(&Value::from(Callable::arrow())));
        assert!(!is_stringifiable(&Value::from(at())));
    }

    #[test]
    fn test_parse_routes_arguments() {
        let message = parse_log_args(
            "debug",
            vec![
                Value::from("count"),
                Value::from(3),
                Value::array(vec![1]),
                Value::Null,
                Value::from(Symbol::new("tag")),
                Value::from(num_bigint::BigInt::from(7)),
            ],
            Some(at()),
        );
        assert_eq!(message.messages, vec!["count", "3", "null", "Symbol(tag)"]);
        assert_eq!(message.values.len(), 2);
        assert_eq!(message.timestamp, at());
    }

    #[test]
    fn test_parse_defaults_to_now() {
        let before = Utc::now();
        let message = parse_log_args("info", Vec::new(), None);
        assert!(message.timestamp >= before);
    }

    #[test]
    fn test_format_messages() {
        assert_eq!(format_messages(&["Error", "404", "Not found"]), "Error 404 Not found");
        assert_eq!(format_messages::<&str>(&[]), "");
    }

    #[test]
    fn test_shared_guard_across_values() {
        let looped = crate::ArrayRef::from(vec![Value::from(1)]);
        looped.push(Value::from(looped.clone()));
        let values = vec![Value::from(looped.clone()), Value::from(looped.clone())];
        assert_eq!(
            format_values(&values, &FormatOptions::default()),
            "{[1, [<Circular>]], [1, [<Circular>]]}"
        );
        looped.clear();
    }

    #[test]
    fn test_create_log_message() {
        let mut message = LogMessage::new("warn", at());
        message.push_arg(Value::from("disk"));
        message.push_arg(Value::from(91.5));
        message.push_arg(Value::record(vec![("mount", Value::from("/"))]));

        assert_eq!(
            create_log_message(&message, &FormatOptions::default()),
            r#"2025-01-15T10:30:45Z WARN disk 91.5 {"mount": "/"}"#
        );
        assert_eq!(
            create_log_message(&message, &FormatOptions::new().with_show_millis(true)),
            r#"2025-01-15T10:30:45.123Z WARN disk 91.5 {"mount": "/"}"#
        );
    }

    #[test]
    fn test_empty_parts_are_dropped() {
        let message = LogMessage::new("", at());
        assert_eq!(
            create_log_message(&message, &FormatOptions::default()),
            "2025-01-15T10:30:45Z"
        );
    }
}
