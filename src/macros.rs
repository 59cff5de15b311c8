/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Supports `null`, `undefined`, `true`, `false`, arrays, records with
/// string-literal keys, and any expression convertible with `Value::from`.
///
/// ```rust
/// use logvalue::{logvalue, stringify};
///
/// let value = logvalue!({
///     "name": "Alice",
///     "tags": ["admin", null],
///     "missing": undefined
/// });
/// assert_eq!(
///     stringify(&value),
///     r#"{"name": "Alice", "tags": ["admin", null], "missing": undefined}"#
/// );
/// ```
#[macro_export]
macro_rules! logvalue {
    (null) => {
        $crate::Value::Null
    };

    (undefined) => {
        $crate::Value::Undefined
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::ArrayRef::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::from(vec![$($crate::logvalue!($elem)),*])
    };

    ({}) => {
        $crate::Value::Record($crate::RecordRef::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::LogMap::new();
        $(
            record.insert($key.to_string(), $crate::logvalue!($value));
        )*
        $crate::Value::from(record)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
