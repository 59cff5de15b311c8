//! The value renderer.
//!
//! [`Stringifier`] walks a [`Value`] graph and writes its single-line text
//! into an internal buffer. Dispatch, in order:
//!
//! 1. Atomic values: direct text (strings escaped and quoted).
//! 2. Callables: `[Function: name]`, `[Method: name]` or `[Function:]`.
//! 3. Arrays: `[e1, e2]`, recursively.
//! 4. Plain records: `{"k1": v1, "k2": v2}`, recursively.
//! 5. Dates and host objects: a special tag placeholder (`<Map>`, `<Foo>`),
//!    a full timestamp for dates, or the object's generic coercion.
//!
//! Containers are tracked in a [`CycleGuard`] while their elements render. A
//! container met again on its own descent path renders as `[<Circular>]` or
//! `{<Circular>}` and is not walked a second time.
//!
//! Nesting is bounded by [`MAX_NESTING_DEPTH`] even when no depth cap is
//! configured; containers below it render as `[...]` / `{...}`.

use crate::classify::{classify, special_tag, SpecialTag};
use crate::escape::write_escaped;
use crate::timestamp::render_timestamp;
use crate::{ArrayRef, CycleGuard, FormatOptions, RecordRef, Value};
use tracing::{debug, trace};

const CIRCULAR: &str = "<Circular>";
const ELLIPSIS: &str = "...";

/// Hard ceiling on container nesting, applied on top of
/// [`FormatOptions::max_depth`] so arbitrarily deep graphs cannot exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Writes values into a string buffer, sharing one cycle guard across calls.
///
/// # Examples
///
/// ```rust
/// use logvalue::{CycleGuard, FormatOptions, Stringifier, Value};
///
/// let options = FormatOptions::default();
/// let mut guard = CycleGuard::new();
/// let mut stringifier = Stringifier::new(&options, &mut guard);
/// stringifier.write_value(&Value::array(vec![1, 2]));
/// assert_eq!(stringifier.into_inner(), "[1, 2]");
/// ```
pub struct Stringifier<'a> {
    output: String,
    options: &'a FormatOptions,
    guard: &'a mut CycleGuard,
    depth: usize,
}

impl<'a> Stringifier<'a> {
    pub fn new(options: &'a FormatOptions, guard: &'a mut CycleGuard) -> Self {
        Stringifier {
            output: String::with_capacity(64),
            options,
            guard,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends raw text without any escaping.
    pub fn write_raw(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Undefined => self.output.push_str("undefined"),
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::BigInt(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => write_escaped(&mut self.output, s),
            Value::Symbol(s) => self.output.push_str(&s.to_string()),
            Value::Function(callable) => {
                self.output.push('[');
                self.output.push_str(&callable.render());
                self.output.push(']');
            }
            Value::Array(array) => self.write_array(array),
            Value::Record(record) => self.write_record(record),
            Value::Date(_) | Value::Object(_) => self.write_opaque(value),
        }
    }

    pub fn write_array(&mut self, array: &ArrayRef) {
        let Ok(items) = array.try_borrow() else {
            // Mutably borrowed further up: it is being built on this path.
            self.write_circular('[', ']');
            return;
        };
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }
        if self.guard.contains(array.id()) {
            trace!(id = ?array.id(), "circular array reference");
            self.write_circular('[', ']');
            return;
        }
        if self.is_depth_exhausted() {
            trace!(depth = self.depth, "array elided at depth cap");
            self.output.push('[');
            self.output.push_str(ELLIPSIS);
            self.output.push(']');
            return;
        }

        self.guard.enter(array.id());
        self.depth += 1;
        self.output.push('[');
        for (i, item) in items.iter().enumerate() {
            if self.options.is_max_elements_reached(i) {
                trace!(len = items.len(), shown = i, "array truncated at element cap");
                self.output.push_str(", ");
                self.output.push_str(ELLIPSIS);
                break;
            }
            if i > 0 {
                self.output.push_str(", ");
            }
            self.write_value(item);
        }
        self.output.push(']');
        self.depth -= 1;
        self.guard.leave(array.id());
    }

    pub fn write_record(&mut self, record: &RecordRef) {
        let Ok(map) = record.try_borrow() else {
            self.write_circular('{', '}');
            return;
        };
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }
        if self.guard.contains(record.id()) {
            trace!(id = ?record.id(), "circular record reference");
            self.write_circular('{', '}');
            return;
        }
        if self.is_depth_exhausted() {
            trace!(depth = self.depth, "record elided at depth cap");
            self.output.push('{');
            self.output.push_str(ELLIPSIS);
            self.output.push('}');
            return;
        }

        self.guard.enter(record.id());
        self.depth += 1;
        self.output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if self.options.is_max_elements_reached(i) {
                trace!(len = map.len(), shown = i, "record truncated at element cap");
                self.output.push_str(", ");
                self.output.push_str(ELLIPSIS);
                break;
            }
            if i > 0 {
                self.output.push_str(", ");
            }
            // Keys are quoted verbatim.
            self.output.push('"');
            self.output.push_str(key);
            self.output.push_str("\": ");
            self.write_value(value);
        }
        self.output.push('}');
        self.depth -= 1;
        self.guard.leave(record.id());
    }

    fn is_depth_exhausted(&self) -> bool {
        self.depth >= MAX_NESTING_DEPTH || self.options.is_max_depth_reached(self.depth)
    }

    fn write_opaque(&mut self, value: &Value) {
        match (special_tag(value), value) {
            (Some(SpecialTag::Date), Value::Date(instant)) => {
                self.output.push_str(&render_timestamp(instant, true));
            }
            (Some(tag), _) => {
                let placeholder = self.options.placeholder.wrap(tag.name());
                self.output.push_str(&placeholder);
            }
            (None, Value::Object(object)) => {
                debug!(object = ?object.id(), "no placeholder for host object, using generic coercion");
                self.output.push_str(&object.host().coerce());
            }
            (None, other) => {
                // Unreachable for well-formed dispatch; keep rendering total.
                debug!(kind = ?classify(other), "unexpected value in opaque path");
                self.output.push_str("[object Object]");
            }
        }
    }

    fn write_circular(&mut self, open: char, close: char) {
        self.output.push(open);
        self.output.push_str(CIRCULAR);
        self.output.push(close);
    }
}

/// Renders any value with an explicit cycle guard.
///
/// # Examples
///
/// ```rust
/// use logvalue::{render_value, CycleGuard, FormatOptions, Value};
///
/// let mut guard = CycleGuard::new();
/// let text = render_value(&Value::from(f64::NAN), &FormatOptions::default(), &mut guard);
/// assert_eq!(text, "NaN");
/// ```
pub fn render_value(value: &Value, options: &FormatOptions, guard: &mut CycleGuard) -> String {
    let mut stringifier = Stringifier::new(options, guard);
    stringifier.write_value(value);
    stringifier.into_inner()
}

/// Renders an ordered sequence with an explicit cycle guard.
pub fn render_array(array: &ArrayRef, options: &FormatOptions, guard: &mut CycleGuard) -> String {
    let mut stringifier = Stringifier::new(options, guard);
    stringifier.write_array(array);
    stringifier.into_inner()
}

/// Renders a plain record with an explicit cycle guard.
///
/// # Examples
///
/// ```rust
/// use logvalue::{render_record, CycleGuard, FormatOptions, RecordRef, Value};
///
/// let record = RecordRef::new();
/// record.insert("a", Value::from(1));
/// record.insert("self", Value::from(record.clone()));
///
/// let mut guard = CycleGuard::new();
/// let text = render_record(&record, &FormatOptions::default(), &mut guard);
/// assert_eq!(text, r#"{"a": 1, "self": {<Circular>}}"#);
/// # record.clear();
/// ```
pub fn render_record(
    record: &RecordRef,
    options: &FormatOptions,
    guard: &mut CycleGuard,
) -> String {
    let mut stringifier = Stringifier::new(options, guard);
    stringifier.write_record(record);
    stringifier.into_inner()
}
