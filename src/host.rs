//! Opaque host objects.
//!
//! Anything that is neither a primitive, a date, an ordered sequence, a plain
//! record, nor a callable is a host object: regular expressions, errors, URLs,
//! keyed collections, binary buffers and user class instances. These render
//! as placeholders (`<Map>`, `<RegExp>`, `<Person>`) rather than being walked,
//! so their contents are carried here only so the values are realistic.
//!
//! Implement [`HostObject`] to plug your own opaque types in:
//!
//! ```rust
//! use logvalue::{stringify, HostObject, Value};
//!
//! #[derive(Debug)]
//! struct Connection {
//!     peer: String,
//! }
//!
//! impl HostObject for Connection {
//!     fn constructor_name(&self) -> Option<&str> {
//!         Some("Connection")
//!     }
//! }
//!
//! let value = Value::object(Connection { peer: "10.0.0.1".into() });
//! assert_eq!(stringify(&value), "<Connection>");
//! ```

use crate::{LogMap, Value};
use std::any::Any;
use std::fmt;

/// Upcast helper so trait objects can be downcast to their exact type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An object whose contents are never rendered.
pub trait HostObject: AsAny + fmt::Debug {
    /// Name of the constructor that produced this object, if it is a class instance.
    fn constructor_name(&self) -> Option<&str> {
        None
    }

    /// Generic text coercion used when no placeholder applies.
    fn coerce(&self) -> String {
        "[object Object]".to_string()
    }
}

/// A compiled pattern matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegExp {
    pub source: String,
    pub flags: String,
}

impl RegExp {
    pub fn new(source: impl Into<String>) -> Self {
        RegExp {
            source: source.into(),
            flags: String::new(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }
}

impl HostObject for RegExp {
    fn coerce(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }
}

/// An error object. Subclasses are expressed through `name` (`TypeError`, `RangeError`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorObject {
    pub name: String,
    pub message: String,
}

impl ErrorObject {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorObject {
            name: "Error".to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl HostObject for ErrorObject {
    fn coerce(&self) -> String {
        if self.message.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.message)
        }
    }
}

/// A parsed URL, kept as its serialized form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url {
    pub href: String,
}

impl Url {
    pub fn new(href: impl Into<String>) -> Self {
        Url { href: href.into() }
    }
}

impl HostObject for Url {
    fn coerce(&self) -> String {
        self.href.clone()
    }
}

/// Query-string parameters, in insertion order, duplicates allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    pub pairs: Vec<(String, String)>,
}

impl UrlSearchParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }
}

impl HostObject for UrlSearchParams {
    fn coerce(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A keyed collection whose keys may be any value.
#[derive(Clone, Debug, Default)]
pub struct MapObject {
    pub entries: Vec<(Value, Value)>,
}

impl MapObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HostObject for MapObject {}

/// A collection of distinct values.
#[derive(Clone, Debug, Default)]
pub struct SetObject {
    pub items: Vec<Value>,
}

impl SetObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: Value) {
        if !self.items.contains(&value) {
            self.items.push(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl HostObject for SetObject {}

/// Element type of a [`TypedArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl ElementType {
    #[must_use]
    pub const fn byte_width(&self) -> usize {
        match self {
            ElementType::Int8 | ElementType::Uint8 | ElementType::Uint8Clamped => 1,
            ElementType::Int16 | ElementType::Uint16 => 2,
            ElementType::Int32 | ElementType::Uint32 | ElementType::Float32 => 4,
            ElementType::Float64 | ElementType::BigInt64 | ElementType::BigUint64 => 8,
        }
    }
}

/// A fixed-width numeric view over raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedArray {
    pub element: ElementType,
    pub bytes: Vec<u8>,
}

impl TypedArray {
    pub fn zeroed(element: ElementType, len: usize) -> Self {
        TypedArray {
            element,
            bytes: vec![0; len * element.byte_width()],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.element.byte_width()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl HostObject for TypedArray {}

/// A raw byte buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayBuffer {
    pub bytes: Vec<u8>,
}

impl ArrayBuffer {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        ArrayBuffer {
            bytes: bytes.into(),
        }
    }

    pub fn zeroed(len: usize) -> Self {
        ArrayBuffer { bytes: vec![0; len] }
    }
}

impl HostObject for ArrayBuffer {}

/// A byte window into a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataView {
    pub buffer: ArrayBuffer,
    pub byte_offset: usize,
    pub byte_length: usize,
}

impl DataView {
    /// Creates a view; the window is clamped to the buffer bounds.
    pub fn new(buffer: ArrayBuffer, byte_offset: usize, byte_length: usize) -> Self {
        let byte_offset = byte_offset.min(buffer.bytes.len());
        let byte_length = byte_length.min(buffer.bytes.len() - byte_offset);
        DataView {
            buffer,
            byte_offset,
            byte_length,
        }
    }
}

impl HostObject for DataView {}

/// An instance of a user-defined class.
///
/// Even an instance with no fields is not a plain record: it renders as
/// `<ClassName>`.
#[derive(Clone, Debug)]
pub struct Instance {
    class_name: String,
    pub fields: LogMap,
}

impl Instance {
    pub fn new(class_name: impl Into<String>) -> Self {
        Instance {
            class_name: class_name.into(),
            fields: LogMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl HostObject for Instance {
    fn constructor_name(&self) -> Option<&str> {
        if self.class_name.is_empty() {
            None
        } else {
            Some(&self.class_name)
        }
    }
}
