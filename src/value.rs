//! Dynamic value representation for runtime data headed into log lines.
//!
//! This module provides the [`Value`] enum, a closed sum type that can hold any
//! value a logging call might receive: primitives, date instants, ordered
//! sequences, plain key-value records, callables, and opaque host objects.
//!
//! ## Core Types
//!
//! - [`Value`]: Any loggable value
//! - [`Number`]: Numeric values including the special values (Infinity, -Infinity, NaN)
//! - [`Symbol`]: A unique token with an optional description
//! - [`ArrayRef`] / [`RecordRef`]: Shared, identity-carrying container handles
//! - [`ObjectRef`]: A shared handle to an opaque [`HostObject`]
//!
//! ## Identity and Aliasing
//!
//! Containers are reference types. Cloning an [`ArrayRef`] or [`RecordRef`]
//! yields another handle to the *same* container, so a graph can contain the
//! same array twice, or contain itself:
//!
//! ```rust
//! use logvalue::{stringify, ArrayRef, Value};
//!
//! let shared = ArrayRef::from(vec![Value::from(1)]);
//! let outer = Value::from(vec![Value::from(shared.clone()), Value::from(shared.clone())]);
//! assert_eq!(stringify(&outer), "[[1], [1]]");
//!
//! let looped = ArrayRef::from(vec![Value::from(1)]);
//! looped.push(Value::from(looped.clone()));
//! assert_eq!(stringify(&Value::from(looped.clone())), "[1, [<Circular>]]");
//! # looped.clear();
//! ```
//!
//! A container that holds a handle to itself keeps its allocation alive; call
//! [`ArrayRef::clear`] / [`RecordRef::clear`] to break such loops when done.
//!
//! ## Type Checking
//!
//! ```rust
//! use logvalue::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```

use crate::{Callable, HostObject, LogMap};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::cell::{BorrowError, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed representation of any loggable value.
///
/// Primitive variants are compared by value; container, callable and host
/// object variants are compared by identity, the way a host runtime compares
/// object references.
///
/// # Examples
///
/// ```rust
/// use logvalue::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    Undefined,
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Date(DateTime<Utc>),
    Array(ArrayRef),
    Record(RecordRef),
    Function(Callable),
    Object(ObjectRef),
}

/// A numeric value that can be an integer, float, or special value.
///
/// # Examples
///
/// ```rust
/// use logvalue::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let infinity = Number::from_f64(f64::INFINITY);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert_eq!(infinity, Number::Infinity);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Builds a number from an `f64`, mapping non-finite inputs to the special variants.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::Number;
    ///
    /// assert!(Number::Infinity.is_special());
    /// assert!(Number::NaN.is_special());
    /// assert!(!Number::Integer(42).is_special());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it holds a whole value in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

/// Host-style number text: shortest round-trip digits, `-0` as `0`, and
/// exponent form with an explicit sign outside `[1e-6, 1e21)`.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&text),
        };
    }
    write!(f, "{}", value)
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write_float(f, *fl),
            Number::Infinity => f.write_str("Infinity"),
            Number::NegativeInfinity => f.write_str("-Infinity"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from_f64(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
    }
}

/// A unique token with an optional description, rendered as `Symbol(<description>)`.
///
/// # Examples
///
/// ```rust
/// use logvalue::Symbol;
///
/// assert_eq!(Symbol::new("id").to_string(), "Symbol(id)");
/// assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Symbol {
            description: Some(description.into()),
        }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Symbol { description: None }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// Identity of a shared container or host object, stable while the value is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    fn of<T: ?Sized>(rc: &Rc<T>) -> Self {
        ObjectId(Rc::as_ptr(rc) as *const () as usize)
    }
}

/// A shared handle to an ordered sequence of values.
///
/// Clones alias the same sequence; equality is identity.
#[derive(Clone, Default)]
pub struct ArrayRef(Rc<RefCell<Vec<Value>>>);

impl ArrayRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        ObjectId::of(&self.0)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Appends a value. Pushing a handle to this same array creates a cycle.
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a clone of the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Removes every element, breaking any self-reference held by this array.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, Vec<Value>>, BorrowError> {
        self.0.try_borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Elements are not walked: the array may contain itself.
        let mut s = f.debug_struct("ArrayRef");
        s.field("id", &self.id());
        match self.0.try_borrow() {
            Ok(items) => {
                let len = items.len();
                s.field("len", &len);
            }
            Err(_) => {
                s.field("len", &"<borrowed>");
            }
        }
        s.finish()
    }
}

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl From<Vec<Value>> for ArrayRef {
    fn from(values: Vec<Value>) -> Self {
        ArrayRef(Rc::new(RefCell::new(values)))
    }
}

impl FromIterator<Value> for ArrayRef {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        ArrayRef::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// A shared handle to a plain key-value record.
///
/// Clones alias the same record; equality is identity.
#[derive(Clone, Default)]
pub struct RecordRef(Rc<RefCell<LogMap>>);

impl RecordRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        ObjectId::of(&self.0)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &RecordRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Inserts a field. Inserting a handle to this same record creates a cycle.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value)
    }

    /// Returns a clone of the field stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Removes every field, breaking any self-reference held by this record.
    pub fn clear(&self) {
        *self.0.borrow_mut() = LogMap::new();
    }

    pub fn borrow(&self) -> Ref<'_, LogMap> {
        self.0.borrow()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, LogMap>, BorrowError> {
        self.0.try_borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, LogMap> {
        self.0.borrow_mut()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RecordRef");
        s.field("id", &self.id());
        match self.0.try_borrow() {
            Ok(map) => {
                let keys: Vec<&String> = map.keys().collect();
                s.field("keys", &keys);
            }
            Err(_) => {
                s.field("keys", &"<borrowed>");
            }
        }
        s.finish()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl From<LogMap> for RecordRef {
    fn from(map: LogMap) -> Self {
        RecordRef(Rc::new(RefCell::new(map)))
    }
}

/// A shared handle to an opaque host object.
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn HostObject>);

impl ObjectRef {
    pub fn new<T: HostObject>(object: T) -> Self {
        ObjectRef(Rc::new(object))
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        ObjectId::of(&self.0)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Exact-type check: `true` only if the wrapped object is a `T`.
    #[must_use]
    pub fn is<T: HostObject>(&self) -> bool {
        self.host().as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: HostObject>(&self) -> Option<&T> {
        // Through the trait object: `Rc` itself also implements `AsAny`.
        self.host().as_any().downcast_ref::<T>()
    }

    #[must_use]
    pub fn host(&self) -> &dyn HostObject {
        self.0.as_ref()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0.as_ref(), f)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Value {
    /// Builds an array value from any iterator of values.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds a record value from key-value pairs, keeping their order.
    pub fn record<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let map: LogMap = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Record(RecordRef::from(map))
    }

    /// Wraps a host object.
    pub fn object<T: HostObject>(object: T) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Value::Record(rec) => Some(rec),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify(self))
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(ref n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("cannot convert {} to i64", n))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(value)),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(ArrayRef::from(value))
    }
}

impl From<ArrayRef> for Value {
    fn from(value: ArrayRef) -> Self {
        Value::Array(value)
    }
}

impl From<LogMap> for Value {
    fn from(value: LogMap) -> Self {
        Value::Record(RecordRef::from(value))
    }
}

impl From<RecordRef> for Value {
    fn from(value: RecordRef) -> Self {
        Value::Record(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Function(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}
