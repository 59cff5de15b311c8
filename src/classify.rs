//! Kind classification and special type tags.
//!
//! [`classify`] sorts every value into exactly one [`ValueKind`]. The checks
//! are nominal: a record is a record because it is a [`Value::Record`], and a
//! date is a date because it is a [`Value::Date`]. A record that happens to
//! carry a `getTime` callable is still a plain record.
//!
//! [`special_tag`] picks the placeholder label for values that are rendered
//! opaquely.

use crate::host::{
    ArrayBuffer, DataView, ErrorObject, MapObject, RegExp, SetObject, TypedArray, Url,
    UrlSearchParams,
};
use crate::{ObjectRef, Value};

/// The two shapes of container that are walked during rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Array,
    Record,
}

/// The primary semantic kind of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Indivisible primitive, rendered directly.
    Atomic,
    /// A value wrapping one datum. Only dates qualify.
    SingleValue,
    Collection(CollectionKind),
    /// Callables and opaque host objects.
    Unclassified,
}

/// Category flags. A value may belong to several at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Atomic,
    SingleValue,
    Collection,
    DefinedData,
}

/// Classifies a value.
///
/// # Examples
///
/// ```rust
/// use logvalue::{classify, CollectionKind, Value, ValueKind};
///
/// assert_eq!(classify(&Value::Null), ValueKind::Atomic);
/// assert_eq!(classify(&Value::from(f64::NAN)), ValueKind::Atomic);
/// assert_eq!(
///     classify(&Value::array(vec![1, 2])),
///     ValueKind::Collection(CollectionKind::Array)
/// );
/// ```
#[must_use]
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::BigInt(_)
        | Value::String(_)
        | Value::Symbol(_) => ValueKind::Atomic,
        Value::Date(_) => ValueKind::SingleValue,
        Value::Array(_) => ValueKind::Collection(CollectionKind::Array),
        Value::Record(_) => ValueKind::Collection(CollectionKind::Record),
        Value::Function(_) | Value::Object(_) => ValueKind::Unclassified,
    }
}

/// Lists every category a value belongs to.
///
/// Plain records are both [`ValueCategory::Collection`] and
/// [`ValueCategory::DefinedData`]; callables and host objects belong to none.
#[must_use]
pub fn categories(value: &Value) -> Vec<ValueCategory> {
    match classify(value) {
        ValueKind::Atomic => vec![ValueCategory::Atomic],
        ValueKind::SingleValue => vec![ValueCategory::SingleValue],
        ValueKind::Collection(CollectionKind::Array) => vec![ValueCategory::Collection],
        ValueKind::Collection(CollectionKind::Record) => {
            vec![ValueCategory::Collection, ValueCategory::DefinedData]
        }
        ValueKind::Unclassified => Vec::new(),
    }
}

#[must_use]
pub fn is_atomic(value: &Value) -> bool {
    classify(value) == ValueKind::Atomic
}

#[must_use]
pub fn is_single_value(value: &Value) -> bool {
    classify(value) == ValueKind::SingleValue
}

#[must_use]
pub fn is_collection(value: &Value) -> bool {
    matches!(classify(value), ValueKind::Collection(_))
}

/// `true` for plain records only; overlaps with [`is_collection`].
#[must_use]
pub fn is_defined_data(value: &Value) -> bool {
    matches!(value, Value::Record(_))
}

#[must_use]
pub fn is_callable(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Placeholder label for a value that is not walked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecialTag {
    Date,
    RegExp,
    Error,
    Url,
    UrlSearchParams,
    Map,
    Set,
    TypedArray,
    ArrayBuffer,
    DataView,
    /// A constructed class instance, carrying its constructor name.
    CustomClass(String),
}

impl SpecialTag {
    /// The text placed between the placeholder brackets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::SpecialTag;
    ///
    /// assert_eq!(SpecialTag::Url.name(), "URL");
    /// assert_eq!(SpecialTag::CustomClass("Foo".into()).name(), "Foo");
    /// ```
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            SpecialTag::Date => "Date",
            SpecialTag::RegExp => "RegExp",
            SpecialTag::Error => "Error",
            SpecialTag::Url => "URL",
            SpecialTag::UrlSearchParams => "URLSearchParams",
            SpecialTag::Map => "Map",
            SpecialTag::Set => "Set",
            SpecialTag::TypedArray => "TypedArray",
            SpecialTag::ArrayBuffer => "ArrayBuffer",
            SpecialTag::DataView => "DataView",
            SpecialTag::CustomClass(name) => name,
        }
    }
}

/// Resolves the placeholder tag of a date or host object.
///
/// Returns `None` for atomics, containers, callables, and host objects that
/// are neither a built-in opaque type nor a named class instance.
///
/// # Examples
///
/// ```rust
/// use logvalue::host::{Instance, MapObject};
/// use logvalue::{special_tag, SpecialTag, Value};
///
/// assert_eq!(special_tag(&Value::object(MapObject::new())), Some(SpecialTag::Map));
/// assert_eq!(
///     special_tag(&Value::object(Instance::new("Foo"))),
///     Some(SpecialTag::CustomClass("Foo".to_string()))
/// );
/// assert_eq!(special_tag(&Value::from(1)), None);
/// ```
#[must_use]
pub fn special_tag(value: &Value) -> Option<SpecialTag> {
    match value {
        Value::Date(_) => Some(SpecialTag::Date),
        Value::Object(object) => object_tag(object),
        _ => None,
    }
}

fn object_tag(object: &ObjectRef) -> Option<SpecialTag> {
    let tag = if object.is::<RegExp>() {
        SpecialTag::RegExp
    } else if object.is::<ErrorObject>() {
        SpecialTag::Error
    } else if object.is::<Url>() {
        SpecialTag::Url
    } else if object.is::<UrlSearchParams>() {
        SpecialTag::UrlSearchParams
    } else if object.is::<MapObject>() {
        SpecialTag::Map
    } else if object.is::<SetObject>() {
        SpecialTag::Set
    } else if object.is::<TypedArray>() {
        SpecialTag::TypedArray
    } else if object.is::<ArrayBuffer>() {
        SpecialTag::ArrayBuffer
    } else if object.is::<DataView>() {
        SpecialTag::DataView
    } else {
        let name = object.host().constructor_name()?;
        SpecialTag::CustomClass(name.to_string())
    };
    Some(tag)
}
