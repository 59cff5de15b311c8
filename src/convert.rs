//! Conversion from any `Serialize` type into a [`Value`] graph.
//!
//! ```rust
//! use logvalue::{stringify, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Login {
//!     user: &'static str,
//!     attempts: u32,
//!     tags: Vec<&'static str>,
//! }
//!
//! let value = to_value(&Login { user: "ada", attempts: 2, tags: vec!["web"] }).unwrap();
//! assert_eq!(stringify(&value), r#"{"user": "ada", "attempts": 2, "tags": ["web"]}"#);
//! ```
//!
//! Structs and maps become records and sequences become arrays. Unit and
//! `None` become `null`. Integers that do not fit an `i64` become big
//! integers. Byte buffers become an opaque [`ArrayBuffer`]. Enum variants
//! carrying data are externally tagged: `{"Variant": ...}`.

use crate::host::ArrayBuffer;
use crate::{Error, LogMap, Number, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Converts a `T: Serialize` into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::KeyMustBeString`] if a map key is not a string, number,
/// boolean or char, or any custom error raised by the type's `Serialize` impl.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serializer whose output is a [`Value`].
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::object(ArrayBuffer::new(v)))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            inner: SerializeVec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            inner: SerializeMap::with_capacity(len),
        })
    }
}

pub struct SerializeVec {
    vec: Vec<Value>,
}

impl SerializeVec {
    fn with_capacity(len: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }
}

pub struct SerializeMap {
    map: LogMap,
    current_key: Option<String>,
}

impl SerializeMap {
    fn with_capacity(len: usize) -> Self {
        SerializeMap {
            map: LogMap::with_capacity(len),
            current_key: None,
        }
    }
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    inner: SerializeVec,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    inner: SerializeMap,
}

fn tagged(variant: &'static str, value: Value) -> Value {
    let mut map = LogMap::with_capacity(1);
    map.insert(variant.to_string(), value);
    Value::from(map)
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::from(self.inner.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::BigInt(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) => return Err(Error::key_must_be_string("sequence")),
            Value::Record(_) => return Err(Error::key_must_be_string("map")),
            Value::Null => return Err(Error::key_must_be_string("null")),
            _ => return Err(Error::key_must_be_string("non-primitive value")),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::from(self.inner.map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stringify;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Event {
        Ping,
        Move(i32, i32),
        Rename(String),
        Resize { w: u32, h: u32 },
    }

    #[derive(Serialize)]
    struct Unit;

    #[test]
    fn test_primitives() {
        assert_eq!(to_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_value(&'x').unwrap(), Value::from("x"));
        assert_eq!(to_value(&Option::<i32>::None).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(3)).unwrap(), Value::from(3));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
        assert_eq!(to_value(&Unit).unwrap(), Value::Null);
        assert_eq!(to_value(&f64::NAN).unwrap(), Value::Number(Number::NaN));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::BigInt(BigInt::from(u64::MAX)));
        assert_eq!(to_value(&-5i128).unwrap(), Value::from(-5));
        assert_eq!(
            stringify(&to_value(&(i128::MAX)).unwrap()),
            "170141183460469231731687303715884105727"
        );
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(stringify(&to_value(&Event::Ping).unwrap()), "\"Ping\"");
        assert_eq!(
            stringify(&to_value(&Event::Move(1, -2)).unwrap()),
            r#"{"Move": [1, -2]}"#
        );
        assert_eq!(
            stringify(&to_value(&Event::Rename("x".into())).unwrap()),
            r#"{"Rename": "x"}"#
        );
        assert_eq!(
            stringify(&to_value(&Event::Resize { w: 3, h: 4 }).unwrap()),
            r#"{"Resize": {"w": 3, "h": 4}}"#
        );
    }

    #[test]
    fn test_numeric_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(
            stringify(&to_value(&map).unwrap()),
            r#"{"1": "one", "2": "two"}"#
        );
    }

    #[test]
    fn test_sequence_keys_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], "v");
        let err = to_value(&map).unwrap_err();
        assert!(matches!(err, Error::KeyMustBeString(ref found) if found == "sequence"));
    }

    #[test]
    fn test_bytes_become_array_buffer() {
        struct Raw;
        impl Serialize for Raw {
            fn serialize<S: ser::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
                s.serialize_bytes(&[1, 2, 3])
            }
        }
        let value = to_value(&Raw).unwrap();
        assert_eq!(stringify(&value), "<ArrayBuffer>");
        let bytes = value
            .as_object()
            .and_then(|o| o.downcast_ref::<ArrayBuffer>())
            .map(|b| b.bytes.clone());
        assert_eq!(bytes, Some(vec![1, 2, 3]));
    }
}
