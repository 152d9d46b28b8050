//! Document value model for shell-style rendering
//!
//! This module defines [`Value`], a closed tagged union over the BSON
//! variants the formatter understands:
//! - Scalars (null, booleans, numerics, strings)
//! - Extended types (ObjectId, DateTime, Timestamp, Decimal128)
//! - Containers (arrays, ordered documents, unordered maps)
//! - A fallback for catalogue-external BSON variants
//!
//! Values are built once by the caller (typically from driver-decoded
//! BSON via the [`From<Bson>`] bridge) and consumed read-only by the
//! formatter. The model is a tree: a value never contains itself.

use std::collections::HashMap;

use bson::{Bson, DateTime, Decimal128, Timestamp, oid::ObjectId};

use crate::error::{MongokitError, Result};

/// An ordered sequence of aggregation stages.
///
/// Stage order is semantically significant and is never reordered by the
/// formatter. Each stage is conventionally a single-key [`Value::Document`]
/// naming an operator (e.g. `$match`), but this is not enforced.
pub type Pipeline = Vec<Value>;

/// A BSON-like document value.
///
/// Ordered and unordered key-value containers are distinct variants:
/// [`Value::Document`] preserves insertion order and permits duplicate
/// keys, while [`Value::Map`] iterates in whatever order the underlying
/// `HashMap` yields. The distinction is observable in formatter output.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,

    /// Boolean value.
    Boolean(bool),

    /// 32-bit signed integer.
    Int32(i32),

    /// 64-bit signed integer.
    Int64(i64),

    /// 64-bit floating point number.
    Double(f64),

    /// UTF-8 string.
    String(String),

    /// 12-byte object identifier.
    ObjectId(ObjectId),

    /// Calendar instant with millisecond precision.
    DateTime(DateTime),

    /// Replication timestamp: (seconds, ordinal) pair.
    ///
    /// Distinct from [`Value::DateTime`]; used for internal
    /// ordering/replication rather than wall-clock time.
    Timestamp(Timestamp),

    /// 128-bit decimal value.
    Decimal128(Decimal128),

    /// Ordered sequence of values.
    Array(Vec<Value>),

    /// Ordered key-value pairs; keys may repeat, order is preserved.
    Document(Vec<(String, Value)>),

    /// Unordered key-value mapping; iteration order is
    /// representation-dependent.
    Map(HashMap<String, Value>),

    /// Any BSON variant outside the catalogue above (Binary, Regex,
    /// MinKey, ...). Rendered via a generic fallback representation.
    Other(Bson),
}

impl Value {
    /// Parse a 24-character hex string into an ObjectId value.
    ///
    /// # Errors
    /// Returns [`MongokitError::InvalidObjectId`] if `hex` is not a valid
    /// object id representation.
    pub fn object_id(hex: &str) -> Result<Self> {
        ObjectId::parse_str(hex)
            .map(Value::ObjectId)
            .map_err(|e| MongokitError::InvalidObjectId(e.to_string()))
    }

    /// Parse a decimal string into a Decimal128 value.
    ///
    /// # Errors
    /// Returns [`MongokitError::InvalidDecimal`] if `repr` is not a valid
    /// decimal representation.
    pub fn decimal128(repr: &str) -> Result<Self> {
        repr.parse::<Decimal128>()
            .map(Value::Decimal128)
            .map_err(|e| MongokitError::InvalidDecimal(e.to_string()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ObjectId> for Value {
    fn from(oid: ObjectId) -> Self {
        Value::ObjectId(oid)
    }
}

impl From<DateTime> for Value {
    fn from(dt: DateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Value::DateTime(DateTime::from_chrono(dt))
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Decimal128> for Value {
    fn from(d: Decimal128) -> Self {
        Value::Decimal128(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Value::Document(entries)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(entries: HashMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

/// Bridge from driver-decoded BSON.
///
/// Catalogue variants map one-to-one; `bson::Document` (which preserves
/// insertion order) maps to [`Value::Document`]; anything else lands in
/// [`Value::Other`].
impl From<Bson> for Value {
    fn from(raw: Bson) -> Self {
        match raw {
            Bson::Null => Value::Null,
            Bson::Boolean(b) => Value::Boolean(b),
            Bson::Int32(n) => Value::Int32(n),
            Bson::Int64(n) => Value::Int64(n),
            Bson::Double(f) => Value::Double(f),
            Bson::String(s) => Value::String(s),
            Bson::ObjectId(oid) => Value::ObjectId(oid),
            Bson::DateTime(dt) => Value::DateTime(dt),
            Bson::Timestamp(ts) => Value::Timestamp(ts),
            Bson::Decimal128(d) => Value::Decimal128(d),
            Bson::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Bson::Document(doc) => Value::from(doc),
            other => Value::Other(other),
        }
    }
}

impl From<bson::Document> for Value {
    fn from(doc: bson::Document) -> Self {
        Value::Document(doc.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_object_id_constructor() {
        let value = Value::object_id("670ef82ee2cfc8452bea7023").unwrap();
        match value {
            Value::ObjectId(oid) => assert_eq!(oid.to_hex(), "670ef82ee2cfc8452bea7023"),
            other => panic!("expected ObjectId, got {:?}", other),
        }
    }

    #[test]
    fn test_object_id_constructor_rejects_bad_hex() {
        let err = Value::object_id("not-hex").unwrap_err();
        assert!(matches!(err, MongokitError::InvalidObjectId(_)));
    }

    #[test]
    fn test_decimal128_constructor() {
        let value = Value::decimal128("1234.5678").unwrap();
        match value {
            Value::Decimal128(d) => assert_eq!(d.to_string(), "1234.5678"),
            other => panic!("expected Decimal128, got {:?}", other),
        }
    }

    #[test]
    fn test_decimal128_constructor_rejects_garbage() {
        let err = Value::decimal128("not a number").unwrap_err();
        assert!(matches!(err, MongokitError::InvalidDecimal(_)));
    }

    #[test]
    fn test_bson_bridge_scalars() {
        assert_eq!(Value::from(Bson::Null), Value::Null);
        assert_eq!(Value::from(Bson::Boolean(true)), Value::Boolean(true));
        assert_eq!(Value::from(Bson::Int32(42)), Value::Int32(42));
        assert_eq!(Value::from(Bson::Int64(42)), Value::Int64(42));
        assert_eq!(
            Value::from(Bson::String("hi".to_string())),
            Value::String("hi".to_string())
        );
    }

    #[test]
    fn test_bson_bridge_preserves_document_order() {
        let value = Value::from(doc! { "b": 1, "a": 2, "c": 3 });
        match value {
            Value::Document(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["b", "a", "c"]);
            }
            other => panic!("expected Document, got {:?}", other),
        }
    }

    #[test]
    fn test_bson_bridge_recurses_into_arrays() {
        let value = Value::from(Bson::Array(vec![Bson::Int32(1), Bson::Null]));
        assert_eq!(value, Value::Array(vec![Value::Int32(1), Value::Null]));
    }

    #[test]
    fn test_bson_bridge_fallback() {
        let value = Value::from(Bson::MinKey);
        assert_eq!(value, Value::Other(Bson::MinKey));
    }
}
