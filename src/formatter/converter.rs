//! Core converter trait for value conversion
//!
//! This module defines the trait that all string-producing value
//! converters implement.

use std::collections::HashMap;

use bson::{Bson, DateTime, Decimal128, Timestamp, oid::ObjectId};

use crate::value::Value;

/// Trait for string-based value converters.
///
/// Implementors provide one `format_*` method per [`Value`] variant; the
/// provided [`convert_to_string`](ValueStringConverter::convert_to_string)
/// dispatcher performs the exhaustive match and structural recursion.
/// Conversion is total: every well-formed value produces a string, and
/// catalogue-external BSON falls through to
/// [`format_other`](ValueStringConverter::format_other).
pub trait ValueStringConverter {
    fn format_null(&self) -> String;
    fn format_boolean(&self, b: bool) -> String;
    fn format_int32(&self, n: i32) -> String;
    fn format_int64(&self, n: i64) -> String;
    fn format_double(&self, f: f64) -> String;
    fn format_string(&self, s: &str) -> String;
    fn format_object_id(&self, oid: &ObjectId) -> String;
    fn format_datetime(&self, dt: &DateTime) -> String;
    fn format_timestamp(&self, ts: &Timestamp) -> String;
    fn format_decimal128(&self, d: &Decimal128) -> String;
    fn format_array(&self, items: &[Value]) -> String;
    fn format_document(&self, entries: &[(String, Value)]) -> String;
    fn format_map(&self, entries: &HashMap<String, Value>) -> String;
    fn format_other(&self, raw: &Bson) -> String;

    /// Convert a value to a string (provided implementation).
    fn convert_to_string(&self, value: &Value) -> String {
        match value {
            Value::Null => self.format_null(),
            Value::Boolean(b) => self.format_boolean(*b),
            Value::Int32(n) => self.format_int32(*n),
            Value::Int64(n) => self.format_int64(*n),
            Value::Double(f) => self.format_double(*f),
            Value::String(s) => self.format_string(s),
            Value::ObjectId(oid) => self.format_object_id(oid),
            Value::DateTime(dt) => self.format_datetime(dt),
            Value::Timestamp(ts) => self.format_timestamp(ts),
            Value::Decimal128(d) => self.format_decimal128(d),
            Value::Array(items) => self.format_array(items),
            Value::Document(entries) => self.format_document(entries),
            Value::Map(entries) => self.format_map(entries),
            Value::Other(raw) => self.format_other(raw),
        }
    }
}
