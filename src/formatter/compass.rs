//! Compass-style value and pipeline rendering
//!
//! This module produces the single-line notation used by MongoDB
//! Compass and the interactive shell: type wrappers for extended types
//! (`ObjectId("...")`, `ISODate("...")`, `Timestamp(t,i)`,
//! `Decimal128("...")`), comma-separated containers with no whitespace,
//! and no trailing newline. The output is meant to be pasted into a
//! shell as-is.

use std::collections::HashMap;

use bson::{Bson, DateTime, Decimal128, Timestamp, oid::ObjectId};
use chrono::SecondsFormat;
use tracing::trace;

use super::converter::ValueStringConverter;
use crate::value::Value;

/// Compass-style converter.
///
/// Stateless; a single instance may be shared freely across threads as
/// long as the input value tree is not mutated mid-render.
///
/// Two fidelity limitations are deliberate and observable:
/// - Strings are wrapped in double quotes without escaping embedded
///   quotes or control characters, so output containing such strings is
///   not guaranteed to re-parse.
/// - [`Value::Map`] fields are emitted in the underlying `HashMap`
///   iteration order, which is not stable across runs.
pub struct CompassConverter;

impl CompassConverter {
    /// Create a new compass-style converter
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompassConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStringConverter for CompassConverter {
    fn format_null(&self) -> String {
        String::from("null")
    }

    fn format_boolean(&self, b: bool) -> String {
        b.to_string()
    }

    fn format_int32(&self, n: i32) -> String {
        n.to_string()
    }

    fn format_int64(&self, n: i64) -> String {
        n.to_string()
    }

    fn format_double(&self, f: f64) -> String {
        f.to_string()
    }

    fn format_string(&self, s: &str) -> String {
        // No escaping of embedded quotes or control characters.
        format!("\"{}\"", s)
    }

    fn format_object_id(&self, oid: &ObjectId) -> String {
        format!("ObjectId(\"{}\")", oid.to_hex())
    }

    fn format_datetime(&self, dt: &DateTime) -> String {
        let utc = dt.to_chrono();
        format!(
            "ISODate(\"{}\")",
            utc.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    fn format_timestamp(&self, ts: &Timestamp) -> String {
        format!("Timestamp({},{})", ts.time, ts.increment)
    }

    fn format_decimal128(&self, d: &Decimal128) -> String {
        format!("Decimal128(\"{}\")", d)
    }

    fn format_array(&self, items: &[Value]) -> String {
        let rendered: Vec<String> = items.iter().map(|v| self.convert_to_string(v)).collect();
        format!("[{}]", rendered.join(","))
    }

    fn format_document(&self, entries: &[(String, Value)]) -> String {
        let rendered: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("\"{}\":{}", key, self.convert_to_string(value)))
            .collect();
        format!("{{{}}}", rendered.join(","))
    }

    fn format_map(&self, entries: &HashMap<String, Value>) -> String {
        let rendered: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("\"{}\":{}", key, self.convert_to_string(value)))
            .collect();
        format!("{{{}}}", rendered.join(","))
    }

    fn format_other(&self, raw: &Bson) -> String {
        format!("{:?}", raw)
    }
}

/// Render a single value in compass notation.
///
/// # Arguments
/// * `value` - Value to render
///
/// # Returns
/// * `String` - Compass-style representation
pub fn value_to_compass_string(value: &Value) -> String {
    CompassConverter::new().convert_to_string(value)
}

/// Render an aggregation pipeline in compass notation.
///
/// Stages are rendered in sequence order and joined into a bracketed,
/// comma-separated list. No reordering, filtering, or validation of
/// stage content occurs; an empty pipeline renders as `[]`.
///
/// # Arguments
/// * `stages` - Ordered pipeline stages
///
/// # Returns
/// * `String` - Compass-style representation
pub fn pipeline_to_compass_string(stages: &[Value]) -> String {
    trace!("Rendering {} pipeline stage(s)", stages.len());

    let converter = CompassConverter::new();
    let rendered: Vec<String> = stages
        .iter()
        .map(|stage| converter.convert_to_string(stage))
        .collect();
    format!("[{}]", rendered.join(","))
}
