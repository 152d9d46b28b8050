//! MongoDB value and pipeline formatting toolkit
//!
//! This library renders BSON-like value trees into the single-line
//! notation used by MongoDB Compass and the interactive shell, so that
//! programmatically-built aggregation pipelines can be logged or pasted
//! into a shell session verbatim.
//!
//! # Modules
//!
//! - `value`: The document value model (scalars, extended types, containers)
//! - `formatter`: Compass-style rendering of values and pipelines
//! - `error`: Error types and handling
//!
//! # Example
//!
//! ```
//! use bson::doc;
//! use mongokit::{Value, pipeline_to_compass_string};
//!
//! let pipeline = vec![Value::from(doc! { "$sort": { "total": -1 } })];
//! assert_eq!(
//!     pipeline_to_compass_string(&pipeline),
//!     r#"[{"$sort":{"total":-1}}]"#
//! );
//! ```

pub mod error;
pub mod formatter;
pub mod value;

// Re-export commonly used types
pub use error::{MongokitError, Result};
pub use formatter::{
    CompassConverter, ValueStringConverter, pipeline_to_compass_string, value_to_compass_string,
};
pub use value::{Pipeline, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
