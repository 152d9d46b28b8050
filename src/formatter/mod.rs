//! Value rendering for shell-compatible output
//!
//! This module converts [`crate::value::Value`] trees into textual form:
//! - Compass-style single-line notation for values and pipelines
//! - A converter trait that separates type dispatch from per-type
//!   formatting rules
//!
//! # Design
//!
//! The module uses a strategy pattern with a common trait
//! [`ValueStringConverter`] so alternative output styles can be added
//! without touching the dispatch logic.

mod compass;
mod converter;

pub use compass::{CompassConverter, pipeline_to_compass_string, value_to_compass_string};
pub use converter::ValueStringConverter;
