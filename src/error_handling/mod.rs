//! Error handling for user record analytics.
//!
//! This module defines the error taxonomies used throughout the crate:
//! configuration errors, record access errors, timestamp parse errors, and
//! the per-IP geolocation failure reasons.

mod types;

pub use types::{ConfigError, GeoFailure, InitializationError, RecordError, TimestampError};
