//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the HTTP client used for geocoding.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for configuration loading.
///
/// Configuration is environment-driven; a missing required variable is fatal
/// to construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),
}

/// A timestamp string did not match the expected textual format.
///
/// The only accepted format is `YYYY-MM-DD HH:MM:SS.ffffff` with exactly six
/// fractional-second digits. Malformed input is an error, never a default.
#[derive(Error, Debug)]
#[error("invalid timestamp {value:?}: expected format YYYY-MM-DD HH:MM:SS.ffffff")]
pub struct TimestampError {
    /// The offending input string.
    pub value: String,
    /// The underlying chrono parse error.
    #[source]
    pub source: chrono::ParseError,
}

/// Error types for loading and reading the user record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The source file name does not indicate a JSON document.
    #[error("the user file needs to be a JSON file: {0}")]
    Format(PathBuf),

    /// Error reading the record file from disk.
    #[error("failed to read user record from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file contents are not valid JSON.
    #[error("failed to parse user record from {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An expected key is absent from a sub-mapping.
    ///
    /// Direct accesses are not defensively guarded: absence of a required
    /// field is an error, not a default.
    #[error("missing field {field:?} in {section:?}")]
    MissingField { section: String, field: String },

    /// A field is present but has an unexpected JSON type.
    #[error("field {field:?} in {section:?} is not {expected}")]
    FieldType {
        section: String,
        field: String,
        expected: &'static str,
    },

    /// A timestamp field failed to parse.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Reasons a device IP can fail geolocation.
///
/// The resolver diagnoses each dropped IP with one of these variants instead
/// of swallowing every failure indistinguishably. The aggregating caller still
/// drops failed IPs from the result table, but the cause is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum GeoFailure {
    /// The IP string did not parse as an IPv4/IPv6 address.
    InvalidAddress,
    /// No GeoIP database is configured, or it could not be opened/read.
    DatabaseUnavailable,
    /// The address is not present in the GeoIP database (private and
    /// unroutable ranges land here).
    LookupMiss,
    /// The database entry lacks a city, region, or country name.
    IncompleteRecord,
    /// The geocoding service could not be reached or returned an error.
    GeocoderUnavailable,
    /// The geocoding service returned no match for the place string.
    NoMatch,
}

impl GeoFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoFailure::InvalidAddress => "invalid IP address",
            GeoFailure::DatabaseUnavailable => "GeoIP database unavailable",
            GeoFailure::LookupMiss => "GeoIP lookup miss",
            GeoFailure::IncompleteRecord => "incomplete GeoIP record",
            GeoFailure::GeocoderUnavailable => "geocoder unavailable",
            GeoFailure::NoMatch => "geocoder returned no match",
        }
    }
}

impl std::fmt::Display for GeoFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
