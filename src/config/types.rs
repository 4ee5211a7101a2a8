//! Configuration types and environment parsing.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{
    ASSETS_PATH_ENV, DEFAULT_GEOCODER_URL, GEOCODER_URL_ENV, GEOLITE_DB_PATH_ENV, LOG_FORMAT_ENV,
    LOG_LEVEL_ENV, MEDIA_PATH_ENV, USER_FILE_PATH_ENV,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    #[default]
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unrecognized log level: {}", other)),
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unrecognized log format: {}", other)),
        }
    }
}

/// Crate configuration, read from the process environment.
///
/// There is no CLI surface: all knobs come from environment variables
/// (optionally populated from a `.env` file by the binary).
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON user record.
    pub user_file_path: PathBuf,

    /// Destination directory for copied media files.
    pub assets_path: PathBuf,

    /// Source directory for media files.
    pub media_path: PathBuf,

    /// Path to the GeoLite2-City database. Absence is not an error at
    /// construction; device geolocation fails per-IP without it.
    pub geolite_db_path: Option<PathBuf>,

    /// Base URL of the forward geocoding service.
    pub geocoder_url: String,

    /// Log level.
    pub log_level: LogLevel,

    /// Log format.
    pub log_format: LogFormat,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if any required variable is unset.
    /// Unparseable log level/format values fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_file_path = require_var(USER_FILE_PATH_ENV)?;
        let assets_path = require_var(ASSETS_PATH_ENV)?;
        let media_path = require_var(MEDIA_PATH_ENV)?;

        let geolite_db_path = env::var(GEOLITE_DB_PATH_ENV).ok().map(PathBuf::from);

        let geocoder_url =
            env::var(GEOCODER_URL_ENV).unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string());

        let log_level = env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let log_format = env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Ok(Config {
            user_file_path: PathBuf::from(user_file_path),
            assets_path: PathBuf::from(assets_path),
            media_path: PathBuf::from(media_path),
            geolite_db_path,
            geocoder_url,
            log_level,
            log_format,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
