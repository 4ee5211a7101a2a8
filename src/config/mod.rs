//! Application configuration.
//!
//! This module provides:
//! - Environment variable names recognized by the crate
//! - Configuration types and environment-driven parsing

mod types;

pub use types::{Config, LogFormat, LogLevel};

/// Path to the JSON user record (required; must reference a `.json` file).
pub const USER_FILE_PATH_ENV: &str = "USER_FILE_PATH";

/// Destination directory for copied media files.
pub const ASSETS_PATH_ENV: &str = "ASSETS_PATH";

/// Source directory to copy media files from.
pub const MEDIA_PATH_ENV: &str = "MEDIA_PATH";

/// Path to a local GeoLite2-City database (optional; geolocation fails
/// per-IP without it).
pub const GEOLITE_DB_PATH_ENV: &str = "GEOLITE_DB_PATH";

/// Base URL of the forward geocoding service (optional).
pub const GEOCODER_URL_ENV: &str = "GEOCODER_URL";

/// Log level override (optional; `RUST_LOG` is also honored).
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Log format selection, `plain` or `json` (optional).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default base URL for the forward geocoding service.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// User-Agent sent on geocoding requests. Nominatim's usage policy requires
/// an identifying agent.
pub const GEOCODER_USER_AGENT: &str = "geoip_mapper";
