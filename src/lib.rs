//! User profile analytics.
//!
//! Extracts and summarizes attributes from a single user's profile record, a
//! dating-app-style JSON dataset covering the user's account, profile,
//! preferences, devices, and location. Derivations include:
//!
//! - a normalized location summary (CBSA city extraction)
//! - a flattened user summary with height conversion and duration arithmetic
//! - categorical counts of displayed attributes and dealbreaker preferences
//! - paired profile/preference selection values
//! - approximate geolocation of device login IPs (local GeoLite2 city lookup
//!   followed by forward geocoding), with per-IP failure diagnostics
//!
//! Configuration is environment-driven (see [`config`]); there is no CLI or
//! network service surface beyond the outbound geocoding call.
//!
//! # Examples
//!
//! ```no_run
//! use user_analytics::{Config, UserAnalytics};
//!
//! # fn main() -> anyhow::Result<()> {
//! let analytics = UserAnalytics::new(Config::from_env()?)?;
//! let summary = analytics.user_summary()?;
//! println!("{} has been on the app {} days", summary.first_name, summary.on_app_duration);
//! # Ok(())
//! # }
//! ```

mod analytics;
pub mod assets;
pub mod config;
pub mod derive;
pub mod error_handling;
pub mod geocode;
pub mod geoip;
pub mod initialization;
pub mod record;
pub mod resolver;

pub use analytics::UserAnalytics;
pub use config::Config;
pub use derive::{CategoryCounts, LocationSummary, UserSummary};
pub use error_handling::{ConfigError, GeoFailure, RecordError, TimestampError};
pub use record::UserRecord;
pub use resolver::{DeviceResolution, GeolocationRow};
