//! The `UserAnalytics` entry point.
//!
//! Owns the configuration, the loaded user record, and the geocoding client.
//! Construction loads the record and runs the one-shot media sync; every
//! derivation afterwards reads the same immutable record and recomputes its
//! result on demand.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::assets;
use crate::config::Config;
use crate::derive::{
    build_location_summary, build_user_summary, count_by_category, selection_values, tables,
    CategoryCounts, LocationSummary, UserSummary,
};
use crate::error_handling::RecordError;
use crate::geocode::GeocodeClient;
use crate::record::UserRecord;
use crate::resolver::{self, DeviceResolution, GeolocationRow};

/// Analytics over a single user's profile record.
pub struct UserAnalytics {
    config: Config,
    record: UserRecord,
    geocoder: GeocodeClient,
}

impl UserAnalytics {
    /// Loads the user record and synchronizes media assets.
    ///
    /// The record is loaded once and held immutable for the object's
    /// lifetime. The media sync is one-shot: a non-empty assets directory is
    /// left untouched.
    pub fn new(config: Config) -> Result<Self> {
        let record = UserRecord::load(&config.user_file_path)
            .with_context(|| format!("loading {}", config.user_file_path.display()))?;

        assets::sync_media(&config.media_path, &config.assets_path)
            .context("synchronizing media assets")?;

        let geocoder =
            GeocodeClient::new(config.geocoder_url.clone()).context("building geocoding client")?;

        Ok(UserAnalytics {
            config,
            record,
            geocoder,
        })
    }

    /// The image files currently present in the assets directory.
    pub fn media_file_paths(&self) -> Result<Vec<PathBuf>> {
        assets::media_file_paths(&self.config.assets_path)
    }

    /// The `account` section of the record.
    pub fn account(&self) -> Result<&Map<String, Value>, RecordError> {
        self.record.account()
    }

    /// The `devices` section of the record.
    pub fn devices(&self) -> Result<&[Value], RecordError> {
        self.record.devices()
    }

    /// The `profile` section of the record.
    pub fn profile(&self) -> Result<&Map<String, Value>, RecordError> {
        self.record.profile()
    }

    /// The `preferences` section of the record.
    pub fn preferences(&self) -> Result<&Map<String, Value>, RecordError> {
        self.record.preferences()
    }

    /// The `location` section of the record.
    pub fn location(&self) -> Result<&Map<String, Value>, RecordError> {
        self.record.location()
    }

    /// Normalized location info (CBSA city extraction included).
    pub fn user_location(&self) -> Result<LocationSummary, RecordError> {
        build_location_summary(self.record.location()?)
    }

    /// Flattened profile/account summary with computed height and durations.
    pub fn user_summary(&self) -> Result<UserSummary, RecordError> {
        build_user_summary(self.record.profile()?, self.record.account()?)
    }

    /// Values of the paired profile and preference selection fields.
    ///
    /// The two sequences skip absent fields independently and may differ in
    /// length.
    pub fn profile_preference_selections(
        &self,
    ) -> Result<(Vec<Value>, Vec<Value>), RecordError> {
        Ok(selection_values(
            self.record.profile()?,
            self.record.preferences()?,
        ))
    }

    /// Dealbreaker counts per category, over the `preferences` section.
    pub fn dealbreaker_counts(
        &self,
    ) -> Result<BTreeMap<&'static str, CategoryCounts>, RecordError> {
        Ok(count_by_category(
            tables::DEALBREAKER_CATEGORIES,
            self.record.preferences()?,
        ))
    }

    /// Displayed-attribute counts per category, over the `profile` section.
    pub fn displayed_counts(&self) -> Result<BTreeMap<&'static str, CategoryCounts>, RecordError> {
        Ok(count_by_category(
            tables::DISPLAYED_CATEGORIES,
            self.record.profile()?,
        ))
    }

    /// Per-IP geolocation outcomes for every device, including failure
    /// reasons for the IPs that cannot be resolved.
    pub async fn resolve_device_locations(&self) -> Result<Vec<DeviceResolution>, RecordError> {
        let ips = self.record.device_ips()?;
        Ok(resolver::resolve_device_locations(
            &ips,
            self.config.geolite_db_path.as_deref(),
            &self.geocoder,
        )
        .await)
    }

    /// Geolocation table of the resolvable device IPs. Unresolvable IPs are
    /// dropped (their reasons are logged at debug level).
    pub async fn device_locations(&self) -> Result<Vec<GeolocationRow>, RecordError> {
        let ips = self.record.device_ips()?;
        Ok(resolver::device_locations(
            &ips,
            self.config.geolite_db_path.as_deref(),
            &self.geocoder,
        )
        .await)
    }
}
