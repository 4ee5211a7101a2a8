//! Device IP geolocation.
//!
//! Two-stage resolution per device IP: city/region/country from the local
//! GeoLite2 database, then forward geocoding of `"City, Region, Country"`
//! for coordinates. IPs are resolved sequentially, one at a time; there is
//! no batching and no caching, which is acceptable at one user's device
//! count.
//!
//! Every IP gets an observable outcome. The aggregate table drops failed
//! IPs, matching the upstream contract, but the reason for each drop is
//! diagnosable instead of being swallowed.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::MaxMindDBError;
use serde::Serialize;

use crate::error_handling::GeoFailure;
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::geoip::{lookup_city, CityRecord};

/// One successfully geolocated device IP.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeolocationRow {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of resolving a single device IP.
#[derive(Debug, Clone)]
pub struct DeviceResolution {
    pub ip: String,
    pub outcome: Result<GeolocationRow, GeoFailure>,
}

/// Resolves every device IP, reporting a per-IP outcome.
///
/// No failure aborts the pass: an unparseable address, a database miss, or a
/// geocoder problem is recorded against that IP and resolution moves on.
pub async fn resolve_device_locations(
    ips: &[String],
    db_path: Option<&Path>,
    geocoder: &GeocodeClient,
) -> Vec<DeviceResolution> {
    let mut resolutions = Vec::with_capacity(ips.len());
    for ip in ips {
        let outcome = resolve_one(ip, db_path, geocoder).await;
        resolutions.push(DeviceResolution {
            ip: ip.clone(),
            outcome,
        });
    }
    resolutions
}

/// Resolves every device IP and keeps only the successes.
///
/// Dropped IPs are logged with their failure reason at debug level.
pub async fn device_locations(
    ips: &[String],
    db_path: Option<&Path>,
    geocoder: &GeocodeClient,
) -> Vec<GeolocationRow> {
    resolve_device_locations(ips, db_path, geocoder)
        .await
        .into_iter()
        .filter_map(|resolution| match resolution.outcome {
            Ok(row) => Some(row),
            Err(reason) => {
                log::debug!("Dropping device IP {}: {}", resolution.ip, reason);
                None
            }
        })
        .collect()
}

async fn resolve_one(
    ip: &str,
    db_path: Option<&Path>,
    geocoder: &GeocodeClient,
) -> Result<GeolocationRow, GeoFailure> {
    let addr: IpAddr = ip.parse().map_err(|_| GeoFailure::InvalidAddress)?;
    let db_path = db_path.ok_or(GeoFailure::DatabaseUnavailable)?;

    let record = lookup_city(db_path, addr).map_err(|e| match e {
        MaxMindDBError::AddressNotFoundError(_) => GeoFailure::LookupMiss,
        _ => GeoFailure::DatabaseUnavailable,
    })?;

    let CityRecord {
        city: Some(city),
        region: Some(region),
        country: Some(country),
    } = record
    else {
        return Err(GeoFailure::IncompleteRecord);
    };

    let place = format!("{}, {}, {}", city, region, country);
    let coordinates = geocoder
        .forward(&place)
        .await
        .map_err(|e| match e {
            GeocodeError::Http(_) | GeocodeError::Status(_) => GeoFailure::GeocoderUnavailable,
            GeocodeError::Malformed(_) => GeoFailure::NoMatch,
        })?
        .ok_or(GeoFailure::NoMatch)?;

    Ok(GeolocationRow {
        ip: ip.to_string(),
        city,
        region,
        country,
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geocoder() -> GeocodeClient {
        // Points at a closed port; tests that reach the geocoding stage fail
        // with GeocoderUnavailable rather than hanging
        GeocodeClient::new("http://127.0.0.1:1").unwrap()
    }

    #[tokio::test]
    async fn test_invalid_address_is_diagnosed_not_raised() {
        let ips = vec!["not.an.ip".to_string()];
        let resolutions = resolve_device_locations(&ips, None, &test_geocoder()).await;
        assert_eq!(resolutions.len(), 1);
        assert_eq!(
            resolutions[0].outcome.as_ref().unwrap_err(),
            &GeoFailure::InvalidAddress
        );
    }

    #[tokio::test]
    async fn test_missing_database_is_diagnosed() {
        let ips = vec!["8.8.8.8".to_string()];
        let resolutions = resolve_device_locations(&ips, None, &test_geocoder()).await;
        assert_eq!(
            resolutions[0].outcome.as_ref().unwrap_err(),
            &GeoFailure::DatabaseUnavailable
        );
    }

    #[tokio::test]
    async fn test_unreadable_database_is_diagnosed() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let db = dir.path().join("bogus.mmdb");
        std::fs::write(&db, b"not a database").unwrap();

        let ips = vec!["8.8.8.8".to_string()];
        let resolutions = resolve_device_locations(&ips, Some(&db), &test_geocoder()).await;
        assert_eq!(
            resolutions[0].outcome.as_ref().unwrap_err(),
            &GeoFailure::DatabaseUnavailable
        );
    }

    #[tokio::test]
    async fn test_aggregate_drops_failures_silently() {
        // A private IP and a garbage string: both drop, neither errors out of
        // the aggregate call
        let ips = vec!["10.0.0.1".to_string(), "garbage".to_string()];
        let rows = device_locations(&ips, None, &test_geocoder()).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_every_ip_gets_an_outcome() {
        let ips = vec![
            "10.0.0.1".to_string(),
            "bad".to_string(),
            "192.168.1.1".to_string(),
        ];
        let resolutions = resolve_device_locations(&ips, None, &test_geocoder()).await;
        assert_eq!(resolutions.len(), 3);
        for resolution in &resolutions {
            assert!(resolution.outcome.is_err());
        }
    }
}
