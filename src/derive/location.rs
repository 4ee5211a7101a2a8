//! Location normalization.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error_handling::RecordError;
use crate::record::{require, require_str};

/// Normalized subset of the record's `location` section.
///
/// All fields except `city` are copied verbatim from the source; `city` is
/// derived from the CBSA label.
#[derive(Debug, Clone, Serialize)]
pub struct LocationSummary {
    pub city: String,
    pub latitude: Value,
    pub longitude: Value,
    pub country: Value,
    pub neighborhood: Value,
    pub locality: Value,
}

/// Builds the normalized location summary from the `location` section.
///
/// The city is the substring of `cbsa` before the first comma (CBSA labels
/// look like `"City, ST"`); a comma-less label is used whole. Any absent
/// source field is a `MissingField` error.
pub fn build_location_summary(location: &Map<String, Value>) -> Result<LocationSummary, RecordError> {
    let cbsa = require_str(location, "location", "cbsa")?;
    let city = cbsa.split(',').next().unwrap_or(cbsa).to_string();

    Ok(LocationSummary {
        city,
        latitude: require(location, "location", "latitude")?.clone(),
        longitude: require(location, "location", "longitude")?.clone(),
        country: require(location, "location", "country_short")?.clone(),
        neighborhood: require(location, "location", "neighborhood")?.clone(),
        locality: require(location, "location", "admin_area_1_short")?.clone(),
    })
}
