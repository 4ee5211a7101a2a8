//! GeoIP city lookup using a local MaxMind GeoLite2 database.
//!
//! Each lookup opens a fresh reader over the configured database file. That
//! is deliberately unsophisticated: call volume is one user's devices at a
//! time, so reader reuse buys nothing here.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::{geoip2, MaxMindDBError, Reader};

/// City-level result of a single IP lookup.
///
/// Names can be individually absent in the database; the resolver decides
/// what an incomplete record means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityRecord {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Looks up an IP address in the GeoLite2-City database at `db_path`.
///
/// The region is the most specific subdivision (the last one listed), which
/// is the state/province for US-style records.
///
/// # Errors
///
/// Returns `MaxMindDBError::AddressNotFoundError` for addresses absent from
/// the database (private and unroutable ranges land there) and other reader
/// errors for an unreadable or corrupt database file.
pub fn lookup_city(db_path: &Path, ip: IpAddr) -> Result<CityRecord, MaxMindDBError> {
    let reader = Reader::open_readfile(db_path)?;
    let city: geoip2::City = reader.lookup(ip)?;

    let english = |names: Option<std::collections::BTreeMap<&str, &str>>| {
        names.and_then(|n| n.get("en").map(|s| s.to_string()))
    };

    Ok(CityRecord {
        city: city.city.and_then(|c| english(c.names)),
        region: city
            .subdivisions
            .and_then(|subs| subs.into_iter().last())
            .and_then(|sub| english(sub.names)),
        country: city.country.and_then(|c| english(c.names)),
    })
}
