//! Duration computation between record timestamps.

use chrono::NaiveDateTime;

use crate::error_handling::TimestampError;

/// The only accepted timestamp layout: `YYYY-MM-DD HH:MM:SS.ffffff` with six
/// fractional-second digits.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Computes the whole-day difference between two timestamp strings.
///
/// `leading` is the more recent timestamp, `lagging` the earlier one. The
/// fractional-day remainder is discarded (truncation toward zero), never
/// rounded. If `lagging` is after `leading` the result is negative.
///
/// # Errors
///
/// Returns `TimestampError` if either string does not match the expected
/// format exactly.
pub fn days_between(leading: &str, lagging: &str) -> Result<i64, TimestampError> {
    let lag_time = parse_timestamp(lagging)?;
    let lead_time = parse_timestamp(leading)?;

    // chrono's num_days is integer division, which truncates toward zero for
    // both signs
    Ok((lead_time - lag_time).num_days())
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| TimestampError {
        value: value.to_string(),
        source,
    })
}
