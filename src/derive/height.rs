//! Height unit conversion.

/// Converts a height in centimeters to whole feet and remaining inches.
///
/// Total inches = cm / 2.54; feet is the floor of total inches over 12; the
/// remaining inches are kept in `[0, 12)` and rounded to one decimal place.
/// Non-positive inputs are run through the same arithmetic (feet go
/// negative, the remainder stays non-negative); the source data never
/// exercises them.
pub fn height_to_imperial(cm: f64) -> (i64, f64) {
    let inches = cm / 2.54;
    let mut feet = (inches / 12.0).floor() as i64;
    let mut remaining_inches = (inches.rem_euclid(12.0) * 10.0).round() / 10.0;

    // Rounding can push the remainder up to exactly 12.0; carry it into feet
    // so the remainder always stays below 12
    if remaining_inches >= 12.0 {
        feet += 1;
        remaining_inches = 0.0;
    }

    (feet, remaining_inches)
}
