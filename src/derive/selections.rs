//! Profile/preference selection matching.

use serde_json::{Map, Value};

use crate::derive::tables::{PREFERENCE_SELECTION_FIELDS, PROFILE_SELECTION_FIELDS};

/// Collects the values of the paired profile and preference selection fields.
///
/// Works over two fixed parallel field lists (see [`crate::derive::tables`]);
/// only fields actually present in their section contribute a value, absent
/// fields are skipped rather than null-padded. Because presence can differ
/// between the two sections, the returned sequences are not guaranteed to be
/// the same length or positionally aligned. That looseness is a known
/// property of the upstream data shape and is preserved as-is.
pub fn selection_values(
    profile: &Map<String, Value>,
    preferences: &Map<String, Value>,
) -> (Vec<Value>, Vec<Value>) {
    let collect = |section: &Map<String, Value>, fields: &[&str]| -> Vec<Value> {
        fields
            .iter()
            .filter_map(|field| section.get(*field).cloned())
            .collect()
    };

    (
        collect(profile, PROFILE_SELECTION_FIELDS),
        collect(preferences, PREFERENCE_SELECTION_FIELDS),
    )
}
