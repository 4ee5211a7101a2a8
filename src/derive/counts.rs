//! Table-driven categorical counting.
//!
//! One parameterized routine backs both the dealbreaker counts (over
//! `preferences`) and the displayed-attribute counts (over `profile`); only
//! the driving table and source section differ.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::derive::tables::CategoryTable;

/// Truthy/falsy tallies for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    /// Number of present fields with a truthy value.
    #[serde(rename = "true")]
    pub truthy: u32,
    /// Number of present fields with a falsy value.
    #[serde(rename = "false")]
    pub falsy: u32,
}

/// Counts truthy and falsy values per category.
///
/// For each field of each category that is present in `source`, one counter
/// is incremented based on the field's truthiness. Absent fields are skipped
/// entirely, never counted as false. Every category in the table appears in
/// the output, including those with no present fields.
pub fn count_by_category(
    table: CategoryTable,
    source: &Map<String, Value>,
) -> BTreeMap<&'static str, CategoryCounts> {
    let mut counts: BTreeMap<&'static str, CategoryCounts> = BTreeMap::new();

    for (category, fields) in table {
        let entry = counts.entry(category).or_default();
        for field in *fields {
            if let Some(value) = source.get(*field) {
                if is_truthy(value) {
                    entry.truthy += 1;
                } else {
                    entry.falsy += 1;
                }
            }
        }
    }

    counts
}

/// JSON truthiness: `false`, `null`, `0`, `""`, `[]`, and `{}` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SINGLE_CATEGORY: CategoryTable = &[("cat1", &["a", "b"])];

    fn source(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        // Field "b" is absent: it must not increment either counter
        let counts = count_by_category(SINGLE_CATEGORY, &source(json!({"a": true})));
        assert_eq!(
            counts["cat1"],
            CategoryCounts {
                truthy: 1,
                falsy: 0
            }
        );
    }

    #[test]
    fn test_falsy_values_count_as_false() {
        let counts = count_by_category(SINGLE_CATEGORY, &source(json!({"a": false, "b": true})));
        assert_eq!(
            counts["cat1"],
            CategoryCounts {
                truthy: 1,
                falsy: 1
            }
        );
    }

    #[test]
    fn test_empty_categories_still_appear() {
        let counts = count_by_category(SINGLE_CATEGORY, &source(json!({"unrelated": 1})));
        assert_eq!(counts["cat1"], CategoryCounts::default());
    }

    #[test]
    fn test_truthiness_follows_source_semantics() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("no")));
        assert!(is_truthy(&json!(["x"])));
    }

    #[test]
    fn test_multiple_categories() {
        const TABLE: CategoryTable = &[("first", &["a"]), ("second", &["b", "c"])];
        let counts = count_by_category(TABLE, &source(json!({"a": true, "b": false, "c": 1})));
        assert_eq!(
            counts["first"],
            CategoryCounts {
                truthy: 1,
                falsy: 0
            }
        );
        assert_eq!(
            counts["second"],
            CategoryCounts {
                truthy: 1,
                falsy: 1
            }
        );
    }

    #[test]
    fn test_serializes_with_true_false_keys() {
        let counts = CategoryCounts {
            truthy: 2,
            falsy: 1,
        };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json, json!({"true": 2, "false": 1}));
    }
}
