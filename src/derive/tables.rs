//! Static field tables driving the table-parameterized derivations.
//!
//! Kept as constant data rather than inline literals so the counting routine
//! can be reused and tested against arbitrary tables.

/// A category table: category name mapped to the fields it covers.
pub type CategoryTable = &'static [(&'static str, &'static [&'static str])];

/// Dealbreaker preference fields, grouped by category. Applied to the
/// `preferences` section.
pub const DEALBREAKER_CATEGORIES: CategoryTable = &[
    ("physical", &["age_dealbreaker", "height_dealbreaker"]),
    (
        "identity",
        &[
            "ethnicity_dealbreaker",
            "religion_dealbreaker",
            "politics_dealbreaker",
        ],
    ),
    (
        "lifestyle",
        &[
            "smoking_dealbreaker",
            "drinking_dealbreaker",
            "marijuana_dealbreaker",
            "drugs_dealbreaker",
        ],
    ),
    ("career", &["education_attained_dealbreaker"]),
    (
        "future_plans",
        &["children_dealbreaker", "family_plans_dealbreaker"],
    ),
];

/// Displayed-attribute flags, grouped by category. Applied to the `profile`
/// section.
pub const DISPLAYED_CATEGORIES: CategoryTable = &[
    (
        "identity",
        &[
            "gender_identity_displayed",
            "ethnicities_displayed",
            "religions_displayed",
            "politics_displayed",
            "languages_spoken_displayed",
            "hometowns_displayed",
        ],
    ),
    (
        "lifestyle",
        &[
            "smoking_displayed",
            "drinking_displayed",
            "marijuana_displayed",
            "drugs_displayed",
            "vaccination_status_displayed",
            "pets_displayed",
        ],
    ),
    (
        "career",
        &[
            "workplaces_displayed",
            "job_title_displayed",
            "schools_displayed",
        ],
    ),
    (
        "future_plans",
        &[
            "family_plans_displayed",
            "dating_intention_displayed",
            "children_displayed",
            "relationship_type_displayed",
        ],
    ),
];

/// Profile fields with a matching preference counterpart, paired by domain
/// meaning with [`PREFERENCE_SELECTION_FIELDS`].
pub const PROFILE_SELECTION_FIELDS: &[&str] = &[
    "religions",
    "ethnicities",
    "smoking",
    "drinking",
    "marijuana",
    "drugs",
    "children",
    "family_plans",
    "education_attained",
    "politics",
];

/// Preference counterparts of [`PROFILE_SELECTION_FIELDS`], in the same
/// order.
pub const PREFERENCE_SELECTION_FIELDS: &[&str] = &[
    "religion_preference",
    "ethnicity_preference",
    "smoking_preference",
    "drinking_preference",
    "marijuana_preference",
    "drugs_preference",
    "children_preference",
    "family_plans_preference",
    "education_attained_preference",
    "politics_preference",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_field_lists_are_parallel() {
        assert_eq!(
            PROFILE_SELECTION_FIELDS.len(),
            PREFERENCE_SELECTION_FIELDS.len()
        );
    }

    #[test]
    fn test_category_tables_have_no_duplicate_fields() {
        for table in [DEALBREAKER_CATEGORIES, DISPLAYED_CATEGORIES] {
            let mut seen = std::collections::HashSet::new();
            for (_, fields) in table {
                for field in *fields {
                    assert!(seen.insert(field), "duplicate field {} in table", field);
                }
            }
        }
    }
}
