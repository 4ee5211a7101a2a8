//! User summary derivation.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::derive::duration::days_between;
use crate::derive::height::height_to_imperial;
use crate::error_handling::RecordError;
use crate::record::{require, require_f64, require_str};

/// Flattened view of selected `profile` and `account` fields plus computed
/// height and duration values.
///
/// The profile fields pass through untyped (`Value`): the summary copies
/// whatever shape the source holds and only the computed fields carry a
/// concrete type.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub first_name: Value,
    pub age: Value,
    pub height_feet: i64,
    pub height_inches: f64,
    pub gender: Value,
    pub ethnicities: Value,
    pub religions: Value,
    pub job_title: Value,
    pub workplaces: Value,
    pub education_attained: Value,
    pub hometowns: Value,
    pub languages_spoken: Value,
    pub politics: Value,
    pub pets: Value,
    pub relationship_types: Value,
    pub dating_intention: Value,
    /// Days between the last unpause and last pause, or 0 if the user never
    /// paused (pause fields are only present after a pause).
    pub last_pause_duration: i64,
    /// Days between last seen and signup.
    pub on_app_duration: i64,
}

/// Builds the user summary from the `profile` and `account` sections.
///
/// Every listed profile field must be present, as must `last_seen` and
/// `signup_time` in `account`. The pause timestamps are optional as a pair:
/// when either is absent the pause duration defaults to 0.
pub fn build_user_summary(
    profile: &Map<String, Value>,
    account: &Map<String, Value>,
) -> Result<UserSummary, RecordError> {
    let field = |name: &str| -> Result<Value, RecordError> {
        Ok(require(profile, "profile", name)?.clone())
    };

    let (height_feet, height_inches) =
        height_to_imperial(require_f64(profile, "profile", "height_centimeters")?);

    // The pause times only exist if the user has paused the app, so their
    // presence has to be checked first. A pause field that is present but
    // not a string is a type error, never a silent zero.
    let last_pause_duration = if account.contains_key("last_unpause_time")
        && account.contains_key("last_pause_time")
    {
        days_between(
            require_str(account, "account", "last_unpause_time")?,
            require_str(account, "account", "last_pause_time")?,
        )?
    } else {
        0
    };

    let on_app_duration = days_between(
        require_str(account, "account", "last_seen")?,
        require_str(account, "account", "signup_time")?,
    )?;

    Ok(UserSummary {
        first_name: field("first_name")?,
        age: field("age")?,
        height_feet,
        height_inches,
        gender: field("gender")?,
        ethnicities: field("ethnicities")?,
        religions: field("religions")?,
        job_title: field("job_title")?,
        workplaces: field("workplaces")?,
        education_attained: field("education_attained")?,
        hometowns: field("hometowns")?,
        languages_spoken: field("languages_spoken")?,
        politics: field("politics")?,
        pets: field("pets")?,
        relationship_types: field("relationship_types")?,
        dating_intention: field("dating_intention")?,
        last_pause_duration,
        on_app_duration,
    })
}
