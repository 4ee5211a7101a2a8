//! End-to-end tests over a complete user record on disk.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use user_analytics::{Config, GeoFailure, UserAnalytics};

/// Builds a workspace with a record file, a media directory holding two
/// images, and an empty assets directory, then returns the matching config.
fn fixture() -> (TempDir, Config) {
    let dir = TempDir::new().expect("Failed to create temp directory");

    let record = json!({
        "account": {
            "signup_time": "2023-01-01 08:30:00.000000",
            "last_seen": "2023-06-15 21:10:05.123456",
            "last_pause_time": "2023-03-01 00:00:00.000000",
            "last_unpause_time": "2023-03-11 00:00:00.000000"
        },
        "devices": [
            {"ip_address": "10.0.0.1"},
            {"ip_address": "not-an-ip"}
        ],
        "profile": {
            "first_name": "Ada",
            "age": 32,
            "height_centimeters": 170.0,
            "gender": "woman",
            "ethnicities": ["White/Caucasian"],
            "religions": ["Agnostic"],
            "job_title": "Engineer",
            "workplaces": ["Analytical Engines Ltd"],
            "education_attained": "Graduate degree",
            "hometowns": ["London"],
            "languages_spoken": ["English", "French"],
            "politics": "Moderate",
            "pets": ["Dog"],
            "relationship_types": ["Monogamy"],
            "dating_intention": "Long-term relationship",
            "religions_displayed": true,
            "politics_displayed": false,
            "smoking": "No",
            "drinking": "Sometimes"
        },
        "preferences": {
            "religion_preference": ["Open to all"],
            "age_dealbreaker": true,
            "height_dealbreaker": false,
            "religion_dealbreaker": false
        },
        "location": {
            "cbsa": "Springfield, IL",
            "latitude": 39.78,
            "longitude": -89.65,
            "country_short": "US",
            "neighborhood": "Enos Park",
            "admin_area_1_short": "IL"
        }
    });

    let user_file = dir.path().join("user.json");
    fs::write(&user_file, serde_json::to_string_pretty(&record).unwrap()).unwrap();

    let media = dir.path().join("media");
    fs::create_dir(&media).unwrap();
    fs::write(media.join("photo1.jpg"), b"jpg bytes").unwrap();
    fs::write(media.join("photo2.png"), b"png bytes").unwrap();
    fs::write(media.join("notes.txt"), b"not an image").unwrap();

    let assets = dir.path().join("assets");

    let config = Config {
        user_file_path: user_file,
        assets_path: assets,
        media_path: media,
        geolite_db_path: None,
        geocoder_url: "http://127.0.0.1:1".to_string(),
        log_level: Default::default(),
        log_format: Default::default(),
    };

    (dir, config)
}

#[test]
fn construction_loads_record_and_syncs_media() {
    let (_dir, config) = fixture();
    let assets_path = config.assets_path.clone();

    let analytics = UserAnalytics::new(config).expect("construction should succeed");

    // The media copy ran during construction
    assert!(assets_path.join("photo1.jpg").exists());
    assert!(assets_path.join("photo2.png").exists());

    // Only images are reported, in sorted order
    let media = analytics.media_file_paths().unwrap();
    let names: Vec<_> = media
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["photo1.jpg", "photo2.png"]);
}

#[test]
fn construction_rejects_non_json_record() {
    let (_dir, mut config) = fixture();
    let renamed = config.user_file_path.with_extension("yaml");
    fs::rename(&config.user_file_path, &renamed).unwrap();
    config.user_file_path = renamed;

    assert!(UserAnalytics::new(config).is_err());
}

#[test]
fn derivations_over_loaded_record() {
    let (_dir, config) = fixture();
    let analytics = UserAnalytics::new(config).unwrap();

    let location = analytics.user_location().unwrap();
    assert_eq!(location.city, "Springfield");
    assert_eq!(location.country, json!("US"));

    let summary = analytics.user_summary().unwrap();
    assert_eq!(summary.height_feet, 5);
    assert_eq!(summary.height_inches, 6.9);
    assert_eq!(summary.last_pause_duration, 10);
    assert_eq!(summary.on_app_duration, 165);

    let displayed = analytics.displayed_counts().unwrap();
    assert_eq!(displayed["identity"].truthy, 1);
    assert_eq!(displayed["identity"].falsy, 1);
    // No career flags present in the fixture, yet the category is reported
    assert_eq!(displayed["career"].truthy, 0);
    assert_eq!(displayed["career"].falsy, 0);

    let dealbreakers = analytics.dealbreaker_counts().unwrap();
    assert_eq!(dealbreakers["physical"].truthy, 1);
    assert_eq!(dealbreakers["physical"].falsy, 1);
    assert_eq!(dealbreakers["identity"].falsy, 1);

    let (profile_values, preference_values) =
        analytics.profile_preference_selections().unwrap();
    // religions, ethnicities, smoking, drinking, education_attained, and
    // politics are present in the profile
    assert_eq!(profile_values.len(), 6);
    assert_eq!(preference_values, vec![json!(["Open to all"])]);
}

#[tokio::test]
async fn device_resolution_without_database_diagnoses_every_ip() {
    let (_dir, config) = fixture();
    let analytics = UserAnalytics::new(config).unwrap();

    let resolutions = analytics.resolve_device_locations().await.unwrap();
    assert_eq!(resolutions.len(), 2);
    assert_eq!(
        resolutions[0].outcome.as_ref().unwrap_err(),
        &GeoFailure::DatabaseUnavailable
    );
    assert_eq!(
        resolutions[1].outcome.as_ref().unwrap_err(),
        &GeoFailure::InvalidAddress
    );

    // The aggregate view drops both without surfacing an error
    let rows = analytics.device_locations().await.unwrap();
    assert!(rows.is_empty());
}

#[test]
fn second_construction_skips_media_copy() {
    let (_dir, config) = fixture();
    let assets_path = config.assets_path.clone();
    let media_path = config.media_path.clone();

    UserAnalytics::new(config.clone()).unwrap();

    // Add a new media file after the first sync; the second construction
    // must leave the populated assets directory untouched
    fs::write(media_path.join("late.jpg"), b"late").unwrap();
    UserAnalytics::new(config).unwrap();

    assert!(!assets_path.join("late.jpg").exists());
}
