//! User record loading and access.
//!
//! The user record is a single JSON document with fixed top-level keys
//! (`account`, `devices`, `profile`, `preferences`, `location`). It is loaded
//! once and treated as immutable for the object's lifetime. Sections are kept
//! as dynamic JSON maps because the field sets are open-ended and driven by
//! static tables elsewhere in the crate.
//!
//! Access is deliberately strict: a missing section or required field is an
//! error, never a silent default.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error_handling::RecordError;

/// The loaded user record.
#[derive(Debug, Clone)]
pub struct UserRecord {
    doc: Map<String, Value>,
}

impl UserRecord {
    /// Loads a user record from a JSON file.
    ///
    /// The file name must contain `.json`; anything else is rejected before
    /// the file is touched.
    ///
    /// # Errors
    ///
    /// - `RecordError::Format` if the file name lacks `.json`
    /// - `RecordError::Io` if the file cannot be read
    /// - `RecordError::Json` if the contents are not a JSON object
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        if !path.to_string_lossy().contains(".json") {
            return Err(RecordError::Format(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let doc: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|source| RecordError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Loaded user record from {}", path.display());
        Ok(UserRecord { doc })
    }

    /// Builds a record directly from a parsed document. Used by tests and by
    /// callers that already hold the JSON in memory.
    pub fn from_document(doc: Map<String, Value>) -> Self {
        UserRecord { doc }
    }

    /// The `account` section.
    pub fn account(&self) -> Result<&Map<String, Value>, RecordError> {
        self.object_section("account")
    }

    /// The `profile` section.
    pub fn profile(&self) -> Result<&Map<String, Value>, RecordError> {
        self.object_section("profile")
    }

    /// The `preferences` section.
    pub fn preferences(&self) -> Result<&Map<String, Value>, RecordError> {
        self.object_section("preferences")
    }

    /// The `location` section.
    pub fn location(&self) -> Result<&Map<String, Value>, RecordError> {
        self.object_section("location")
    }

    /// The `devices` section: a sequence of device entries.
    pub fn devices(&self) -> Result<&[Value], RecordError> {
        let value = self.section("devices")?;
        value.as_array().map(Vec::as_slice).ok_or_else(|| {
            RecordError::FieldType {
                section: "record".into(),
                field: "devices".into(),
                expected: "an array",
            }
        })
    }

    /// The `ip_address` of every device entry, in order.
    pub fn device_ips(&self) -> Result<Vec<String>, RecordError> {
        self.devices()?
            .iter()
            .map(|device| {
                let entry = device.as_object().ok_or_else(|| RecordError::FieldType {
                    section: "devices".into(),
                    field: "entry".into(),
                    expected: "an object",
                })?;
                Ok(require_str(entry, "devices", "ip_address")?.to_string())
            })
            .collect()
    }

    fn section(&self, name: &str) -> Result<&Value, RecordError> {
        self.doc.get(name).ok_or_else(|| RecordError::MissingField {
            section: "record".into(),
            field: name.into(),
        })
    }

    fn object_section(&self, name: &str) -> Result<&Map<String, Value>, RecordError> {
        let value = self.section(name)?;
        value.as_object().ok_or_else(|| RecordError::FieldType {
            section: "record".into(),
            field: name.into(),
            expected: "an object",
        })
    }
}

/// Fetches a required field from a section, failing on absence.
pub fn require<'a>(
    section: &'a Map<String, Value>,
    section_name: &str,
    field: &str,
) -> Result<&'a Value, RecordError> {
    section.get(field).ok_or_else(|| RecordError::MissingField {
        section: section_name.into(),
        field: field.into(),
    })
}

/// Fetches a required string field from a section.
pub fn require_str<'a>(
    section: &'a Map<String, Value>,
    section_name: &str,
    field: &str,
) -> Result<&'a str, RecordError> {
    require(section, section_name, field)?
        .as_str()
        .ok_or_else(|| RecordError::FieldType {
            section: section_name.into(),
            field: field.into(),
            expected: "a string",
        })
}

/// Fetches a required numeric field from a section.
pub fn require_f64(
    section: &Map<String, Value>,
    section_name: &str,
    field: &str,
) -> Result<f64, RecordError> {
    require(section, section_name, field)?
        .as_f64()
        .ok_or_else(|| RecordError::FieldType {
            section: section_name.into(),
            field: field.into(),
            expected: "a number",
        })
}
