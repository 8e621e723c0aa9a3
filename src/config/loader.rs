use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{Table, Value};

use crate::config::types::{DataSaver, ImageSource, PrefKey, Preferences, StorageLocation};

/// Layout version written to new preference files.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur when reading or writing preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write preferences file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Preferences path '{0}' has no parent directory")]
    NoParentDir(PathBuf),

    #[error("Preferences storage unavailable: {0}")]
    Unavailable(String),
}

/// On-disk shape: a version marker plus a flat key -> value table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    schema_version: u32,
    #[serde(default)]
    preferences: Table,
}

/// Returns the default preferences file path.
///
/// Uses `~/.config/booru-browser/preferences.toml` on Unix, or the
/// platform equivalent via `dirs::config_dir()`. Falls back to the
/// current directory if no config dir is available.
pub fn preferences_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("booru-browser").join("preferences.toml")
}

/// Decode a preferences document.
///
/// Absent fields resolve to their defaults. Unrecognized enum keys also
/// resolve to defaults, so data written by newer builds stays readable.
pub fn decode_preferences(content: &str) -> Result<Preferences, toml::de::Error> {
    let file: PreferencesFile = toml::from_str(content)?;
    if file.schema_version > SCHEMA_VERSION {
        tracing::warn!(
            found = file.schema_version,
            supported = SCHEMA_VERSION,
            "preferences written by a newer schema, reading best-effort"
        );
    }

    let table = &file.preferences;
    let mut prefs = Preferences::default();

    if let Some(key) = string_field(table, PrefKey::DataSaver) {
        prefs.data_saver = DataSaver::parse(key).unwrap_or_else(|| {
            tracing::warn!(value = key, "unknown data_saver value, using default");
            DataSaver::default()
        });
    }
    if let Some(key) = string_field(table, PrefKey::ImageSource) {
        prefs.image_source = ImageSource::parse(key).unwrap_or_else(|| {
            tracing::warn!(value = key, "unknown image_source value, using default");
            ImageSource::default()
        });
    }
    if let Some(value) = bool_field(table, PrefKey::ExcludeAi) {
        prefs.exclude_ai = value;
    }
    if let Some(uri) = string_field(table, PrefKey::StorageLocation) {
        prefs.storage_location = StorageLocation::new(uri);
    }

    Ok(prefs)
}

/// Encode a snapshot into the persisted layout.
pub fn encode_preferences(prefs: &Preferences) -> Result<String, toml::ser::Error> {
    let mut table = Table::new();
    for key in PrefKey::all() {
        let value = match key {
            PrefKey::DataSaver => Value::String(prefs.data_saver.key().to_string()),
            PrefKey::ImageSource => Value::String(prefs.image_source.key().to_string()),
            PrefKey::ExcludeAi => Value::Boolean(prefs.exclude_ai),
            PrefKey::StorageLocation => Value::String(prefs.storage_location.as_str().to_string()),
        };
        table.insert(key.as_str().to_string(), value);
    }

    toml::to_string(&PreferencesFile {
        schema_version: SCHEMA_VERSION,
        preferences: table,
    })
}

fn string_field(table: &Table, key: PrefKey) -> Option<&str> {
    table.get(key.as_str()).and_then(Value::as_str)
}

fn bool_field(table: &Table, key: PrefKey) -> Option<bool> {
    table.get(key.as_str()).and_then(Value::as_bool)
}
