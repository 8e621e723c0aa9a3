use std::fmt;

use serde::{Deserialize, Serialize};

/// Data saver tier.
///
/// The `key()` value is persisted. Once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataSaver {
    On,
    Off,
    #[default]
    Auto,
}

impl DataSaver {
    /// Stable key for persistence.
    pub fn key(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Auto => "auto",
        }
    }

    /// All variants, in picker order.
    pub fn all() -> &'static [DataSaver] {
        &[Self::On, Self::Off, Self::Auto]
    }

    /// Parse a persisted key. Unknown keys return `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Decode a persisted key, falling back to the default for anything unrecognized.
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::On => "Always",
            Self::Off => "Never",
            Self::Auto => "When using mobile data",
        }
    }
}

/// Backend imageboard used for searches.
///
/// The `key()` value is persisted and embedded in route tokens. Do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageSource {
    #[serde(rename = "r34")]
    #[default]
    R34,
    #[serde(rename = "safebooru")]
    Safebooru,
    #[serde(rename = "danbooru")]
    Danbooru,
    #[serde(rename = "gelbooru")]
    Gelbooru,
}

impl ImageSource {
    pub fn key(&self) -> &'static str {
        match self {
            Self::R34 => "r34",
            Self::Safebooru => "safebooru",
            Self::Danbooru => "danbooru",
            Self::Gelbooru => "gelbooru",
        }
    }

    pub fn all() -> &'static [ImageSource] {
        &[Self::R34, Self::Safebooru, Self::Danbooru, Self::Gelbooru]
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "r34" => Some(Self::R34),
            "safebooru" => Some(Self::Safebooru),
            "danbooru" => Some(Self::Danbooru),
            "gelbooru" => Some(Self::Gelbooru),
            _ => None,
        }
    }

    /// Decode a persisted key. Absent or unknown sources resolve to `R34`.
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::R34 => "Rule34",
            Self::Safebooru => "Safebooru",
            Self::Danbooru => "Danbooru",
            Self::Gelbooru => "Gelbooru",
        }
    }
}

/// Opaque reference to the download directory (a platform URI).
///
/// An empty value means the user has not picked a location yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageLocation(String);

impl StorageLocation {
    /// Wrap a URI as given. The value is stored verbatim.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable point-in-time user settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub data_saver: DataSaver,
    pub image_source: ImageSource,
    pub exclude_ai: bool,
    pub storage_location: StorageLocation,
}

impl Preferences {
    /// Return a new snapshot with `update` applied. `self` is left untouched.
    pub fn with(&self, update: &PreferenceUpdate) -> Self {
        let mut next = self.clone();
        match update {
            PreferenceUpdate::DataSaver(value) => next.data_saver = *value,
            PreferenceUpdate::ImageSource(value) => next.image_source = *value,
            PreferenceUpdate::ExcludeAi(value) => next.exclude_ai = *value,
            PreferenceUpdate::StorageLocation(value) => next.storage_location = value.clone(),
        }
        next
    }
}

/// Identifier of a single preference field.
///
/// `as_str()` is the persisted key. Once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    DataSaver,
    ImageSource,
    ExcludeAi,
    StorageLocation,
}

impl PrefKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataSaver => "data_saver",
            Self::ImageSource => "image_source",
            Self::ExcludeAi => "exclude_ai",
            Self::StorageLocation => "storage_location",
        }
    }

    pub fn all() -> &'static [PrefKey] {
        &[
            Self::DataSaver,
            Self::ImageSource,
            Self::ExcludeAi,
            Self::StorageLocation,
        ]
    }

    /// Parse from a persisted key. Unknown keys return `None` (forward compat).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "data_saver" => Some(Self::DataSaver),
            "image_source" => Some(Self::ImageSource),
            "exclude_ai" => Some(Self::ExcludeAi),
            "storage_location" => Some(Self::StorageLocation),
            _ => None,
        }
    }
}

/// A single field-level write. Later writes to the same field win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceUpdate {
    DataSaver(DataSaver),
    ImageSource(ImageSource),
    ExcludeAi(bool),
    StorageLocation(StorageLocation),
}

impl PreferenceUpdate {
    pub fn key(&self) -> PrefKey {
        match self {
            Self::DataSaver(_) => PrefKey::DataSaver,
            Self::ImageSource(_) => PrefKey::ImageSource,
            Self::ExcludeAi(_) => PrefKey::ExcludeAi,
            Self::StorageLocation(_) => PrefKey::StorageLocation,
        }
    }

    /// Build an update from textual input, as typed on the command line.
    ///
    /// Unlike persisted data, user input is strict: unknown values are rejected.
    /// Surrounding whitespace is dropped.
    pub fn parse(key: PrefKey, value: &str) -> Option<Self> {
        let value = value.trim();
        match key {
            PrefKey::DataSaver => DataSaver::parse(value).map(Self::DataSaver),
            PrefKey::ImageSource => ImageSource::parse(value).map(Self::ImageSource),
            PrefKey::ExcludeAi => value.parse::<bool>().ok().map(Self::ExcludeAi),
            PrefKey::StorageLocation => Some(Self::StorageLocation(StorageLocation::new(value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_keys_round_trip() {
        for value in DataSaver::all() {
            assert_eq!(DataSaver::from_key(value.key()), *value);
        }
        for value in ImageSource::all() {
            assert_eq!(ImageSource::from_key(value.key()), *value);
        }
        for key in PrefKey::all() {
            assert_eq!(PrefKey::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        assert_eq!(ImageSource::from_key(""), ImageSource::R34);
        assert_eq!(ImageSource::from_key("e621"), ImageSource::R34);
        assert_eq!(DataSaver::from_key("sometimes"), DataSaver::Auto);
    }

    #[test]
    fn serde_names_match_persisted_keys() {
        for value in ImageSource::all() {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.key()));
        }
    }

    #[test]
    fn with_replaces_only_the_named_field() {
        let base = Preferences::default();
        let next = base.with(&PreferenceUpdate::ExcludeAi(true));
        assert!(next.exclude_ai);
        assert_eq!(next.data_saver, base.data_saver);
        assert_eq!(next.image_source, base.image_source);
        assert!(!base.exclude_ai);
    }

    #[test]
    fn update_parse_is_strict() {
        assert_eq!(
            PreferenceUpdate::parse(PrefKey::ImageSource, "danbooru"),
            Some(PreferenceUpdate::ImageSource(ImageSource::Danbooru))
        );
        assert_eq!(PreferenceUpdate::parse(PrefKey::ImageSource, "nope"), None);
        assert_eq!(PreferenceUpdate::parse(PrefKey::ExcludeAi, "yes"), None);
    }

    #[test]
    fn storage_location_is_kept_verbatim() {
        assert!(StorageLocation::new("").is_unset());
        let uri = " content://tree/primary%3ADownloads ";
        assert_eq!(StorageLocation::new(uri).as_str(), uri);
        assert_eq!(StorageLocation::new(uri).to_string(), uri);
    }

    #[test]
    fn typed_storage_location_is_trimmed() {
        let expected = StorageLocation::new("content://downloads");
        assert_eq!(
            PreferenceUpdate::parse(PrefKey::StorageLocation, "  content://downloads\n"),
            Some(PreferenceUpdate::StorageLocation(expected))
        );
        assert_eq!(
            PreferenceUpdate::parse(PrefKey::DataSaver, " on "),
            Some(PreferenceUpdate::DataSaver(DataSaver::On))
        );
    }
}
