use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Content rating reported by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Safe,
    Sensitive,
    Questionable,
    Explicit,
    #[default]
    Unknown,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Sensitive => "Sensitive",
            Self::Questionable => "Questionable",
            Self::Explicit => "Explicit",
            Self::Unknown => "Unknown",
        }
    }
}

/// Tag category, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Artist,
    Character,
    Copyright,
    General,
    Meta,
    Other,
}

impl TagCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Character => "Character",
            Self::Copyright => "Copyright",
            Self::General => "General",
            Self::Meta => "Meta",
            Self::Other => "Other",
        }
    }

    pub fn pluralised_label(&self) -> &'static str {
        match self {
            Self::Artist => "Artists",
            Self::Character => "Characters",
            Self::Copyright => "Copyrights",
            Self::General => "General",
            Self::Meta => "Meta",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    pub category: TagCategory,
    pub tags: Vec<String>,
}

impl TagGroup {
    pub fn new<I, S>(category: TagCategory, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct MetadataRecord {
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    rating: Rating,
    #[serde(default)]
    pixiv_url: Option<String>,
    #[serde(default)]
    grouped_tags: Vec<TagGroup>,
}

/// Descriptive information shown in the image detail sheet.
///
/// Read-only once built. `all_tags` is derived from `grouped_tags`: every
/// tag once, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MetadataRecord", into = "MetadataRecord")]
pub struct ImageMetadata {
    artist: Option<String>,
    source: Option<String>,
    rating: Rating,
    pixiv_url: Option<String>,
    grouped_tags: Vec<TagGroup>,
    all_tags: Vec<String>,
}

impl ImageMetadata {
    pub fn new(
        artist: Option<String>,
        source: Option<String>,
        rating: Rating,
        pixiv_url: Option<String>,
        grouped_tags: Vec<TagGroup>,
    ) -> Self {
        let all_tags = union_of(&grouped_tags);
        Self {
            artist,
            source,
            rating,
            pixiv_url,
            grouped_tags,
            all_tags,
        }
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn pixiv_url(&self) -> Option<&str> {
        self.pixiv_url.as_deref()
    }

    pub fn grouped_tags(&self) -> &[TagGroup] {
        &self.grouped_tags
    }

    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.all_tags.iter().any(|t| t == tag)
    }
}

impl From<MetadataRecord> for ImageMetadata {
    fn from(record: MetadataRecord) -> Self {
        Self::new(
            record.artist,
            record.source,
            record.rating,
            record.pixiv_url,
            record.grouped_tags,
        )
    }
}

impl From<ImageMetadata> for MetadataRecord {
    fn from(metadata: ImageMetadata) -> Self {
        Self {
            artist: metadata.artist,
            source: metadata.source,
            rating: metadata.rating,
            pixiv_url: metadata.pixiv_url,
            grouped_tags: metadata.grouped_tags,
        }
    }
}

fn union_of(groups: &[TagGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|g| g.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
