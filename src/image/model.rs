use serde::{Deserialize, Serialize};

use crate::config::{DataSaver, ImageSource};
use crate::image::metadata::ImageMetadata;

/// Kind of network the device is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Unmetered,
    Metered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImageRecord {
    file_name: String,
    file_format: String,
    preview_url: String,
    file_url: String,
    sample_url: String,
    // Records saved before multi-source support carry no source.
    #[serde(default)]
    image_source: ImageSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<ImageMetadata>,
}

/// One fetched media item.
///
/// Everything except the two quality flags is fixed at construction.
/// The flags belong to the viewer and are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ImageRecord", into = "ImageRecord")]
pub struct Image {
    file_name: String,
    file_format: String,
    preview_url: String,
    file_url: String,
    sample_url: String,
    image_source: ImageSource,
    metadata: Option<ImageMetadata>,
    highest_quality_format_url: String,
    prefer_hd: bool,
    hd_quality_override: Option<bool>,
}

impl Image {
    pub fn new(
        file_name: impl Into<String>,
        file_format: impl Into<String>,
        preview_url: impl Into<String>,
        file_url: impl Into<String>,
        sample_url: impl Into<String>,
        image_source: ImageSource,
    ) -> Self {
        Self::from(ImageRecord {
            file_name: file_name.into(),
            file_format: file_format.into(),
            preview_url: preview_url.into(),
            file_url: file_url.into(),
            sample_url: sample_url.into(),
            image_source,
            metadata: None,
        })
    }

    pub fn with_metadata(mut self, metadata: ImageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    pub fn sample_url(&self) -> &str {
        &self.sample_url
    }

    pub fn image_source(&self) -> ImageSource {
        self.image_source
    }

    pub fn metadata(&self) -> Option<&ImageMetadata> {
        self.metadata.as_ref()
    }

    /// Full-resolution URL, or the sample URL when the source gave none.
    /// Downloads always use this.
    pub fn highest_quality_format_url(&self) -> &str {
        &self.highest_quality_format_url
    }

    pub fn prefer_hd(&self) -> bool {
        self.prefer_hd
    }

    pub fn hd_quality_override(&self) -> Option<bool> {
        self.hd_quality_override
    }

    /// Flip HD preference, or force it with `Some`. Either way the choice
    /// becomes an explicit override.
    pub fn toggle_hd(&mut self, to: Option<bool>) {
        self.prefer_hd = match to {
            None => !self.prefer_hd,
            Some(value) => value,
        };
        self.hd_quality_override = Some(self.prefer_hd);
    }

    /// True when data saver should hold this image back to its sample.
    pub fn data_saver_applies(&self, data_saver: DataSaver, network: NetworkKind) -> bool {
        let saving = match data_saver {
            DataSaver::On => true,
            DataSaver::Off => false,
            DataSaver::Auto => network == NetworkKind::Metered,
        };
        saving && !self.prefer_hd
    }

    /// URL the viewer should load under the given data saver setting.
    pub fn display_url(&self, data_saver: DataSaver, network: NetworkKind) -> &str {
        if self.data_saver_applies(data_saver, network) && !self.sample_url.is_empty() {
            &self.sample_url
        } else {
            &self.highest_quality_format_url
        }
    }
}

impl From<ImageRecord> for Image {
    fn from(record: ImageRecord) -> Self {
        let highest_quality_format_url = if record.file_url.is_empty() {
            record.sample_url.clone()
        } else {
            record.file_url.clone()
        };
        Self {
            file_name: record.file_name,
            file_format: record.file_format,
            preview_url: record.preview_url,
            file_url: record.file_url,
            sample_url: record.sample_url,
            image_source: record.image_source,
            metadata: record.metadata,
            highest_quality_format_url,
            prefer_hd: false,
            hd_quality_override: None,
        }
    }
}

impl From<Image> for ImageRecord {
    fn from(image: Image) -> Self {
        Self {
            file_name: image.file_name,
            file_format: image.file_format,
            preview_url: image.preview_url,
            file_url: image.file_url,
            sample_url: image.sample_url,
            image_source: image.image_source,
            metadata: image.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(file_url: &str) -> Image {
        Image::new(
            "123",
            "jpg",
            "https://img.example/preview/123.jpg",
            file_url,
            "https://img.example/sample/123.jpg",
            ImageSource::Danbooru,
        )
    }

    #[test]
    fn highest_quality_prefers_file_url() {
        let img = image("https://img.example/full/123.jpg");
        assert_eq!(
            img.highest_quality_format_url(),
            "https://img.example/full/123.jpg"
        );
    }

    #[test]
    fn empty_file_url_falls_back_to_sample() {
        let img = image("");
        assert_eq!(
            img.highest_quality_format_url(),
            "https://img.example/sample/123.jpg"
        );
    }

    #[test]
    fn toggle_hd_flips_and_records_override() {
        let mut img = image("https://img.example/full/123.jpg");
        assert_eq!(img.hd_quality_override(), None);

        img.toggle_hd(None);
        assert!(img.prefer_hd());
        assert_eq!(img.hd_quality_override(), Some(true));

        img.toggle_hd(Some(false));
        assert!(!img.prefer_hd());
        assert_eq!(img.hd_quality_override(), Some(false));
    }

    #[test]
    fn data_saver_selects_sample_unless_hd_preferred() {
        let mut img = image("https://img.example/full/123.jpg");
        let sample = "https://img.example/sample/123.jpg";
        let full = "https://img.example/full/123.jpg";

        let metered = NetworkKind::Metered;
        let unmetered = NetworkKind::Unmetered;

        assert_eq!(img.display_url(DataSaver::On, unmetered), sample);
        assert_eq!(img.display_url(DataSaver::Off, metered), full);
        assert_eq!(img.display_url(DataSaver::Auto, metered), sample);
        assert_eq!(img.display_url(DataSaver::Auto, unmetered), full);

        img.toggle_hd(Some(true));
        assert_eq!(img.display_url(DataSaver::On, NetworkKind::Metered), full);
    }

    #[test]
    fn record_without_source_defaults_to_r34() {
        let img: Image = serde_json::from_str(
            r#"{
                "file_name": "9",
                "file_format": "png",
                "preview_url": "p",
                "file_url": "",
                "sample_url": "s"
            }"#,
        )
        .unwrap();
        assert_eq!(img.image_source(), ImageSource::R34);
        assert_eq!(img.highest_quality_format_url(), "s");
        assert!(img.metadata().is_none());
    }

    #[test]
    fn quality_flags_are_not_serialized() {
        let mut img = image("f");
        img.toggle_hd(Some(true));
        let json = serde_json::to_string(&img).unwrap();
        assert!(!json.contains("prefer_hd"));
        let back: Image = serde_json::from_str(&json).unwrap();
        assert!(!back.prefer_hd());
    }
}
