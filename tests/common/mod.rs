//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use booru_browser::config::ImageSource;
use booru_browser::image::{Image, ImageMetadata, Rating, TagCategory, TagGroup};
use tempfile::TempDir;

/// Create a temp dir and the path of a preferences file inside it.
///
/// The file itself is only created when `content` is given.
pub fn temp_prefs(content: Option<&str>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.toml");
    if let Some(content) = content {
        std::fs::write(&path, content).expect("Failed to write preferences");
    }
    (temp_dir, path)
}

/// An image with a typical metadata block.
pub fn sample_image() -> Image {
    let metadata = ImageMetadata::new(
        Some("alice".to_string()),
        Some("https://twitter.com/alice/status/42".to_string()),
        Rating::Sensitive,
        None,
        vec![
            TagGroup::new(TagCategory::Artist, ["alice"]),
            TagGroup::new(TagCategory::Character, ["hatsune_miku"]),
            TagGroup::new(TagCategory::General, ["1girl", "long_hair", "alice"]),
        ],
    );
    Image::new(
        "42",
        "png",
        "https://img.example/preview/42.jpg",
        "https://img.example/full/42.png",
        "https://img.example/sample/42.jpg",
        ImageSource::Danbooru,
    )
    .with_metadata(metadata)
}
