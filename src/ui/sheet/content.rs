//! Read-only section model for the image info sheet.

use std::fmt::Write as _;

use url::Url;

use crate::image::{Image, ImageMetadata};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Text(String),
    Link(String),
    /// Tag chips; tapping one copies that tag.
    Chips(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSection {
    pub heading: String,
    pub body: SectionBody,
}

/// Text placed on the clipboard plus the confirmation shown afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAction {
    pub text: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetContent {
    pub sections: Vec<SheetSection>,
    pub copy_all: Option<CopyAction>,
}

impl SheetContent {
    /// Sheet content for `image`, or `None` when the source supplied no metadata.
    pub fn for_image(image: &Image) -> Option<Self> {
        image.metadata().map(Self::from_metadata)
    }

    pub fn from_metadata(metadata: &ImageMetadata) -> Self {
        let mut sections = Vec::new();

        if let Some(artist) = metadata.artist() {
            sections.push(text_section("Artist", artist));
        }
        if let Some(source) = metadata.source() {
            let body = if is_valid_url(source) {
                SectionBody::Link(source.to_string())
            } else {
                SectionBody::Text(source.to_string())
            };
            sections.push(SheetSection {
                heading: "Source".to_string(),
                body,
            });
        }
        sections.push(text_section("Rating", metadata.rating().label()));
        if let Some(pixiv) = metadata.pixiv_url() {
            sections.push(SheetSection {
                heading: "Pixiv URL".to_string(),
                body: SectionBody::Link(pixiv.to_string()),
            });
        }
        for group in metadata.grouped_tags() {
            sections.push(SheetSection {
                heading: pluralise(
                    group.category.label(),
                    group.tags.len(),
                    group.category.pluralised_label(),
                )
                .to_string(),
                body: SectionBody::Chips(group.tags.clone()),
            });
        }

        let all_tags = metadata.all_tags();
        let copy_all = (!all_tags.is_empty()).then(|| CopyAction {
            text: all_tags.join(" "),
            message: format!(
                "Copied {} {}",
                all_tags.len(),
                pluralise("tag", all_tags.len(), "tags")
            ),
        });

        Self { sections, copy_all }
    }

    /// Plain-text rendering, one heading per block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "{}", section.heading);
            match &section.body {
                SectionBody::Text(text) => {
                    let _ = writeln!(out, "  {text}");
                }
                SectionBody::Link(link) => {
                    let _ = writeln!(out, "  <{link}>");
                }
                SectionBody::Chips(tags) => {
                    let _ = writeln!(out, "  {}", tags.join(", "));
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Action for tapping a single tag chip.
pub fn copy_tag(tag: &str) -> CopyAction {
    CopyAction {
        text: tag.to_string(),
        message: format!("Copied {tag}"),
    }
}

/// True if `s` is an absolute http(s) URL with a host.
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

pub fn pluralise<'a>(singular: &'a str, count: usize, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

fn text_section(heading: &str, text: &str) -> SheetSection {
    SheetSection {
        heading: heading.to_string(),
        body: SectionBody::Text(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Rating, TagCategory, TagGroup};

    fn metadata(source: Option<&str>, groups: Vec<TagGroup>) -> ImageMetadata {
        ImageMetadata::new(
            Some("alice".to_string()),
            source.map(str::to_string),
            Rating::Questionable,
            Some("https://www.pixiv.net/artworks/1".to_string()),
            groups,
        )
    }

    #[test]
    fn sections_follow_display_order() {
        let content = SheetContent::from_metadata(&metadata(
            Some("https://twitter.com/alice/status/1"),
            vec![
                TagGroup::new(TagCategory::Artist, ["alice"]),
                TagGroup::new(TagCategory::General, ["sky", "cloud"]),
            ],
        ));
        let headings: Vec<&str> = content
            .sections
            .iter()
            .map(|s| s.heading.as_str())
            .collect();
        assert_eq!(headings[..4], ["Artist", "Source", "Rating", "Pixiv URL"]);
        assert_eq!(headings[4..], ["Artist", "General"]);
        let rating = SectionBody::Text("Questionable".into());
        assert_eq!(content.sections[2].body, rating);
    }

    #[test]
    fn non_url_source_renders_as_text() {
        let content = SheetContent::from_metadata(&metadata(Some("scanned magazine"), vec![]));
        assert_eq!(
            content.sections[1].body,
            SectionBody::Text("scanned magazine".into())
        );

        let content = SheetContent::from_metadata(&metadata(Some("https://example.com/a"), vec![]));
        assert_eq!(
            content.sections[1].body,
            SectionBody::Link("https://example.com/a".into())
        );
    }

    #[test]
    fn group_headings_are_pluralised() {
        let content = SheetContent::from_metadata(&metadata(
            None,
            vec![
                TagGroup::new(TagCategory::Character, ["miku"]),
                TagGroup::new(TagCategory::Copyright, ["vocaloid", "project_diva"]),
            ],
        ));
        let headings: Vec<&str> = content
            .sections
            .iter()
            .map(|s| s.heading.as_str())
            .collect();
        assert!(headings.contains(&"Character"));
        assert!(headings.contains(&"Copyrights"));
    }

    #[test]
    fn copy_all_joins_unique_tags() {
        let content = SheetContent::from_metadata(&metadata(
            None,
            vec![
                TagGroup::new(TagCategory::Artist, ["alice"]),
                TagGroup::new(TagCategory::General, ["alice", "solo"]),
            ],
        ));
        let copy = content.copy_all.unwrap();
        assert_eq!(copy.text, "alice solo");
        assert_eq!(copy.message, "Copied 2 tags");
    }

    #[test]
    fn no_tags_means_no_copy_action() {
        let content = SheetContent::from_metadata(&metadata(None, vec![]));
        assert!(content.copy_all.is_none());
    }

    #[test]
    fn single_tag_message_is_singular() {
        let content = SheetContent::from_metadata(&metadata(
            None,
            vec![TagGroup::new(TagCategory::Meta, ["highres"])],
        ));
        assert_eq!(content.copy_all.unwrap().message, "Copied 1 tag");
    }

    #[test]
    fn chip_copies_single_tag() {
        let copy = copy_tag("long_hair");
        assert_eq!(copy.text, "long_hair");
        assert_eq!(copy.message, "Copied long_hair");
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://danbooru.donmai.us/posts/1"));
        assert!(is_valid_url("http://example.com"));
        assert!(!is_valid_url("example.com/page"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url(""));
    }
}
