//! Turning user-entered tags into a results route.

use crate::config::{ImageSource, Preferences};
use crate::navigation::Destination;

/// Tag excluded from queries when AI-generated images are hidden.
pub const AI_GENERATED_TAG: &str = "ai_generated";

/// Normalized, whitespace-separated tag list typed into the search screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    tags: Vec<String>,
}

impl SearchQuery {
    /// Split on whitespace, dropping duplicates while keeping order.
    pub fn new(input: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in input.split_whitespace() {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Whether the user already included or excluded `tag` explicitly.
    pub fn mentions(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .any(|t| t.strip_prefix('-').unwrap_or(t) == tag)
    }

    /// Query string sent to the source, with the AI filter applied.
    pub fn to_query_string(&self, exclude_ai: bool) -> String {
        let mut parts: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        let exclusion = format!("-{AI_GENERATED_TAG}");
        if exclude_ai && !self.mentions(AI_GENERATED_TAG) {
            parts.push(&exclusion);
        }
        parts.join(" ")
    }

    pub fn to_destination(&self, source: ImageSource, exclude_ai: bool) -> Destination {
        Destination::results(source, self.to_query_string(exclude_ai))
    }

    /// Results route using the configured source and AI filter.
    pub fn destination_for(&self, prefs: &Preferences) -> Destination {
        self.to_destination(prefs.image_source, prefs.exclude_ai)
    }
}
