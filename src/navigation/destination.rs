use serde::{Deserialize, Serialize};

use crate::config::ImageSource;

/// A navigable screen and the parameters it needs.
///
/// The set is closed: a route token naming anything else is a programming
/// error, not user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Destination {
    Search,
    Results { source: ImageSource, tags: String },
    ImageView { source: ImageSource, id: String },
    Favourites,
    Settings,
}

impl Destination {
    pub fn kind(&self) -> DestinationKind {
        match self {
            Self::Search => DestinationKind::Search,
            Self::Results { .. } => DestinationKind::Results,
            Self::ImageView { .. } => DestinationKind::ImageView,
            Self::Favourites => DestinationKind::Favourites,
            Self::Settings => DestinationKind::Settings,
        }
    }

    pub fn results(source: ImageSource, tags: impl Into<String>) -> Self {
        Self::Results {
            source,
            tags: tags.into(),
        }
    }

    pub fn image_view(source: ImageSource, id: impl Into<String>) -> Self {
        Self::ImageView {
            source,
            id: id.into(),
        }
    }
}

/// Payload-free discriminant of a [`Destination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    Search,
    Results,
    ImageView,
    Favourites,
    Settings,
}

impl DestinationKind {
    /// Discriminant as written in route tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Results => "results",
            Self::ImageView => "image_view",
            Self::Favourites => "favourites",
            Self::Settings => "settings",
        }
    }

    pub fn all() -> &'static [DestinationKind] {
        &[
            Self::Search,
            Self::Results,
            Self::ImageView,
            Self::Favourites,
            Self::Settings,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "search" => Some(Self::Search),
            "results" => Some(Self::Results),
            "image_view" => Some(Self::ImageView),
            "favourites" => Some(Self::Favourites),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }
}
