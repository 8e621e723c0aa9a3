//! Fetched media items and their descriptive metadata.

mod metadata;
mod model;

pub use metadata::{ImageMetadata, Rating, TagCategory, TagGroup};
pub use model::{Image, NetworkKind};
