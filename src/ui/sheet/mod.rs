//! Image info sheet: visibility state machine and content model.

mod content;
mod intent;
mod reducer;
mod state;

pub use content::{
    copy_tag, is_valid_url, pluralise, CopyAction, SectionBody, SheetContent, SheetSection,
};
pub use intent::SheetIntent;
pub use reducer::SheetReducer;
pub use state::{InfoSheetState, SheetValue};
