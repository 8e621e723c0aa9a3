//! System clipboard access for the sheet's copy actions.

use arboard::Clipboard;
use thiserror::Error;

use crate::ui::sheet::CopyAction;

#[derive(Debug, Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Place the action's text on the clipboard and return its confirmation message.
    pub fn copy<'a>(&mut self, action: &'a CopyAction) -> Result<&'a str, ClipboardError> {
        self.clipboard.set_text(action.text.clone())?;
        tracing::debug!(len = action.text.len(), "copied to clipboard");
        Ok(&action.message)
    }
}
