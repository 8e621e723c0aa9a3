use crate::config::{Preferences, StorageLocation};
use crate::ui::mvi::Intent;
use crate::ui::settings::state::PickerField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    /// The store published a new snapshot.
    Snapshot(Preferences),
    OpenPicker(PickerField),
    /// Option at `index` chosen in the open picker. Closes the picker.
    Pick(usize),
    DismissPicker,
    ToggleExcludeAi,
    OpenStoragePrompt,
    /// A directory was chosen in the storage prompt.
    StorageChosen(StorageLocation),
    DismissStoragePrompt,
}

impl Intent for SettingsIntent {}
