use crate::config::{DataSaver, ImageSource, Preferences};
use crate::ui::mvi::UiState;

/// Enum-valued preference edited through a single-choice picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerField {
    DataSaver,
    ImageSource,
}

impl PickerField {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DataSaver => "Data saver",
            Self::ImageSource => "Image source",
        }
    }

    /// Option labels in display order.
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Self::DataSaver => DataSaver::all().iter().map(|v| v.description()).collect(),
            Self::ImageSource => ImageSource::all().iter().map(|v| v.description()).collect(),
        }
    }

    /// Index of the value currently held in `prefs`.
    pub fn selected_index(&self, prefs: &Preferences) -> usize {
        let position = match self {
            Self::DataSaver => DataSaver::all().iter().position(|v| *v == prefs.data_saver),
            Self::ImageSource => ImageSource::all()
                .iter()
                .position(|v| *v == prefs.image_source),
        };
        position.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsState {
    pub preferences: Preferences,
    /// Open picker dialog, if any.
    pub picker: Option<PickerField>,
    /// Directory chooser requested for the download location.
    pub storage_prompt: bool,
}

impl UiState for SettingsState {}

impl SettingsState {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            picker: None,
            storage_prompt: false,
        }
    }
}
