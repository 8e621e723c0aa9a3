use crate::config::{DataSaver, ImageSource, PreferenceUpdate};
use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{PickerField, SettingsState};

pub struct SettingsReducer;

impl SettingsReducer {
    /// The preference write an intent asks for, evaluated against the
    /// state *before* the intent is reduced.
    pub fn effect(state: &SettingsState, intent: &SettingsIntent) -> Option<PreferenceUpdate> {
        match intent {
            SettingsIntent::Pick(index) => match state.picker? {
                PickerField::DataSaver => DataSaver::all()
                    .get(*index)
                    .map(|v| PreferenceUpdate::DataSaver(*v)),
                PickerField::ImageSource => ImageSource::all()
                    .get(*index)
                    .map(|v| PreferenceUpdate::ImageSource(*v)),
            },
            SettingsIntent::ToggleExcludeAi => {
                Some(PreferenceUpdate::ExcludeAi(!state.preferences.exclude_ai))
            }
            SettingsIntent::StorageChosen(location) if state.storage_prompt => {
                Some(PreferenceUpdate::StorageLocation(location.clone()))
            }
            _ => None,
        }
    }
}

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Writes are reflected immediately; the store's next snapshot
        // replaces this optimistic value either way.
        let preferences = match Self::effect(&state, &intent) {
            Some(update) => state.preferences.with(&update),
            None => state.preferences.clone(),
        };

        match intent {
            SettingsIntent::Snapshot(preferences) => SettingsState {
                preferences,
                ..state
            },
            SettingsIntent::OpenPicker(field) => SettingsState {
                picker: Some(field),
                storage_prompt: false,
                ..state
            },
            SettingsIntent::Pick(_) | SettingsIntent::DismissPicker => SettingsState {
                preferences,
                picker: None,
                ..state
            },
            SettingsIntent::ToggleExcludeAi => SettingsState {
                preferences,
                ..state
            },
            SettingsIntent::OpenStoragePrompt => SettingsState {
                picker: None,
                storage_prompt: true,
                ..state
            },
            SettingsIntent::StorageChosen(_) | SettingsIntent::DismissStoragePrompt => {
                SettingsState {
                    preferences,
                    storage_prompt: false,
                    ..state
                }
            }
        }
    }
}
