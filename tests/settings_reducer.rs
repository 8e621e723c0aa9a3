use booru_browser::config::{
    DataSaver, ImageSource, MemoryBackend, PreferenceStore, PreferenceUpdate, Preferences,
    StorageLocation,
};
use booru_browser::ui::mvi::Reducer;
use booru_browser::ui::settings::{
    PickerField, SettingsIntent, SettingsReducer, SettingsScreen, SettingsState,
};

#[test]
fn open_picker_shows_dialog() {
    let state = SettingsReducer::reduce(
        SettingsState::default(),
        SettingsIntent::OpenPicker(PickerField::ImageSource),
    );
    assert_eq!(state.picker, Some(PickerField::ImageSource));
    assert_eq!(state.picker_options().len(), ImageSource::all().len());
}

#[test]
fn pick_closes_picker_and_requests_update() {
    let state = SettingsReducer::reduce(
        SettingsState::default(),
        SettingsIntent::OpenPicker(PickerField::ImageSource),
    );
    let effect = SettingsReducer::effect(&state, &SettingsIntent::Pick(2));
    assert_eq!(
        effect,
        Some(PreferenceUpdate::ImageSource(ImageSource::Danbooru))
    );

    let state = SettingsReducer::reduce(state, SettingsIntent::Pick(2));
    assert_eq!(state.picker, None);
    assert_eq!(state.preferences.image_source, ImageSource::Danbooru);
}

#[test]
fn toggle_inverts_exclude_ai() {
    let state = SettingsState::default();
    assert_eq!(
        SettingsReducer::effect(&state, &SettingsIntent::ToggleExcludeAi),
        Some(PreferenceUpdate::ExcludeAi(true))
    );
    let state = SettingsReducer::reduce(state, SettingsIntent::ToggleExcludeAi);
    assert!(state.preferences.exclude_ai);
    let state = SettingsReducer::reduce(state, SettingsIntent::ToggleExcludeAi);
    assert!(!state.preferences.exclude_ai);
}

#[test]
fn snapshot_replaces_preferences_and_keeps_dialogs() {
    let state = SettingsReducer::reduce(
        SettingsState::default(),
        SettingsIntent::OpenPicker(PickerField::DataSaver),
    );
    let incoming = Preferences {
        data_saver: DataSaver::On,
        ..Preferences::default()
    };
    let state = SettingsReducer::reduce(state, SettingsIntent::Snapshot(incoming.clone()));
    assert_eq!(state.preferences, incoming);
    assert_eq!(state.picker, Some(PickerField::DataSaver));
    let intent = SettingsIntent::Snapshot(incoming);
    assert_eq!(SettingsReducer::effect(&state, &intent), None);
}

#[test]
fn storage_prompt_flow() {
    let location = StorageLocation::new("content://downloads/booru");
    let state = SettingsReducer::reduce_all(
        SettingsState::default(),
        [
            SettingsIntent::OpenStoragePrompt,
            SettingsIntent::StorageChosen(location.clone()),
        ],
    );
    assert!(!state.storage_prompt);
    assert_eq!(state.preferences.storage_location, location);
}

#[test]
fn dismissing_prompt_changes_nothing() {
    let state = SettingsReducer::reduce_all(
        SettingsState::default(),
        [
            SettingsIntent::OpenStoragePrompt,
            SettingsIntent::DismissStoragePrompt,
        ],
    );
    assert_eq!(state, SettingsState::default());
}

#[tokio::test]
async fn screen_dispatches_writes_to_store() {
    let backend = MemoryBackend::new();
    let store = PreferenceStore::open(backend.clone()).unwrap();
    let mut screen = SettingsScreen::new(store.clone());

    screen.dispatch(SettingsIntent::OpenPicker(PickerField::DataSaver));
    screen.dispatch(SettingsIntent::Pick(0));
    assert_eq!(screen.state().preferences.data_saver, DataSaver::On);

    assert!(screen.sync().await);
    assert_eq!(store.read().data_saver, DataSaver::On);
    assert_eq!(screen.state().preferences, store.read());
}

#[tokio::test]
async fn screen_follows_external_updates() {
    let store = PreferenceStore::open(MemoryBackend::new()).unwrap();
    let mut screen = SettingsScreen::new(store.clone());

    store
        .update(PreferenceUpdate::ImageSource(ImageSource::Gelbooru))
        .await
        .unwrap();
    assert!(screen.sync().await);
    let prefs = &screen.state().preferences;
    assert_eq!(prefs.image_source, ImageSource::Gelbooru);
}
