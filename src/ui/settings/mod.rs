//! Settings screen bound to the preference store.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{PickerField, SettingsState};
pub use view::{PickerOption, RowControl, SettingsRow, DATA_SAVER_NOTE, EXCLUDE_AI_SUMMARY};

use crate::config::{PreferenceStore, PreferenceSubscription};
use crate::ui::mvi::Reducer;

/// Owns the settings screen state and forwards writes to the store.
pub struct SettingsScreen {
    state: SettingsState,
    store: PreferenceStore,
    subscription: PreferenceSubscription,
}

impl SettingsScreen {
    pub fn new(store: PreferenceStore) -> Self {
        let mut subscription = store.subscribe();
        let state = SettingsState::new(subscription.current().preferences);
        Self {
            state,
            store,
            subscription,
        }
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }

    /// Reduce `intent` and hand any resulting preference write to the store
    /// without waiting for it.
    pub fn dispatch(&mut self, intent: SettingsIntent) {
        if let Some(update) = SettingsReducer::effect(&self.state, &intent) {
            self.store.update_detached(update);
        }
        self.state = SettingsReducer::reduce(self.state.clone(), intent);
    }

    /// Wait for the next committed snapshot and fold it into the state.
    ///
    /// Returns `false` once the store has shut down.
    pub async fn sync(&mut self) -> bool {
        match self.subscription.changed().await {
            Some(snapshot) => {
                self.dispatch(SettingsIntent::Snapshot(snapshot.preferences));
                true
            }
            None => false,
        }
    }
}
