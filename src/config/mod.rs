//! User preferences: typed values, persisted layout and the observable store.

mod backend;
mod loader;
mod store;
mod types;

pub use backend::{FileBackend, MemoryBackend, PreferenceBackend};
pub use loader::{
    decode_preferences, encode_preferences, preferences_path, PreferencesError, SCHEMA_VERSION,
};
pub use store::{PreferenceStore, PreferenceSubscription, Snapshot, StoreError};
pub use types::{DataSaver, ImageSource, PrefKey, PreferenceUpdate, Preferences, StorageLocation};
