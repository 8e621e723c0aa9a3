//! Observable preference store with a single writer.
//!
//! Readers see the latest committed snapshot through a watch channel.
//! Every mutation is funnelled through one writer task that owns the
//! backend, so updates are applied and persisted strictly in order.
//! Saves run on the blocking pool; the writer awaits each one before
//! taking the next command.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use crate::config::backend::PreferenceBackend;
use crate::config::loader::PreferencesError;
use crate::config::types::{PreferenceUpdate, Preferences};

/// Errors surfaced by [`PreferenceStore`] writes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The new snapshot was published but could not be written to storage.
    #[error("Failed to persist preferences: {0}")]
    Persist(#[source] PreferencesError),

    /// The writer task is gone (runtime shut down).
    #[error("Preference store is closed")]
    Closed,
}

/// A committed preference value and its position in the update sequence.
///
/// Version 0 is whatever was loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub version: u64,
    pub preferences: Preferences,
}

enum StoreCommand {
    Apply {
        update: PreferenceUpdate,
        respond_to: Option<oneshot::Sender<Result<Snapshot, StoreError>>>,
    },
    Reset {
        respond_to: oneshot::Sender<Result<Snapshot, StoreError>>,
    },
}

/// Handle to the preference store. Cheap to clone.
#[derive(Clone)]
pub struct PreferenceStore {
    commands: mpsc::UnboundedSender<StoreCommand>,
    snapshots: watch::Receiver<Snapshot>,
}

impl PreferenceStore {
    /// Load the persisted snapshot and spawn the writer task.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns the backend's load error; an unreadable file is not silently
    /// replaced with defaults.
    pub fn open<B: PreferenceBackend>(mut backend: B) -> Result<Self, PreferencesError> {
        let preferences = backend.load()?;
        let initial = Snapshot {
            version: 0,
            preferences,
        };

        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_writer(backend, snapshot_tx, command_rx));

        Ok(Self {
            commands: command_tx,
            snapshots: snapshot_rx,
        })
    }

    /// The latest committed preferences.
    pub fn read(&self) -> Preferences {
        self.snapshots.borrow().preferences.clone()
    }

    /// The latest committed snapshot including its version.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> PreferenceSubscription {
        PreferenceSubscription {
            receiver: self.snapshots.clone(),
        }
    }

    /// Apply one field update and wait until it is persisted.
    ///
    /// Subscribers see the new snapshot before persistence completes. On
    /// [`StoreError::Persist`] the published snapshot is kept as is.
    pub async fn update(&self, update: PreferenceUpdate) -> Result<Snapshot, StoreError> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(StoreCommand::Apply {
                update,
                respond_to: Some(tx),
            })
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }

    /// Queue an update without waiting for it.
    ///
    /// Completion is only observable through a new snapshot; persistence
    /// failures are logged.
    pub fn update_detached(&self, update: PreferenceUpdate) {
        if self
            .commands
            .send(StoreCommand::Apply {
                update,
                respond_to: None,
            })
            .is_err()
        {
            tracing::warn!("preference store closed, dropping update");
        }
    }

    /// Restore every field to its default.
    pub async fn reset(&self) -> Result<Snapshot, StoreError> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(StoreCommand::Reset { respond_to: tx })
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }
}

/// Stream of committed snapshots.
pub struct PreferenceSubscription {
    receiver: watch::Receiver<Snapshot>,
}

impl PreferenceSubscription {
    /// Current snapshot, marking it as seen.
    pub fn current(&mut self) -> Snapshot {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for a snapshot newer than the last one seen.
    ///
    /// Intermediate snapshots may be skipped if several updates commit
    /// before the subscriber wakes up. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Snapshot> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

async fn run_writer<B: PreferenceBackend>(
    backend: B,
    snapshots: watch::Sender<Snapshot>,
    mut commands: mpsc::UnboundedReceiver<StoreCommand>,
) {
    let backend = Arc::new(Mutex::new(backend));

    while let Some(command) = commands.recv().await {
        let (next, respond_to) = {
            let current = snapshots.borrow();
            match command {
                StoreCommand::Apply { update, respond_to } => {
                    tracing::debug!(key = update.key().as_str(), "applying preference update");
                    (current.preferences.with(&update), respond_to)
                }
                StoreCommand::Reset { respond_to } => {
                    tracing::debug!("resetting preferences");
                    (Preferences::default(), Some(respond_to))
                }
            }
        };

        let committed = commit(&snapshots, next);
        let result = save(&backend, committed.preferences.clone())
            .await
            .map(|_| committed.clone())
            .map_err(StoreError::Persist);

        match respond_to {
            Some(tx) => {
                let _ = tx.send(result);
            }
            None => {
                if let Err(e) = result {
                    tracing::warn!(version = committed.version, "{e}");
                }
            }
        }
    }
    tracing::debug!("preference writer stopped");
}

async fn save<B: PreferenceBackend>(
    backend: &Arc<Mutex<B>>,
    preferences: Preferences,
) -> Result<(), PreferencesError> {
    let backend = Arc::clone(backend);
    let task = tokio::task::spawn_blocking(move || backend.lock().save(&preferences));
    match task.await {
        Ok(result) => result,
        Err(e) => {
            let reason = format!("save task failed: {e}");
            Err(PreferencesError::Unavailable(reason))
        }
    }
}

fn commit(snapshots: &watch::Sender<Snapshot>, preferences: Preferences) -> Snapshot {
    let version = snapshots.borrow().version + 1;
    let snapshot = Snapshot {
        version,
        preferences,
    };
    snapshots.send_replace(snapshot.clone());
    snapshot
}
