//! Durable storage for preference snapshots.
//!
//! The store talks to storage through [`PreferenceBackend`] so the writer
//! task can be exercised without touching the filesystem.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::Mutex;

use crate::config::loader::{decode_preferences, encode_preferences, PreferencesError};
use crate::config::types::Preferences;

/// Persistence seam for the preference store.
///
/// Only the store's writer task calls into a backend, so implementations
/// never see concurrent calls.
pub trait PreferenceBackend: Send + 'static {
    /// Load the persisted snapshot. Missing data yields defaults.
    fn load(&mut self) -> Result<Preferences, PreferencesError>;

    /// Durably replace the persisted snapshot.
    fn save(&mut self, prefs: &Preferences) -> Result<(), PreferencesError>;
}

/// TOML file backend.
///
/// Writes go to a sibling temp file while holding an exclusive lock on a
/// `.lock` file, then are renamed over the target.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> PreferencesError {
        PreferencesError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceBackend for FileBackend {
    fn load(&mut self) -> Result<Preferences, PreferencesError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no preferences file, using defaults");
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PreferencesError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        decode_preferences(&content).map_err(|e| PreferencesError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&mut self, prefs: &Preferences) -> Result<(), PreferencesError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| PreferencesError::NoParentDir(self.path.clone()))?;
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let content = encode_preferences(prefs)?;

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.sibling(".lock"))
            .map_err(|e| self.write_error(e))?;
        lock.lock_exclusive().map_err(|e| self.write_error(e))?;

        let tmp_path = self.sibling(".tmp");
        let result = (|| {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(content.as_bytes())?;
            tmp.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        let _ = FileExt::unlock(&lock);
        result.map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    content: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory backend holding the encoded document.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted document.
    pub fn with_content(content: impl Into<String>) -> Self {
        let backend = Self::default();
        backend.inner.lock().content = Some(content.into());
        backend
    }

    /// Make subsequent saves fail, simulating unavailable storage.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }

    /// The last successfully persisted document.
    pub fn content(&self) -> Option<String> {
        self.inner.lock().content.clone()
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&mut self) -> Result<Preferences, PreferencesError> {
        let inner = self.inner.lock();
        match inner.content.as_deref() {
            Some(content) => decode_preferences(content).map_err(|e| PreferencesError::Parse {
                path: PathBuf::from("<memory>"),
                source: e,
            }),
            None => Ok(Preferences::default()),
        }
    }

    fn save(&mut self, prefs: &Preferences) -> Result<(), PreferencesError> {
        let mut inner = self.inner.lock();
        if inner.fail_writes {
            return Err(PreferencesError::Unavailable(
                "memory backend rejecting writes".to_string(),
            ));
        }
        inner.content = Some(encode_preferences(prefs)?);
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ImageSource, PreferenceUpdate};
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let mut backend = FileBackend::new(dir.path().join("preferences.toml"));
        assert_eq!(backend.load().unwrap(), Preferences::default());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        let path = nested.join("preferences.toml");
        let mut backend = FileBackend::new(&path);

        let update = PreferenceUpdate::ImageSource(ImageSource::Danbooru);
        let prefs = Preferences::default().with(&update);
        backend.save(&prefs).unwrap();

        assert!(path.exists());
        assert!(!nested.join("preferences.toml.tmp").exists());
        assert_eq!(FileBackend::new(&path).load().unwrap(), prefs);
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        let mut backend = FileBackend::new(&path);
        let err = backend.save(&Preferences::default()).unwrap_err();

        assert!(matches!(err, PreferencesError::Write { .. }));
        assert!(!dir.path().join("preferences.toml.tmp").exists());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let err = FileBackend::new(&path).load().unwrap_err();
        assert!(matches!(err, PreferencesError::Parse { .. }));
    }

    #[test]
    fn memory_backend_reports_failed_writes() {
        let mut backend = MemoryBackend::new();
        backend.set_fail_writes(true);
        let err = backend.save(&Preferences::default()).unwrap_err();
        assert!(matches!(err, PreferencesError::Unavailable(_)));
        assert_eq!(backend.write_count(), 0);
        assert!(backend.content().is_none());
    }
}
