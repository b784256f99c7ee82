/// Draft persistence
///
/// The in-progress wizard state is mirrored to a single named slot after
/// every change, and reconstructed from it on the next session. Storage
/// is an injected port so hosts (and tests) choose where the slot lives.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::listing::ListingDraft;

const APP_DIR: &str = "ListingWizard";
const DRAFT_FILE: &str = "draft.json";

/// Persisted wizard progress: the active step plus the draft.
///
/// Deserialization is lenient by construction: draft fields absent from
/// an old payload fall back to their documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardProgress {
    pub step: u8,
    pub listing: ListingDraft,
}

impl WizardProgress {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a stored payload. Malformed content is treated as "no saved
    /// progress" and logged, never surfaced to the user.
    pub fn from_json(payload: &str) -> Option<Self> {
        match serde_json::from_str(payload) {
            Ok(progress) => Some(progress),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable saved draft");
                None
            }
        }
    }
}

/// Storage port for the single progress slot
pub trait DraftStore {
    /// Read the slot. `None` means no saved progress.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Overwrite the slot
    fn write(&self, payload: &str) -> Result<(), StoreError>;

    /// Delete the slot. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed store under the platform config directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location, e.g.
    /// `~/.config/ListingWizard/draft.json` on Linux.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoStorageDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(DRAFT_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl DraftStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.display_path(), "no saved draft");
            return Ok(None);
        }
        std::fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|source| StoreError::ReadFailed {
                path: self.display_path(),
                source,
            })
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                path: self.display_path(),
                source,
            })?;
        }
        std::fs::write(&self.path, payload).map_err(|source| StoreError::WriteFailed {
            path: self.display_path(),
            source,
        })?;
        tracing::debug!(path = %self.display_path(), "saved draft");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|source| StoreError::ClearFailed {
                path: self.display_path(),
                source,
            })?;
            tracing::debug!(path = %self.display_path(), "cleared draft");
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral hosts. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, for resume tests
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }
}

impl DraftStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.lock().clone())
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        *self.slot.lock() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_roundtrip() {
        let progress = WizardProgress {
            step: 4,
            listing: ListingDraft::default(),
        };

        let json = progress.to_json().unwrap();
        let back = WizardProgress::from_json(&json).unwrap();

        assert_eq!(back.step, 4);
        assert_eq!(back.listing, progress.listing);
    }

    #[test]
    fn test_malformed_payload_is_no_progress() {
        assert!(WizardProgress::from_json("{not json").is_none());
        assert!(WizardProgress::from_json("[]").is_none());
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let progress =
            WizardProgress::from_json(r#"{"step":4,"listing":{"title":"Old draft"}}"#).unwrap();

        assert_eq!(progress.step, 4);
        assert_eq!(progress.listing.title, "Old draft");
        assert_eq!(progress.listing.pricing.base_price, 100);
        assert_eq!(progress.listing.pricing.currency, "USD");
        assert_eq!(progress.listing.basics.guests, 4);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("payload").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("payload"));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("draft.json"));

        assert_eq!(store.read().unwrap(), None);

        store.write("{\"step\":1}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"step\":1}"));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);

        // Clearing an already-empty slot is fine
        store.clear().unwrap();
    }
}
