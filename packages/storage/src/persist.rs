use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use newsforge_common::{Clock, IdSource, KeyValueStore};
use newsforge_model::{Newsletter, SaveVersion};

use crate::errors::StorageError;

/// Autosave slot (single serialized document, last write wins)
pub const AUTOSAVE_KEY: &str = "newsforge:autosave";

/// Version snapshot list (JSON array, newest first)
pub const VERSIONS_KEY: &str = "newsforge:versions";

/// Recently opened document ids (JSON array, newest first)
pub const RECENT_KEY: &str = "newsforge:recent";

/// Snapshot list capacity; oldest evicted first
pub const MAX_VERSIONS: usize = 20;

/// Recent-ids list capacity
pub const MAX_RECENT: usize = 5;

/// A serialized export ready to hand to the download/save surface
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub body: String,
}

/// Durable persistence for one editing session
///
/// Owns the in-memory mirror of the version list (loaded once at
/// construction) and writes every change through the injected store.
/// Slot writes are non-fatal: a quota failure costs at most the latest
/// autosave, never in-memory work.
pub struct NewsletterStore<S: KeyValueStore, I: IdSource, C: Clock> {
    store: S,
    ids: I,
    clock: C,
    versions: Vec<SaveVersion>,
}

impl<S: KeyValueStore, I: IdSource, C: Clock> NewsletterStore<S, I, C> {
    /// Open the store, loading any persisted version list
    ///
    /// An unreadable or corrupt list is treated as "no data available".
    pub fn new(store: S, ids: I, clock: C) -> Self {
        let versions = match store.get(VERSIONS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(%err, "version list corrupt, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "version list unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            store,
            ids,
            clock,
            versions,
        }
    }

    /// Write the current document to the autosave slot
    ///
    /// Stamps `updatedAt` at serialization time and refreshes the
    /// recent-ids list. Never fails: storage problems are logged and the
    /// session continues.
    pub fn autosave(&mut self, newsletter: &Newsletter) {
        let mut snapshot = newsletter.clone();
        snapshot.meta.updated_at = self.clock.timestamp();

        match serde_json::to_string(&snapshot) {
            Ok(body) => {
                if let Err(err) = self.store.set(AUTOSAVE_KEY, &body) {
                    warn!(%err, "autosave failed");
                    return;
                }
                debug!(document = %snapshot.meta.id, "autosaved");
            }
            Err(err) => {
                warn!(%err, "autosave serialization failed");
                return;
            }
        }

        self.touch_recent(&snapshot.meta.id);
    }

    /// Read back the autosaved document, if any
    ///
    /// Absence and corruption both resolve to `None`; callers fall back
    /// to the "create new" path.
    pub fn load_autosave(&self) -> Option<Newsletter> {
        let raw = match self.store.get(AUTOSAVE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(%err, "autosave slot unreadable");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(newsletter) => Some(newsletter),
            Err(err) => {
                warn!(%err, "autosave slot corrupt");
                None
            }
        }
    }

    /// Capture a full deep snapshot of the document as a new version
    ///
    /// The embedded copy's `meta.version` is incremented relative to the
    /// live document; the live counter itself is untouched. The list is
    /// truncated to the newest [`MAX_VERSIONS`] entries.
    pub fn save_version(&mut self, newsletter: &Newsletter, label: Option<&str>) -> SaveVersion {
        let now = self.clock.timestamp();

        let mut snapshot = newsletter.clone();
        snapshot.meta.version = newsletter.meta.version + 1;
        snapshot.meta.updated_at = now.clone();

        let version = SaveVersion {
            id: self.ids.new_id(),
            label: label.map(str::to_string).unwrap_or_else(|| {
                format!(
                    "Version {} — {}",
                    newsletter.meta.version,
                    self.clock.now().format("%Y-%m-%d %H:%M")
                )
            }),
            saved_at: now,
            newsletter: snapshot,
        };

        self.versions.insert(0, version.clone());
        self.versions.truncate(MAX_VERSIONS);
        self.persist_versions();

        version
    }

    /// Snapshots, newest first
    pub fn versions(&self) -> &[SaveVersion] {
        &self.versions
    }

    /// Remove a snapshot by id; unknown ids are a no-op
    pub fn delete_version(&mut self, version_id: &str) {
        let before = self.versions.len();
        self.versions.retain(|v| v.id != version_id);
        if self.versions.len() != before {
            self.persist_versions();
        }
    }

    /// Recently autosaved document ids, newest first
    pub fn recent_ids(&self) -> Vec<String> {
        match self.store.get(RECENT_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Serialize the document as a standalone, re-importable artifact
    ///
    /// Filename carries the issue number and a millisecond timestamp to
    /// avoid collisions.
    pub fn export_json(&self, newsletter: &Newsletter) -> Result<ExportArtifact, StorageError> {
        let body = serde_json::to_string_pretty(newsletter)?;
        Ok(ExportArtifact {
            filename: format!(
                "newsforge-{}-{}.json",
                newsletter.meta.issue_number,
                self.clock.millis()
            ),
            body,
        })
    }

    /// Export straight to a directory on disk
    pub fn export_to_file(
        &self,
        newsletter: &Newsletter,
        dir: &Path,
    ) -> Result<PathBuf, StorageError> {
        let artifact = self.export_json(newsletter)?;
        let path = dir.join(&artifact.filename);
        std::fs::write(&path, &artifact.body)?;
        Ok(path)
    }

    fn persist_versions(&mut self) {
        match serde_json::to_string(&self.versions) {
            Ok(body) => {
                if let Err(err) = self.store.set(VERSIONS_KEY, &body) {
                    warn!(%err, "version list write failed");
                }
            }
            Err(err) => warn!(%err, "version list serialization failed"),
        }
    }

    fn touch_recent(&mut self, document_id: &str) {
        let mut recent = self.recent_ids();
        recent.retain(|id| id != document_id);
        recent.insert(0, document_id.to_string());
        recent.truncate(MAX_RECENT);

        match serde_json::to_string(&recent) {
            Ok(body) => {
                if let Err(err) = self.store.set(RECENT_KEY, &body) {
                    warn!(%err, "recent list write failed");
                }
            }
            Err(err) => warn!(%err, "recent list serialization failed"),
        }
    }
}
