//! # Newsforge Storage
//!
//! Persistence subsystem: keeps the document durable and recoverable
//! across sessions without data loss.
//!
//! - **Autosave**: single overwrite-in-place slot, written on a timer and
//!   on explicit save. Write failures are warnings, never errors; the
//!   in-memory document is never at risk.
//! - **Version snapshots**: bounded newest-first list (20, FIFO eviction)
//!   of full deep copies, captured on explicit user action.
//! - **Recent ids**: up to 5 most-recently autosaved document ids,
//!   de-duplicated, for a "recently opened" listing only.
//! - **JSON export/import**: the interchange format. Export is a pure
//!   read; import is the only path that surfaces a rejection to the
//!   caller.
//!
//! Storage is an injected [`KeyValueStore`]; there are no process-wide
//! storage singletons.

mod errors;
mod import;
mod persist;

pub use errors::{ImportError, StorageError};
pub use import::{import_json, parse_newsletter};
pub use persist::{
    ExportArtifact, NewsletterStore, AUTOSAVE_KEY, MAX_RECENT, MAX_VERSIONS, RECENT_KEY,
    VERSIONS_KEY,
};
