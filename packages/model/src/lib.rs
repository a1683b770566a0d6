//! # Newsforge Model
//!
//! The normalized newsletter document model.
//!
//! A newsletter is an aggregate of metadata, a theme, an ordered list of
//! rows, and a block map keyed by block id:
//!
//! ```text
//! Newsletter
//! ├── meta      (id, title, issue number, timestamps, version)
//! ├── theme     (preset + color/font fields, always present)
//! ├── rows      (ordered; each row = layout + ordered block ids)
//! └── blocks    (block id → Block, tagged union over 15 variants)
//! ```
//!
//! ## Invariants
//!
//! 1. **Referential closure**: the union of all rows' block-id lists equals
//!    the key set of the block map; no orphans, no dangling references.
//! 2. **No empty rows**: every row holds at least one block id.
//! 3. A block id appears in at most one row.
//!
//! `Newsletter::integrity` checks all three; the mutation engine preserves
//! them by construction.
//!
//! The serde representation is the JSON interchange format itself:
//! camelCase fields, kebab-case `type` tags, so exported JSON round-trips
//! losslessly.

pub mod block;
pub mod defaults;
pub mod document;
pub mod registry;
pub mod theme;
pub mod version;

pub use block::*;
pub use defaults::*;
pub use document::*;
pub use registry::*;
pub use theme::*;
pub use version::*;
