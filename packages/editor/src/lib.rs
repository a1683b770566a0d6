//! # Newsforge Editor
//!
//! Core mutation engine for newsletter documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Newsletter aggregate + registry      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Mutations + session                 │
//! │  - Pure (Document, Mutation) → Document'    │
//! │  - Stale ids resolved as silent no-ops      │
//! │  - Session threads state, tracks selection  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ storage: autosave + versions + import/export│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The document is a value**: every operation consumes the prior
//!    snapshot and produces the next; nothing mutates in place.
//! 2. **No-ops over errors**: a mutation referencing a removed block or
//!    row returns the input document unchanged. UI events may race removal
//!    within the same tick; robustness wins over strict validation.
//! 3. **Invariants by construction**: referential closure and the
//!    no-empty-rows rule hold after every operation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use newsforge_editor::{EditorSession, Mutation, MutationEngine};
//!
//! let engine = MutationEngine::new(UuidSource, SystemClock);
//! let mut session = EditorSession::new(engine, default_newsletter(..));
//!
//! let new_id = session.apply(&Mutation::AddBlock {
//!     kind: BlockKind::Text,
//!     anchor_block_id: None,
//!     layout: RowLayout::OneCol,
//! });
//! ```

mod mutations;
mod session;

pub use mutations::{
    MetaPatch, Mutation, MutationEngine, MutationOutcome, StylePatch, ThemePatch, ThemeUpdate,
};
pub use session::{ActivePanel, EditorSession, EditorState};
