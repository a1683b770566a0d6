//! # Document Mutations
//!
//! High-level semantic operations on newsletter documents.
//!
//! ## Design principles
//!
//! 1. **Pure**: every operation is `(Document, args) → Document'`; the
//!    input is never modified.
//! 2. **Intent-preserving**: each mutation represents one semantic
//!    operation the editor UI can dispatch and serialize.
//! 3. **No-ops over errors**: invalid ids return the input unchanged.
//!    Ids may reference content removed by a concurrent UI action in the
//!    same tick.
//!
//! ## Mutation semantics
//!
//! ### AddBlock
//! - Always wraps the new block in a fresh single-block row, inserted
//!   after the anchor's row (or appended). Inserting into an existing row
//!   would need slot-capacity reflow; that is deferred to an explicit
//!   row-layout change.
//!
//! ### RemoveBlock
//! - Removes the block from the map and from its row; a row left empty
//!   is pruned. Rows are never empty placeholders.
//!
//! ### UpdateRowLayout
//! - Changes the tag only, even below current occupancy. Overflow is a
//!   rendering concern; capacity is enforced at insertion time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use newsforge_common::{Clock, IdSource};
use newsforge_model::{
    empty_block, Block, BlockBody, BlockKind, BlockWidth, Newsletter, Row, RowLayout, ThemePreset,
};

/// Semantic mutations (serializable editor intents)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Replace a block's content body, preserving id and type tag.
    /// A body whose variant differs from the stored block is a no-op.
    UpdateBlock { block_id: String, body: BlockBody },

    /// Merge visual-override fields into a block
    UpdateBlockStyle { block_id: String, style: StylePatch },

    /// Create a registry-default block in a new single-block row
    AddBlock {
        kind: BlockKind,
        anchor_block_id: Option<String>,
        layout: RowLayout,
    },

    /// Delete a block; its row is pruned if left empty
    RemoveBlock { block_id: String },

    /// Swap a row with its upper neighbor (no-op at index 0)
    MoveRowUp { row_index: usize },

    /// Swap a row with its lower neighbor (no-op at the last index)
    MoveRowDown { row_index: usize },

    /// Retag a row's layout without touching its block list
    UpdateRowLayout { row_id: String, layout: RowLayout },

    /// Replace the theme with a preset, or merge field overrides
    UpdateTheme(ThemeUpdate),

    /// Merge metadata fields; always refreshes updatedAt
    UpdateMeta(MetaPatch),
}

/// The two valid shapes of a theme update. The caller disambiguates;
/// the engine does not infer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ThemeUpdate {
    Preset(ThemePreset),
    Overrides(ThemePatch),
}

/// Partial theme override (only set fields are merged)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_family: Option<String>,
}

/// Partial block visual overrides
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_width: Option<BlockWidth>,
}

/// Partial metadata update
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<String>,
}

/// Result of applying a mutation
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    /// The next document snapshot
    pub document: Newsletter,

    /// Id of the block created by AddBlock, so the caller can select it
    pub new_block_id: Option<String>,
}

impl MutationOutcome {
    fn unchanged(doc: &Newsletter) -> Self {
        Self {
            document: doc.clone(),
            new_block_id: None,
        }
    }

    fn changed(document: Newsletter) -> Self {
        Self {
            document,
            new_block_id: None,
        }
    }
}

/// Applies mutations, minting ids and timestamps from injected services
pub struct MutationEngine<I: IdSource, C: Clock> {
    ids: I,
    clock: C,
}

impl<I: IdSource, C: Clock> MutationEngine<I, C> {
    pub fn new(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Apply a mutation, producing the next document snapshot
    pub fn apply(&mut self, doc: &Newsletter, mutation: &Mutation) -> MutationOutcome {
        match mutation {
            Mutation::UpdateBlock { block_id, body } => self.update_block(doc, block_id, body),
            Mutation::UpdateBlockStyle { block_id, style } => {
                self.update_block_style(doc, block_id, style)
            }
            Mutation::AddBlock {
                kind,
                anchor_block_id,
                layout,
            } => self.add_block(doc, *kind, anchor_block_id.as_deref(), *layout),
            Mutation::RemoveBlock { block_id } => self.remove_block(doc, block_id),
            Mutation::MoveRowUp { row_index } => Self::move_row_up(doc, *row_index),
            Mutation::MoveRowDown { row_index } => Self::move_row_down(doc, *row_index),
            Mutation::UpdateRowLayout { row_id, layout } => {
                Self::update_row_layout(doc, row_id, *layout)
            }
            Mutation::UpdateTheme(update) => self.update_theme(doc, update),
            Mutation::UpdateMeta(patch) => self.update_meta(doc, patch),
        }
    }

    fn update_block(&mut self, doc: &Newsletter, block_id: &str, body: &BlockBody) -> MutationOutcome {
        let Some(existing) = doc.block(block_id) else {
            debug!(block_id, "update_block: stale id, no-op");
            return MutationOutcome::unchanged(doc);
        };
        // The type tag is immutable after creation
        if existing.kind() != body.kind() {
            debug!(
                block_id,
                from = %existing.kind(),
                to = %body.kind(),
                "update_block: type tag mismatch, no-op"
            );
            return MutationOutcome::unchanged(doc);
        }

        let mut next = doc.clone();
        if let Some(block) = next.blocks.get_mut(block_id) {
            block.body = body.clone();
        }
        next.meta.updated_at = self.clock.timestamp();
        MutationOutcome::changed(next)
    }

    fn update_block_style(
        &mut self,
        doc: &Newsletter,
        block_id: &str,
        patch: &StylePatch,
    ) -> MutationOutcome {
        if doc.block(block_id).is_none() {
            debug!(block_id, "update_block_style: stale id, no-op");
            return MutationOutcome::unchanged(doc);
        }

        let mut next = doc.clone();
        if let Some(block) = next.blocks.get_mut(block_id) {
            let style = &mut block.style;
            if let Some(v) = &patch.block_bg_color {
                style.block_bg_color = Some(v.clone());
            }
            if let Some(v) = &patch.block_text_color {
                style.block_text_color = Some(v.clone());
            }
            if let Some(v) = patch.block_padding {
                style.block_padding = Some(v);
            }
            if let Some(v) = patch.block_font_size {
                style.block_font_size = Some(v);
            }
            if let Some(v) = patch.block_width {
                style.block_width = Some(v);
            }
        }
        next.meta.updated_at = self.clock.timestamp();
        MutationOutcome::changed(next)
    }

    fn add_block(
        &mut self,
        doc: &Newsletter,
        kind: BlockKind,
        anchor_block_id: Option<&str>,
        layout: RowLayout,
    ) -> MutationOutcome {
        let block_id = self.ids.new_id();
        let block: Block = empty_block(kind, block_id.clone(), &mut self.ids, &self.clock);

        let row = Row {
            id: self.ids.new_id(),
            layout,
            block_ids: vec![block_id.clone()],
        };

        let mut next = doc.clone();
        next.blocks.insert(block_id.clone(), block);

        // New row goes right after the anchor's row; missing or absent
        // anchors append at the end
        let insert_at = anchor_block_id
            .and_then(|anchor| doc.row_of(anchor))
            .map(|idx| idx + 1)
            .unwrap_or(next.rows.len());
        next.rows.insert(insert_at, row);

        next.meta.updated_at = self.clock.timestamp();

        MutationOutcome {
            document: next,
            new_block_id: Some(block_id),
        }
    }

    fn remove_block(&mut self, doc: &Newsletter, block_id: &str) -> MutationOutcome {
        if doc.block(block_id).is_none() {
            debug!(block_id, "remove_block: stale id, no-op");
            return MutationOutcome::unchanged(doc);
        }

        let mut next = doc.clone();
        next.blocks.remove(block_id);
        for row in &mut next.rows {
            row.block_ids.retain(|id| id != block_id);
        }
        next.rows.retain(|row| !row.block_ids.is_empty());
        next.meta.updated_at = self.clock.timestamp();
        MutationOutcome::changed(next)
    }

    fn move_row_up(doc: &Newsletter, row_index: usize) -> MutationOutcome {
        if row_index == 0 || row_index >= doc.rows.len() {
            return MutationOutcome::unchanged(doc);
        }
        let mut next = doc.clone();
        next.rows.swap(row_index - 1, row_index);
        MutationOutcome::changed(next)
    }

    fn move_row_down(doc: &Newsletter, row_index: usize) -> MutationOutcome {
        if row_index + 1 >= doc.rows.len() {
            return MutationOutcome::unchanged(doc);
        }
        let mut next = doc.clone();
        next.rows.swap(row_index, row_index + 1);
        MutationOutcome::changed(next)
    }

    fn update_row_layout(doc: &Newsletter, row_id: &str, layout: RowLayout) -> MutationOutcome {
        let Some(index) = doc.rows.iter().position(|row| row.id == row_id) else {
            debug!(row_id, "update_row_layout: stale id, no-op");
            return MutationOutcome::unchanged(doc);
        };
        // The block list is untouched even when the new capacity is below
        // current occupancy; capacity binds at insertion time only
        let mut next = doc.clone();
        next.rows[index].layout = layout;
        MutationOutcome::changed(next)
    }

    fn update_theme(&mut self, doc: &Newsletter, update: &ThemeUpdate) -> MutationOutcome {
        let mut next = doc.clone();
        match update {
            ThemeUpdate::Preset(preset) => {
                next.theme = preset.theme();
            }
            ThemeUpdate::Overrides(patch) => {
                let theme = &mut next.theme;
                if let Some(v) = &patch.primary_color {
                    theme.primary_color = v.clone();
                }
                if let Some(v) = &patch.accent_color {
                    theme.accent_color = v.clone();
                }
                if let Some(v) = &patch.background_color {
                    theme.background_color = v.clone();
                }
                if let Some(v) = &patch.surface_color {
                    theme.surface_color = v.clone();
                }
                if let Some(v) = &patch.text_color {
                    theme.text_color = v.clone();
                }
                if let Some(v) = &patch.muted_color {
                    theme.muted_color = v.clone();
                }
                if let Some(v) = &patch.font_family {
                    theme.font_family = v.clone();
                }
                if let Some(v) = &patch.heading_family {
                    theme.heading_family = v.clone();
                }
            }
        }
        next.meta.updated_at = self.clock.timestamp();
        MutationOutcome::changed(next)
    }

    fn update_meta(&mut self, doc: &Newsletter, patch: &MetaPatch) -> MutationOutcome {
        let mut next = doc.clone();
        if let Some(title) = &patch.title {
            next.meta.title = title.clone();
        }
        if let Some(issue) = &patch.issue_number {
            next.meta.issue_number = issue.clone();
        }
        next.meta.updated_at = self.clock.timestamp();
        MutationOutcome::changed(next)
    }
}
