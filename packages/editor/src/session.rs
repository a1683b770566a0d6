//! # Editor Session
//!
//! Transient editing state around the current document.
//!
//! The session owns the current document snapshot and threads every
//! mutation through the engine: each apply consumes the previous output
//! and stores the next, so a reader always observes the latest completed
//! mutation's result. Selection state is consulted by the UI but never
//! persisted with the document.

use serde::{Deserialize, Serialize};

use newsforge_common::{Clock, IdSource};
use newsforge_model::Newsletter;

use crate::mutations::{Mutation, MutationEngine};

/// Sidebar panel currently open in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivePanel {
    #[default]
    Blocks,
    Settings,
    Theme,
    Versions,
}

/// Transient UI-selection state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub selected_block_id: Option<String>,
    pub editing_block_id: Option<String>,
    pub active_panel: ActivePanel,
}

/// A single editing session: one document, one mutation stream
pub struct EditorSession<I: IdSource, C: Clock> {
    engine: MutationEngine<I, C>,
    document: Newsletter,
    state: EditorState,
}

impl<I: IdSource, C: Clock> EditorSession<I, C> {
    pub fn new(engine: MutationEngine<I, C>, document: Newsletter) -> Self {
        Self {
            engine,
            document,
            state: EditorState::default(),
        }
    }

    /// The latest completed mutation's output
    pub fn document(&self) -> &Newsletter {
        &self.document
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Apply a mutation to the current document
    ///
    /// Newly created blocks are selected immediately; selection referring
    /// to a block the mutation removed is cleared.
    pub fn apply(&mut self, mutation: &Mutation) -> Option<String> {
        let outcome = self.engine.apply(&self.document, mutation);
        self.document = outcome.document;

        if let Some(id) = &outcome.new_block_id {
            self.state.selected_block_id = Some(id.clone());
        }
        self.reconcile_selection();

        outcome.new_block_id
    }

    /// Replace the document wholesale (autosave restore, version restore,
    /// JSON import)
    pub fn load(&mut self, document: Newsletter) {
        self.document = document;
        self.state.selected_block_id = None;
        self.state.editing_block_id = None;
    }

    pub fn select_block(&mut self, block_id: Option<String>) {
        self.state.selected_block_id = block_id;
        self.reconcile_selection();
    }

    pub fn edit_block(&mut self, block_id: Option<String>) {
        self.state.editing_block_id = block_id;
        self.reconcile_selection();
    }

    pub fn set_panel(&mut self, panel: ActivePanel) {
        self.state.active_panel = panel;
    }

    /// Drop selection/editing references to blocks no longer present
    fn reconcile_selection(&mut self) {
        if let Some(id) = &self.state.selected_block_id {
            if self.document.block(id).is_none() {
                self.state.selected_block_id = None;
            }
        }
        if let Some(id) = &self.state.editing_block_id {
            if self.document.block(id).is_none() {
                self.state.editing_block_id = None;
            }
        }
    }
}
