use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::Block;
use crate::theme::Theme;

/// Row layout tags, fixing the maximum number of block slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLayout {
    #[serde(rename = "1col")]
    OneCol,
    #[serde(rename = "2col")]
    TwoCol,
    #[serde(rename = "3col")]
    ThreeCol,
    #[serde(rename = "2x2")]
    TwoByTwo,
}

impl RowLayout {
    /// Slot capacity for this layout
    pub fn max_blocks(&self) -> usize {
        match self {
            RowLayout::OneCol => 1,
            RowLayout::TwoCol => 2,
            RowLayout::ThreeCol => 3,
            RowLayout::TwoByTwo => 4,
        }
    }

    /// CSS class suffix used by the export projection
    pub fn css_class(&self) -> &'static str {
        match self {
            RowLayout::OneCol => "row-1col",
            RowLayout::TwoCol => "row-2col",
            RowLayout::ThreeCol => "row-3col",
            RowLayout::TwoByTwo => "row-2x2",
        }
    }
}

/// Ordered container of 1–4 block ids rendered side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    pub layout: RowLayout,
    pub block_ids: Vec<String>,
}

/// Document identity and bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterMeta {
    pub id: String,
    pub title: String,
    pub issue_number: String,
    pub created_at: String,
    pub updated_at: String,
    /// Monotonically increasing; bumped only when a named snapshot is saved
    pub version: u64,
}

/// The full newsletter aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newsletter {
    pub meta: NewsletterMeta,
    pub theme: Theme,
    /// Render order, top to bottom
    pub rows: Vec<Row>,
    /// Block id → block; key set must equal the union of row block-id lists
    pub blocks: HashMap<String, Block>,
}

impl Newsletter {
    /// O(1) block lookup; `None` when the id was removed between render
    /// and action dispatch
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// All block ids in row-then-slot order (first/last boundary checks)
    pub fn block_order(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.block_ids.iter().map(String::as_str))
            .collect()
    }

    /// Index of the row containing `block_id`
    pub fn row_of(&self, block_id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.block_ids.iter().any(|id| id == block_id))
    }

    pub fn row_by_id(&self, row_id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == row_id)
    }

    /// Verify structural invariants: referential closure, no empty rows,
    /// no block referenced from two rows
    pub fn integrity(&self) -> Result<(), IntegrityError> {
        let mut referenced: HashSet<&str> = HashSet::new();

        for row in &self.rows {
            if row.block_ids.is_empty() {
                return Err(IntegrityError::EmptyRow {
                    row_id: row.id.clone(),
                });
            }
            for block_id in &row.block_ids {
                if !self.blocks.contains_key(block_id) {
                    return Err(IntegrityError::DanglingReference {
                        row_id: row.id.clone(),
                        block_id: block_id.clone(),
                    });
                }
                if !referenced.insert(block_id) {
                    return Err(IntegrityError::SharedBlock {
                        block_id: block_id.clone(),
                    });
                }
            }
        }

        for block_id in self.blocks.keys() {
            if !referenced.contains(block_id.as_str()) {
                return Err(IntegrityError::OrphanBlock {
                    block_id: block_id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Structural invariant violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrityError {
    #[error("Row {row_id} has no blocks")]
    EmptyRow { row_id: String },

    #[error("Row {row_id} references missing block {block_id}")]
    DanglingReference { row_id: String, block_id: String },

    #[error("Block {block_id} is not referenced by any row")]
    OrphanBlock { block_id: String },

    #[error("Block {block_id} appears in more than one row")]
    SharedBlock { block_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockBody, BlockStyle, SpacerBlock};

    fn spacer(id: &str) -> Block {
        Block {
            id: id.to_string(),
            style: BlockStyle::default(),
            body: BlockBody::Spacer(SpacerBlock { height: 24 }),
        }
    }

    fn doc_with(rows: Vec<Row>, blocks: Vec<Block>) -> Newsletter {
        Newsletter {
            meta: NewsletterMeta {
                id: "n-1".to_string(),
                title: "Test".to_string(),
                issue_number: "001".to_string(),
                created_at: "1970-01-01T00:00:00.000Z".to_string(),
                updated_at: "1970-01-01T00:00:00.000Z".to_string(),
                version: 1,
            },
            theme: Theme::default(),
            rows,
            blocks: blocks.into_iter().map(|b| (b.id.clone(), b)).collect(),
        }
    }

    fn row(id: &str, layout: RowLayout, block_ids: &[&str]) -> Row {
        Row {
            id: id.to_string(),
            layout,
            block_ids: block_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_block_order_is_row_then_slot() {
        let doc = doc_with(
            vec![
                row("r-1", RowLayout::TwoCol, &["a", "b"]),
                row("r-2", RowLayout::OneCol, &["c"]),
            ],
            vec![spacer("a"), spacer("b"), spacer("c")],
        );

        assert_eq!(doc.block_order(), vec!["a", "b", "c"]);
        assert_eq!(doc.row_of("b"), Some(0));
        assert_eq!(doc.row_of("c"), Some(1));
        assert_eq!(doc.row_of("zz"), None);
        assert!(doc.integrity().is_ok());
    }

    #[test]
    fn test_integrity_rejects_empty_row() {
        let doc = doc_with(vec![row("r-1", RowLayout::OneCol, &[])], vec![]);
        assert_eq!(
            doc.integrity(),
            Err(IntegrityError::EmptyRow {
                row_id: "r-1".to_string()
            })
        );
    }

    #[test]
    fn test_integrity_rejects_dangling_reference() {
        let doc = doc_with(vec![row("r-1", RowLayout::OneCol, &["ghost"])], vec![]);
        assert!(matches!(
            doc.integrity(),
            Err(IntegrityError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_integrity_rejects_orphan_block() {
        let doc = doc_with(
            vec![row("r-1", RowLayout::OneCol, &["a"])],
            vec![spacer("a"), spacer("stray")],
        );
        assert_eq!(
            doc.integrity(),
            Err(IntegrityError::OrphanBlock {
                block_id: "stray".to_string()
            })
        );
    }

    #[test]
    fn test_integrity_rejects_block_shared_across_rows() {
        let doc = doc_with(
            vec![
                row("r-1", RowLayout::OneCol, &["a"]),
                row("r-2", RowLayout::OneCol, &["a"]),
            ],
            vec![spacer("a")],
        );
        assert!(matches!(
            doc.integrity(),
            Err(IntegrityError::SharedBlock { .. })
        ));
    }

    #[test]
    fn test_layout_capacity() {
        assert_eq!(RowLayout::OneCol.max_blocks(), 1);
        assert_eq!(RowLayout::TwoCol.max_blocks(), 2);
        assert_eq!(RowLayout::ThreeCol.max_blocks(), 3);
        assert_eq!(RowLayout::TwoByTwo.max_blocks(), 4);
    }

    #[test]
    fn test_layout_serde_tags() {
        assert_eq!(serde_json::to_string(&RowLayout::OneCol).unwrap(), "\"1col\"");
        assert_eq!(serde_json::to_string(&RowLayout::TwoByTwo).unwrap(), "\"2x2\"");
        let layout: RowLayout = serde_json::from_str("\"3col\"").unwrap();
        assert_eq!(layout, RowLayout::ThreeCol);
    }
}
