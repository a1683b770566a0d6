//! Tests for mutation sequences and document integrity across chains of
//! operations.

use newsforge_common::{FixedClock, SequentialIds};
use newsforge_editor::{Mutation, MutationEngine};
use newsforge_model::{default_newsletter, BlockKind, Newsletter, RowLayout};

fn engine() -> MutationEngine<SequentialIds, FixedClock> {
    MutationEngine::new(SequentialIds::new("m"), FixedClock::at_epoch())
}

fn starter() -> Newsletter {
    let mut ids = SequentialIds::new("d");
    default_newsletter(&mut ids, &FixedClock::at_epoch())
}

#[test]
fn test_row_swap_symmetry() {
    // moveRowDown(moveRowUp(doc, i+1), i) restores the original order
    let doc = starter();
    let mut engine = engine();

    for i in 0..doc.rows.len() - 1 {
        let up = engine
            .apply(&doc, &Mutation::MoveRowUp { row_index: i + 1 })
            .document;
        let restored = engine
            .apply(&up, &Mutation::MoveRowDown { row_index: i })
            .document;

        let original: Vec<&str> = doc.rows.iter().map(|r| r.id.as_str()).collect();
        let roundtrip: Vec<&str> = restored.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(original, roundtrip, "swap symmetry broken at index {}", i);
    }
}

#[test]
fn test_move_row_up_swaps_neighbors() {
    let doc = starter();
    let mut engine = engine();

    let next = engine
        .apply(&doc, &Mutation::MoveRowUp { row_index: 2 })
        .document;

    assert_eq!(next.rows[1].id, doc.rows[2].id);
    assert_eq!(next.rows[2].id, doc.rows[1].id);
    assert_eq!(next.rows[0].id, doc.rows[0].id);
}

#[test]
fn test_add_edit_remove_chain_preserves_closure() {
    let doc = starter();
    let mut engine = engine();

    // Add three blocks anchored at different points, then remove two
    let a = engine.apply(
        &doc,
        &Mutation::AddBlock {
            kind: BlockKind::Text,
            anchor_block_id: Some(doc.block_order()[0].to_string()),
            layout: RowLayout::OneCol,
        },
    );
    let a_id = a.new_block_id.unwrap();

    let b = engine.apply(
        &a.document,
        &Mutation::AddBlock {
            kind: BlockKind::Image,
            anchor_block_id: Some(a_id.clone()),
            layout: RowLayout::TwoCol,
        },
    );
    let b_id = b.new_block_id.unwrap();

    let c = engine.apply(
        &b.document,
        &Mutation::AddBlock {
            kind: BlockKind::Spacer,
            anchor_block_id: None,
            layout: RowLayout::OneCol,
        },
    );

    let mut current = c.document;
    assert!(current.integrity().is_ok());

    for id in [a_id, b_id] {
        current = engine
            .apply(&current, &Mutation::RemoveBlock { block_id: id })
            .document;
        assert!(current.integrity().is_ok());
    }

    // One added block remains on top of the starter set
    assert_eq!(current.blocks.len(), doc.blocks.len() + 1);
}

#[test]
fn test_remove_then_update_same_tick_is_safe() {
    // A UI action may dispatch an update for a block removed moments
    // earlier; the engine must treat the second op as a no-op
    let doc = starter();
    let mut engine = engine();

    let victim = doc.block_order()[3].to_string();
    let removed = engine
        .apply(
            &doc,
            &Mutation::RemoveBlock {
                block_id: victim.clone(),
            },
        )
        .document;

    let after = engine
        .apply(
            &removed,
            &Mutation::RemoveBlock {
                block_id: victim.clone(),
            },
        )
        .document;

    assert_eq!(after, removed);
    assert!(after.integrity().is_ok());
}

#[test]
fn test_every_block_removed_leaves_empty_document() {
    let doc = starter();
    let mut engine = engine();

    let mut current = doc.clone();
    for block_id in doc.block_order() {
        current = engine
            .apply(
                &current,
                &Mutation::RemoveBlock {
                    block_id: block_id.to_string(),
                },
            )
            .document;
        assert!(current.integrity().is_ok());
    }

    assert!(current.rows.is_empty());
    assert!(current.blocks.is_empty());
}

#[test]
fn test_layout_shrink_then_remove_reconverges() {
    // Shrinking a 2-block row to 1col overfills it (permitted); removing
    // a block afterwards still maintains closure
    let doc = starter();
    let mut engine = engine();

    let two_col = doc
        .rows
        .iter()
        .find(|row| row.block_ids.len() == 2)
        .unwrap();
    let row_id = two_col.id.clone();
    let first = two_col.block_ids[0].clone();

    let shrunk = engine
        .apply(
            &doc,
            &Mutation::UpdateRowLayout {
                row_id: row_id.clone(),
                layout: RowLayout::OneCol,
            },
        )
        .document;

    let row = shrunk.row_by_id(&row_id).unwrap();
    assert_eq!(row.layout, RowLayout::OneCol);
    assert_eq!(row.block_ids.len(), 2); // over capacity

    let next = engine
        .apply(&shrunk, &Mutation::RemoveBlock { block_id: first })
        .document;
    assert_eq!(next.row_by_id(&row_id).unwrap().block_ids.len(), 1);
    assert!(next.integrity().is_ok());
}
