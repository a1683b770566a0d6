//! Comprehensive mutation tests

use newsforge_common::{FixedClock, SequentialIds};
use newsforge_editor::{MetaPatch, Mutation, MutationEngine, StylePatch, ThemePatch, ThemeUpdate};
use newsforge_model::{
    default_newsletter, BlockBody, BlockKind, BlockWidth, Newsletter, RowLayout, TextBlock,
    ThemePreset,
};

fn engine() -> MutationEngine<SequentialIds, FixedClock> {
    MutationEngine::new(SequentialIds::new("m"), FixedClock::at_epoch())
}

fn starter() -> Newsletter {
    let mut ids = SequentialIds::new("d");
    default_newsletter(&mut ids, &FixedClock::at_epoch())
}

#[test]
fn test_add_block_after_header_row() {
    // Scenario: add a text block anchored on the header block
    let doc = starter();
    let mut engine = engine();

    let header_id = doc.block_order()[0].to_string();
    let header_row = doc.row_of(&header_id).unwrap();

    let outcome = engine.apply(
        &doc,
        &Mutation::AddBlock {
            kind: BlockKind::Text,
            anchor_block_id: Some(header_id),
            layout: RowLayout::OneCol,
        },
    );

    let new_id = outcome.new_block_id.expect("add_block returns the new id");
    let next = outcome.document;

    // New single-block row sits immediately after the header's row
    let new_row = &next.rows[header_row + 1];
    assert_eq!(new_row.layout, RowLayout::OneCol);
    assert_eq!(new_row.block_ids, vec![new_id.clone()]);

    let block = next.block(&new_id).unwrap();
    assert_eq!(block.kind(), BlockKind::Text);
    match &block.body {
        BlockBody::Text(text) => assert_eq!(text.content, "Text content here."),
        other => panic!("expected text block, got {:?}", other.kind()),
    }

    assert_eq!(next.rows.len(), doc.rows.len() + 1);
    assert!(next.integrity().is_ok());
    // Input document untouched
    assert_eq!(doc.rows.len(), 11);
}

#[test]
fn test_add_block_without_anchor_appends_at_end() {
    let doc = starter();
    let mut engine = engine();

    let outcome = engine.apply(
        &doc,
        &Mutation::AddBlock {
            kind: BlockKind::Image,
            anchor_block_id: None,
            layout: RowLayout::OneCol,
        },
    );

    let next = outcome.document;
    let last_row = next.rows.last().unwrap();
    assert_eq!(last_row.block_ids, vec![outcome.new_block_id.unwrap()]);
    assert!(next.integrity().is_ok());
}

#[test]
fn test_add_block_with_stale_anchor_appends_at_end() {
    let doc = starter();
    let mut engine = engine();

    let outcome = engine.apply(
        &doc,
        &Mutation::AddBlock {
            kind: BlockKind::Spacer,
            anchor_block_id: Some("removed-long-ago".to_string()),
            layout: RowLayout::OneCol,
        },
    );

    let next = outcome.document;
    assert_eq!(
        next.rows.last().unwrap().block_ids,
        vec![outcome.new_block_id.unwrap()]
    );
}

#[test]
fn test_remove_block_prunes_emptied_row() {
    // Scenario: removing both blocks of a 2-block row drops the row
    let doc = starter();
    let mut engine = engine();

    let two_col = doc
        .rows
        .iter()
        .find(|row| row.block_ids.len() == 2)
        .expect("starter has a 2-block row");
    let row_id = two_col.id.clone();
    let (first, second) = (two_col.block_ids[0].clone(), two_col.block_ids[1].clone());

    let step1 = engine
        .apply(&doc, &Mutation::RemoveBlock { block_id: first })
        .document;
    // Row survives with one block
    assert!(step1.rows.iter().any(|row| row.id == row_id));
    assert!(step1.integrity().is_ok());

    let step2 = engine
        .apply(&step1, &Mutation::RemoveBlock { block_id: second })
        .document;
    // Now the row itself is gone
    assert!(!step2.rows.iter().any(|row| row.id == row_id));
    assert_eq!(step2.rows.len(), doc.rows.len() - 1);
    assert!(step2.integrity().is_ok());
}

#[test]
fn test_update_row_layout_keeps_block_list() {
    // Scenario: retagging a 1-block row to 3col leaves the list untouched
    let doc = starter();
    let mut engine = engine();

    let row = doc
        .rows
        .iter()
        .find(|row| row.block_ids.len() == 1)
        .unwrap();
    let row_id = row.id.clone();
    let block_ids = row.block_ids.clone();

    let next = engine
        .apply(
            &doc,
            &Mutation::UpdateRowLayout {
                row_id: row_id.clone(),
                layout: RowLayout::ThreeCol,
            },
        )
        .document;

    let updated = next.row_by_id(&row_id).unwrap();
    assert_eq!(updated.layout, RowLayout::ThreeCol);
    assert_eq!(updated.block_ids, block_ids);
}

#[test]
fn test_update_block_replaces_body_preserving_identity() {
    let doc = starter();
    let mut engine = engine();

    let outcome = engine.apply(
        &doc,
        &Mutation::AddBlock {
            kind: BlockKind::Text,
            anchor_block_id: None,
            layout: RowLayout::OneCol,
        },
    );
    let text_id = outcome.new_block_id.unwrap();

    let next = engine
        .apply(
            &outcome.document,
            &Mutation::UpdateBlock {
                block_id: text_id.clone(),
                body: BlockBody::Text(TextBlock {
                    content: "Edited".to_string(),
                    heading: Some("New heading".to_string()),
                }),
            },
        )
        .document;

    let block = next.block(&text_id).unwrap();
    assert_eq!(block.id, text_id);
    match &block.body {
        BlockBody::Text(text) => {
            assert_eq!(text.content, "Edited");
            assert_eq!(text.heading.as_deref(), Some("New heading"));
        }
        other => panic!("expected text block, got {:?}", other.kind()),
    }
}

#[test]
fn test_update_block_with_mismatched_type_is_noop() {
    let doc = starter();
    let mut engine = engine();

    let header_id = doc.block_order()[0].to_string();
    let next = engine
        .apply(
            &doc,
            &Mutation::UpdateBlock {
                block_id: header_id,
                body: BlockBody::Text(TextBlock {
                    content: "smuggled".to_string(),
                    heading: None,
                }),
            },
        )
        .document;

    assert_eq!(next, doc);
}

#[test]
fn test_update_block_style_merges_fields() {
    let doc = starter();
    let mut engine = engine();
    let block_id = doc.block_order()[0].to_string();

    let step1 = engine
        .apply(
            &doc,
            &Mutation::UpdateBlockStyle {
                block_id: block_id.clone(),
                style: StylePatch {
                    block_bg_color: Some("#112233".to_string()),
                    block_padding: Some(32),
                    ..Default::default()
                },
            },
        )
        .document;

    let step2 = engine
        .apply(
            &step1,
            &Mutation::UpdateBlockStyle {
                block_id: block_id.clone(),
                style: StylePatch {
                    block_width: Some(BlockWidth::ThreeQuarters),
                    ..Default::default()
                },
            },
        )
        .document;

    let style = &step2.block(&block_id).unwrap().style;
    // Earlier overrides survive later partial patches
    assert_eq!(style.block_bg_color.as_deref(), Some("#112233"));
    assert_eq!(style.block_padding, Some(32));
    assert_eq!(style.block_width, Some(BlockWidth::ThreeQuarters));
}

#[test]
fn test_stale_id_mutations_are_idempotent() {
    let doc = starter();
    let mut engine = engine();

    let unchanged = [
        Mutation::UpdateBlock {
            block_id: "ghost".to_string(),
            body: BlockBody::Text(TextBlock {
                content: String::new(),
                heading: None,
            }),
        },
        Mutation::UpdateBlockStyle {
            block_id: "ghost".to_string(),
            style: StylePatch::default(),
        },
        Mutation::RemoveBlock {
            block_id: "ghost".to_string(),
        },
        Mutation::UpdateRowLayout {
            row_id: "ghost".to_string(),
            layout: RowLayout::TwoCol,
        },
        Mutation::MoveRowUp { row_index: 0 },
        Mutation::MoveRowDown {
            row_index: doc.rows.len() - 1,
        },
    ];

    for mutation in &unchanged {
        let next = engine.apply(&doc, mutation).document;
        assert_eq!(next, doc, "expected no-op for {:?}", mutation);
    }
}

#[test]
fn test_theme_preset_replaces_all_fields() {
    let doc = starter();
    let mut engine = engine();

    let next = engine
        .apply(
            &doc,
            &Mutation::UpdateTheme(ThemeUpdate::Preset(ThemePreset::Dark)),
        )
        .document;

    assert_eq!(next.theme, ThemePreset::Dark.theme());
}

#[test]
fn test_theme_overrides_merge_without_replacing() {
    let doc = starter();
    let mut engine = engine();

    let next = engine
        .apply(
            &doc,
            &Mutation::UpdateTheme(ThemeUpdate::Overrides(ThemePatch {
                accent_color: Some("#FF00FF".to_string()),
                ..Default::default()
            })),
        )
        .document;

    assert_eq!(next.theme.accent_color, "#FF00FF");
    // Untouched fields keep the current theme's values
    assert_eq!(next.theme.primary_color, doc.theme.primary_color);
    assert_eq!(next.theme.preset, doc.theme.preset);
}

#[test]
fn test_update_meta_merges_and_bumps_updated_at() {
    let doc = starter();
    let mut engine = MutationEngine::new(
        SequentialIds::new("m"),
        FixedClock(chrono::DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc)),
    );

    let next = engine
        .apply(
            &doc,
            &Mutation::UpdateMeta(MetaPatch {
                title: Some("Renamed".to_string()),
                issue_number: None,
            }),
        )
        .document;

    assert_eq!(next.meta.title, "Renamed");
    assert_eq!(next.meta.issue_number, doc.meta.issue_number);
    assert_eq!(next.meta.updated_at, "2024-06-01T12:00:00.000Z");
    // Version only moves when a snapshot is saved
    assert_eq!(next.meta.version, doc.meta.version);
}
