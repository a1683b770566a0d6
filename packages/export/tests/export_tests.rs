//! Export projection tests: artifact structure, theme inlining, escaping,
//! and the absence of any editing affordances.

use newsforge_common::{FixedClock, SequentialIds};
use newsforge_editor::{Mutation, MutationEngine, StylePatch};
use newsforge_model::{default_newsletter, Newsletter, ThemePreset};
use newsforge_export::{export_html, export_print_html, html_filename, ExportOptions};

fn starter() -> Newsletter {
    let mut ids = SequentialIds::new("d");
    default_newsletter(&mut ids, &FixedClock::at_epoch())
}

#[test]
fn test_html_artifact_is_standalone() {
    let doc = starter();
    let html = export_html(&doc, &ExportOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("--color-primary: #003087"));
    assert!(html.contains("newsletter-preview"));
    assert!(html.contains("The Neurology AI Pulse — Issue 001"));
}

#[test]
fn test_every_row_and_block_rendered() {
    let doc = starter();
    let html = export_html(&doc, &ExportOptions::default());

    assert_eq!(
        html.matches("<div class=\"newsletter-row").count(),
        doc.rows.len()
    );
    for block in doc.blocks.values() {
        assert!(
            html.contains(&format!("block-{}", block.kind().tag())),
            "missing markup for {}",
            block.kind()
        );
    }
}

#[test]
fn test_no_editing_affordances_in_output() {
    let doc = starter();
    let html = export_html(&doc, &ExportOptions::default());

    for marker in [
        "contenteditable",
        "data-editor-only",
        "block-controls",
        "row-controls",
    ] {
        assert!(!html.contains(marker), "found editing marker {}", marker);
    }
}

#[test]
fn test_theme_swap_changes_inlined_palette() {
    let mut doc = starter();
    doc.theme = ThemePreset::Dark.theme();

    let html = export_html(&doc, &ExportOptions::default());
    assert!(html.contains("--color-bg: #0F172A"));
    assert!(!html.contains("--color-primary: #003087"));
}

#[test]
fn test_text_is_escaped() {
    let mut doc = starter();
    doc.meta.title = "Scripts & <Tags>".to_string();

    let html = export_html(&doc, &ExportOptions::default());
    assert!(html.contains("Scripts &amp; &lt;Tags&gt;"));
    assert!(!html.contains("Scripts & <Tags>"));
}

#[test]
fn test_style_overrides_become_inline_styles() {
    let doc = starter();
    let mut engine = MutationEngine::new(SequentialIds::new("m"), FixedClock::at_epoch());

    let block_id = doc.block_order()[0].to_string();
    let styled = engine
        .apply(
            &doc,
            &Mutation::UpdateBlockStyle {
                block_id,
                style: StylePatch {
                    block_bg_color: Some("#123456".to_string()),
                    block_padding: Some(40),
                    ..Default::default()
                },
            },
        )
        .document;

    let html = export_html(&styled, &ExportOptions::default());
    assert!(html.contains("background-color: #123456"));
    assert!(html.contains("padding-top: 40px; padding-bottom: 40px"));
}

#[test]
fn test_print_variant_waits_for_assets_instead_of_a_delay() {
    let doc = starter();
    let html = export_print_html(&doc, &ExportOptions::default());

    assert!(html.contains("@page"));
    assert!(html.contains("document.fonts"));
    assert!(html.contains("window.print()"));
    // The fixed pre-print delay is gone for good
    assert!(!html.contains("setTimeout"));
}

#[test]
fn test_plain_export_has_no_print_trigger() {
    let doc = starter();
    let html = export_html(&doc, &ExportOptions::default());
    assert!(!html.contains("window.print()"));
    assert!(!html.contains("@page"));
}

#[test]
fn test_filenames_carry_issue_number() {
    let doc = starter();
    assert_eq!(html_filename(&doc), "newsforge-issue-001.html");
}
