//! # Newsforge Export
//!
//! One-way projection of a newsletter document into standalone HTML.
//!
//! The projection reads a finalized document plus its theme and produces
//! a static artifact: collected presentation rules inlined as a `<style>`
//! block, the rendered markup of every row and block, and no editing
//! affordances of any kind. Output never feeds back into the model.
//!
//! The print variant embeds `@page` rules and triggers the print dialog
//! only after fonts and images have finished loading, signalled by
//! `document.fonts.ready` and per-image load/error events rather than a
//! guessed delay.

mod html;

pub use html::{
    export_html, export_print_html, html_filename, print_filename, ExportOptions,
};
