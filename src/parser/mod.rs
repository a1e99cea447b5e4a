//! Keymap source parsing.
//!
//! Converts devicetree-style keymap text into the [`Keymap`] model. The
//! pipeline flows strictly downward:
//!
//! raw text → stripped text → located sections → layers → tokens+aliases
//! → formatted bindings → inferred layout → one immutable [`Keymap`].
//!
//! Parsing is synchronous, performs no I/O, and owns no shared state;
//! each call returns an independently-owned result. Malformed input never
//! panics: local oddities degrade to fallback labels, and only a missing
//! `keymap` section or an empty one fails the whole parse.

pub mod comments;
pub mod format;
pub mod inference;
pub mod layers;
pub mod sections;
pub mod tokenizer;

pub use comments::strip_comments;
pub use format::{format_binding, format_key};
pub use inference::infer_layout;

use crate::models::{Binding, Keymap, Layer};
use anyhow::{bail, Result};
use std::path::Path;
use tracing::debug;

/// Parses keymap source text into a [`Keymap`].
///
/// `file_path` is only a hint for known-board detection; no file I/O
/// happens here — reading and decoding the file is the caller's concern.
///
/// # Errors
///
/// Fails when the source has no `keymap { }` section, or when that
/// section contains no layer block with a `bindings` assignment. All
/// other irregularities are absorbed into per-binding fallback labels.
pub fn parse(source: &str, file_path: Option<&Path>) -> Result<Keymap> {
    let stripped = strip_comments(source);

    let Some(keymap_body) = sections::find_section(&stripped, "keymap") else {
        bail!("no `keymap {{ }}` section found");
    };

    let raw_layers = layers::extract_layers(keymap_body);
    if raw_layers.is_empty() {
        bail!("keymap section contains no layers with bindings");
    }

    let parsed_layers: Vec<Layer> = raw_layers
        .into_iter()
        .map(|raw| Layer::new(raw.name, parse_bindings(&raw.payload)))
        .collect();

    let behaviors = sections::find_section(&stripped, "behaviors")
        .map(sections::parse_labeled_entries)
        .unwrap_or_default();
    let macros = sections::find_section(&stripped, "macros")
        .map(sections::parse_labeled_entries)
        .unwrap_or_default();

    let layout = inference::infer_layout(&parsed_layers[0], source, file_path);

    debug!(
        layers = parsed_layers.len(),
        keys = layout.total_keys,
        board = %layout.name,
        "parsed keymap"
    );

    Ok(Keymap {
        layers: parsed_layers,
        layout,
        behaviors,
        macros,
    })
}

/// Parses one bindings payload into positioned, formatted bindings.
///
/// Exposed separately because it is independently testable and reused by
/// internal callers.
#[must_use]
pub fn parse_bindings(payload: &str) -> Vec<Binding> {
    tokenizer::tokenize(payload)
        .into_iter()
        .map(|raw| Binding {
            display_text: format::format_binding(&raw.raw_code),
            raw_code: raw.raw_code,
            alias: raw.alias,
            row: raw.row,
            column: raw.column,
        })
        .collect()
}
