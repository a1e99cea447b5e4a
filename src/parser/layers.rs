//! Layer extraction from the keymap section.

use crate::parser::sections;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// A layer block before binding tokenization: resolved name plus the raw
/// `bindings = < ... >;` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLayer {
    /// `label` > `display-name` > block identifier
    pub name: String,
    /// Inner text of the bindings assignment, angle brackets excluded
    pub payload: String,
}

fn bindings_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The leading character class keeps "sensor-bindings" from matching.
    RE.get_or_init(|| Regex::new(r"(?s)(?:^|[\s;{])bindings\s*=\s*<(.*?)>\s*;").unwrap())
}

/// Splits the keymap section body into its layer blocks, in source order.
///
/// A child block without a `bindings` assignment (e.g. a stray node) is
/// skipped; it does not consume a layer slot.
#[must_use]
pub fn extract_layers(keymap_body: &str) -> Vec<RawLayer> {
    let mut layers = Vec::new();
    let mut offset = 0;

    while let Some((ident, body, after)) = sections::next_block(keymap_body, offset) {
        offset = after;

        let Some(caps) = bindings_regex().captures(body) else {
            debug!(block = ident, "keymap child block has no bindings, skipping");
            continue;
        };

        let name = sections::block_label(body).unwrap_or_else(|| ident.to_string());
        layers.push(RawLayer {
            name,
            payload: caps[1].to_string(),
        });
    }

    layers
}
