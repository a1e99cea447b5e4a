//! Physical layout inference.
//!
//! Keymap files carry no explicit geometry, so the layout is derived from
//! the statistical shape of the parsed bindings, a registry of known
//! boards matched against the raw source text and file path, and a
//! midpoint-gap analysis for split detection.

use crate::models::{KeyboardLayout, Layer};
use std::path::Path;
use tracing::debug;

/// Board keyword → (display name, is split). Matched case-insensitively
/// as a substring of the raw source and the file-path hint; first match
/// wins. Extend by adding rows, not control flow.
const KNOWN_BOARDS: &[(&str, &str, bool)] = &[
    ("corne", "Corne", true),
    ("crkbd", "Corne", true),
    ("chocofi", "Chocofi", true),
    ("sweep", "Sweep", true),
    ("cradio", "Cradio", true),
    ("ferris", "Ferris", true),
    ("lily58", "Lily58", true),
    ("sofle", "Sofle", true),
    ("kyria", "Kyria", true),
    ("iris", "Iris", true),
    ("totem", "TOTEM", true),
    ("microdox", "Microdox", true),
    ("glove80", "Glove80", true),
    ("moonlander", "Moonlander", true),
    ("ergodox", "ErgoDox", true),
    ("reviung", "Reviung", false),
    ("planck", "Planck", false),
    ("preonic", "Preonic", false),
];

/// Well-known total key counts, used for naming only when no board
/// keyword matches.
const KNOWN_TOTALS: &[(usize, &str)] = &[
    (34, "Sweep/Cradio"),
    (42, "Corne"),
    (48, "Sofle"),
    (60, "Lily58 Pro"),
];

// Split-detection tuning. These are empirical, not load-bearing exact
// values; adjust against known-board fixtures if they misclassify.
const SPLIT_GAP_RATIO: f64 = 1.5;
const MIN_TOKENS_FOR_GAP_ANALYSIS: usize = 6;

/// Infers the physical layout from the representative (first) layer's
/// bindings plus the raw source text and optional file-path hint.
#[must_use]
pub fn infer_layout(
    first_layer: &Layer,
    raw_source: &str,
    file_path: Option<&Path>,
) -> KeyboardLayout {
    let keys_per_row = keys_per_row(first_layer);
    let total: usize = keys_per_row.iter().sum();

    let detected = detect_known_board(raw_source, file_path);
    let is_split = detected.map_or_else(
        || detect_split_by_gaps(raw_source).unwrap_or(true),
        |(_, split)| split,
    );
    let name = detected.map_or_else(
        || {
            KNOWN_TOTALS
                .iter()
                .find(|(count, _)| *count == total)
                .map_or_else(|| format!("Custom ({total} keys)"), |(_, n)| (*n).to_string())
        },
        |(n, _)| n.to_string(),
    );

    debug!(name = %name, total, is_split, "inferred keyboard layout");
    KeyboardLayout::from_row_counts(name, keys_per_row, is_split)
}

/// Counts bindings per row, one entry per row index from 0 to the
/// maximum; rows with no bindings count 0.
fn keys_per_row(layer: &Layer) -> Vec<usize> {
    let Some(max_row) = layer.bindings.iter().map(|b| b.row).max() else {
        return Vec::new();
    };
    let mut counts = vec![0usize; max_row + 1];
    for binding in &layer.bindings {
        counts[binding.row] += 1;
    }
    counts
}

/// Scans the raw source (vendor-tool signature comments included) and the
/// file path against the known-board registry.
fn detect_known_board(
    raw_source: &str,
    file_path: Option<&Path>,
) -> Option<(&'static str, bool)> {
    let source = raw_source.to_lowercase();
    let path = file_path
        .map(|p| p.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    KNOWN_BOARDS
        .iter()
        .find(|(keyword, _, _)| source.contains(keyword) || path.contains(keyword))
        .map(|(_, name, split)| (*name, *split))
}

/// Classifies split geometry from source-text alignment: a line whose
/// midpoint gap is much wider than its other inter-token gaps suggests a
/// visual left/right divide. Returns `None` when no line qualifies for
/// analysis.
fn detect_split_by_gaps(raw_source: &str) -> Option<bool> {
    let mut analyzed = 0usize;
    let mut flagged = 0usize;

    for line in raw_source.lines() {
        let spans = token_spans(line);
        if spans.len() < MIN_TOKENS_FOR_GAP_ANALYSIS {
            continue;
        }

        let gaps: Vec<usize> = spans
            .windows(2)
            .map(|pair| pair[1].0.saturating_sub(pair[0].1))
            .collect();
        let mid = (spans.len() - 1) / 2;
        let mid = mid.min(gaps.len() - 1);

        let others: Vec<usize> = gaps
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != mid)
            .map(|(_, g)| *g)
            .collect();
        if others.is_empty() {
            continue;
        }
        let avg = others.iter().sum::<usize>() as f64 / others.len() as f64;

        analyzed += 1;
        if gaps[mid] as f64 > SPLIT_GAP_RATIO * avg {
            flagged += 1;
        }
    }

    if analyzed == 0 {
        None
    } else {
        Some(flagged * 2 > analyzed)
    }
}

/// Char-index spans of `&`-prefixed tokens on one line, parenthesis-aware.
fn token_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut last_non_ws = 0usize;
    let mut depth = 0usize;

    for (i, c) in line.chars().enumerate() {
        if c == '&' && depth == 0 {
            if let Some(s) = start {
                spans.push((s, last_non_ws + 1));
            }
            start = Some(i);
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if !c.is_whitespace() {
            last_non_ws = i;
        }
    }
    if let Some(s) = start {
        spans.push((s, last_non_ws + 1));
    }

    spans
}
