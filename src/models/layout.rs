//! Inferred physical keyboard geometry.

use serde::Serialize;

/// Physical geometry shared by all layers of one keymap.
///
/// Geometry is inferred from the first layer's binding grid and the raw
/// source text (for known-board detection); no explicit layout metadata
/// exists in keymap files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardLayout {
    /// Human label: detected board name, or "Custom (N keys)"
    pub name: String,
    /// Count of bindings in the representative (first) layer
    pub total_keys: usize,
    /// Per-row key counts, in row order
    pub keys_per_row: Vec<usize>,
    /// Number of rows (length of `keys_per_row`)
    pub row_count: usize,
    /// Whether the last row is shorter than the first (thumb keys)
    pub has_thumb_cluster: bool,
    /// Key count of the thumb row, 0 when there is none
    pub thumb_keys_count: usize,
    /// Whether the board has a physical left/right gap
    pub is_split: bool,
}

impl KeyboardLayout {
    /// Builds a layout from per-row key counts, deriving the totals and
    /// the thumb-cluster flags.
    #[must_use]
    pub fn from_row_counts(name: impl Into<String>, keys_per_row: Vec<usize>, is_split: bool) -> Self {
        let total_keys = keys_per_row.iter().sum();
        let row_count = keys_per_row.len();
        let first = keys_per_row.first().copied().unwrap_or(0);
        let last = keys_per_row.last().copied().unwrap_or(0);
        let has_thumb_cluster = row_count > 1 && last < first;
        let thumb_keys_count = if has_thumb_cluster { last } else { 0 };

        Self {
            name: name.into(),
            total_keys,
            keys_per_row,
            row_count,
            has_thumb_cluster,
            thumb_keys_count,
            is_split,
        }
    }
}
