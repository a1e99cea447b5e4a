//! Keymap layer data structure.

use crate::models::Binding;
use serde::Serialize;

/// One named keymap layer ("default", "symbols", etc).
///
/// Bindings are kept in insertion order (= parse order). The derived
/// `row_count`/`column_count` reflect the extents of the binding grid at
/// parse time and are not recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    /// Explicit `label`/`display-name` if present, else the block identifier
    pub name: String,
    /// Ordered bindings (insertion order = parse order)
    pub bindings: Vec<Binding>,
    /// Number of rows spanned by the bindings
    pub row_count: usize,
    /// Width of the widest row
    pub column_count: usize,
}

impl Layer {
    /// Creates a layer from a name and its parsed bindings, deriving the
    /// row/column extents.
    #[must_use]
    pub fn new(name: impl Into<String>, bindings: Vec<Binding>) -> Self {
        let row_count = bindings.iter().map(|b| b.row + 1).max().unwrap_or(0);
        let column_count = bindings.iter().map(|b| b.column + 1).max().unwrap_or(0);

        Self {
            name: name.into(),
            bindings,
            row_count,
            column_count,
        }
    }

    /// Gets the binding at the given grid position, if any.
    #[must_use]
    pub fn binding_at(&self, row: usize, column: usize) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|b| b.row == row && b.column == column)
    }

    /// Number of keys bound on this layer.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(row: usize, column: usize) -> Binding {
        Binding {
            display_text: "A".to_string(),
            raw_code: "&kp A".to_string(),
            alias: None,
            row,
            column,
        }
    }

    #[test]
    fn test_layer_extents() {
        let layer = Layer::new("default", vec![binding(0, 0), binding(0, 1), binding(1, 0)]);
        assert_eq!(layer.row_count, 2);
        assert_eq!(layer.column_count, 2);
        assert_eq!(layer.key_count(), 3);
    }

    #[test]
    fn test_layer_empty_extents() {
        let layer = Layer::new("empty", vec![]);
        assert_eq!(layer.row_count, 0);
        assert_eq!(layer.column_count, 0);
    }

    #[test]
    fn test_binding_at() {
        let layer = Layer::new("default", vec![binding(0, 0), binding(1, 2)]);
        assert!(layer.binding_at(1, 2).is_some());
        assert!(layer.binding_at(2, 0).is_none());
    }
}
