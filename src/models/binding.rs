//! Key binding data structure.

use serde::Serialize;

/// One physical key's resolved meaning within a layer.
///
/// # Position Invariants
///
/// - `row`/`column` pairs are unique within one layer's binding set
/// - Positions are assigned purely from lexical order in the source
///   (row increments once per binding-bearing source line, column per
///   token within that line), never from any declared layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Derived short label (e.g. "Q", "⇧\nA", "MO1")
    pub display_text: String,
    /// Original source token with alias comments stripped (e.g. "&mt LEFT_SHIFT A")
    pub raw_code: String,
    /// Optional user-supplied override label from an alias annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Zero-based grid row, assigned by parse order
    pub row: usize,
    /// Zero-based grid column, assigned by parse order
    pub column: usize,
}

impl Binding {
    /// Returns the label to display: the alias if present, else the derived text.
    #[must_use]
    pub fn effective_display_text(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.display_text)
    }
}
