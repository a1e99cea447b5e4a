//! Top-level parse result.

use crate::models::{KeyboardLayout, Layer};
use serde::Serialize;
use std::collections::BTreeMap;

/// A fully parsed keymap: layers, inferred geometry, and behavior/macro labels.
///
/// Produced once per successful parse call; a pure value with no
/// back-references, safe to copy and share between consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keymap {
    /// Layers in source order; never empty for a valid parse
    pub layers: Vec<Layer>,
    /// Inferred physical geometry, shared by all layers
    pub layout: KeyboardLayout,
    /// Behavior identifier → human label, from the optional `behaviors {}` section
    pub behaviors: BTreeMap<String, String>,
    /// Macro identifier → human label, from the optional `macros {}` section
    pub macros: BTreeMap<String, String>,
}

impl Keymap {
    /// Finds a layer by name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}
