//! Data models for parsed keymaps, layers, and inferred keyboard geometry.
//!
//! This module contains all the core data structures produced by the parser.
//! Models are immutable after parsing and are designed to be independent of
//! UI and output-formatting logic.

pub mod binding;
pub mod keymap;
pub mod layer;
pub mod layout;

// Re-export all model types
pub use binding::Binding;
pub use keymap::Keymap;
pub use layer::Layer;
pub use layout::KeyboardLayout;
