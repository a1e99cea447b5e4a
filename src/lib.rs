//! ZMK Keymap Library
//!
//! This library provides the core functionality for zmklens: parsing
//! ZMK keymap files into a structured, renderable model and inferring
//! the physical keyboard layout from the parsed bindings.

// Module declarations
pub mod cli;
pub mod constants;
pub mod models;
pub mod parser;
