//! Inspection command: parse a keymap and print its layers.

use crate::cli::common::{CliError, CliResult};
use crate::models::{Keymap, Layer};
use crate::parser;
use clap::Args;
use std::path::PathBuf;

/// Parse a keymap file and print its layers and inferred layout
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the .keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Only show the layer with this name
    #[arg(short, long, value_name = "NAME")]
    pub layer: Option<String>,

    /// Show raw binding codes instead of display labels
    #[arg(long)]
    pub raw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command.
    pub fn execute(&self) -> CliResult<()> {
        let source = std::fs::read_to_string(&self.keymap).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.keymap.display()))
        })?;

        let keymap = parser::parse(&source, Some(&self.keymap))
            .map_err(|e| CliError::parse(format!("Failed to parse keymap: {e}")))?;

        if let Some(name) = &self.layer {
            let layer = keymap
                .layer(name)
                .ok_or_else(|| CliError::io(format!("No layer named '{name}'")))?;
            if self.json {
                print_json(layer)?;
            } else {
                print_layer(layer, self.raw);
            }
            return Ok(());
        }

        if self.json {
            print_json(&keymap)?;
        } else {
            print_keymap(&keymap, self.raw);
        }
        Ok(())
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}

fn print_keymap(keymap: &Keymap, raw: bool) {
    println!("Layout: {}", keymap.layout.name);
    println!(
        "  Keys: {} in {} rows {:?}{}",
        keymap.layout.total_keys,
        keymap.layout.row_count,
        keymap.layout.keys_per_row,
        if keymap.layout.is_split { ", split" } else { "" }
    );
    if keymap.layout.has_thumb_cluster {
        println!("  Thumb cluster: {} keys", keymap.layout.thumb_keys_count);
    }
    if !keymap.behaviors.is_empty() {
        println!("Behaviors: {}", format_map(&keymap.behaviors));
    }
    if !keymap.macros.is_empty() {
        println!("Macros: {}", format_map(&keymap.macros));
    }

    for layer in &keymap.layers {
        println!();
        print_layer(layer, raw);
    }
}

fn format_map(map: &std::collections::BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_layer(layer: &Layer, raw: bool) {
    println!("Layer: {} ({} keys)", layer.name, layer.key_count());

    let cell = |row: usize, col: usize| -> String {
        layer.binding_at(row, col).map_or_else(String::new, |b| {
            if raw {
                b.raw_code.clone()
            } else {
                b.effective_display_text().replace('\n', " ")
            }
        })
    };

    // Per-column widths so aligned grids stay readable.
    let widths: Vec<usize> = (0..layer.column_count)
        .map(|col| {
            (0..layer.row_count)
                .map(|row| cell(row, col).chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in 0..layer.row_count {
        let mut line = String::from(" ");
        for (col, width) in widths.iter().enumerate() {
            let text = cell(row, col);
            let pad = width.saturating_sub(text.chars().count());
            line.push_str(&text);
            line.push_str(&" ".repeat(pad + 2));
        }
        println!("{}", line.trim_end());
    }
}
