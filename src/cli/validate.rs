//! Validation command for keymap files.

use crate::cli::common::{CliError, CliResult};
use crate::models::Keymap;
use crate::parser;
use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Validate a keymap file and report its structure
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the .keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    layers: usize,
    total_keys: usize,
    layout: String,
    is_split: bool,
    warnings: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command.
    pub fn execute(&self) -> CliResult<()> {
        let source = std::fs::read_to_string(&self.keymap).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.keymap.display()))
        })?;

        let keymap = match parser::parse(&source, Some(&self.keymap)) {
            Ok(keymap) => keymap,
            Err(e) => {
                if self.json {
                    println!(
                        "{}",
                        serde_json::json!({ "valid": false, "error": e.to_string() })
                    );
                } else {
                    println!("✗ {}", e);
                }
                return Err(CliError::parse(format!("Failed to parse keymap: {e}")));
            }
        };

        let warnings = collect_warnings(&keymap);
        let report = ValidationReport {
            valid: true,
            layers: keymap.layers.len(),
            total_keys: keymap.layout.total_keys,
            layout: keymap.layout.name.clone(),
            is_split: keymap.layout.is_split,
            warnings: warnings.clone(),
        };

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize report: {e}")))?;
            println!("{json}");
        } else {
            println!("✓ Parsed {} layers, {} keys", report.layers, report.total_keys);
            println!("  Layout: {}{}", report.layout, if report.is_split { " (split)" } else { "" });
            for warning in &warnings {
                println!("  Warning: {warning}");
            }
        }

        if self.strict && !warnings.is_empty() {
            return Err(CliError::io(format!(
                "{} warning(s) in strict mode",
                warnings.len()
            )));
        }
        Ok(())
    }
}

/// Non-fatal oddities: duplicate grid positions and layers whose key
/// count differs from the first layer's.
fn collect_warnings(keymap: &Keymap) -> Vec<String> {
    let mut warnings = Vec::new();
    let reference = keymap.layers[0].key_count();

    for layer in &keymap.layers {
        let mut seen = HashSet::new();
        for binding in &layer.bindings {
            if !seen.insert((binding.row, binding.column)) {
                warnings.push(format!(
                    "layer '{}' has duplicate position ({}, {})",
                    layer.name, binding.row, binding.column
                ));
            }
        }

        if layer.key_count() != reference {
            warnings.push(format!(
                "layer '{}' has {} keys, first layer has {}",
                layer.name,
                layer.key_count(),
                reference
            ));
        }
    }

    warnings
}
