//! Watch command: reparse a keymap file whenever it changes.
//!
//! The parser itself does no I/O and provides no cancellation; this
//! command is the caller-side loop around it. Change notifications are
//! debounced, each event triggers a fresh read + parse, and the newest
//! result wins. A failed parse leaves the last good model untouched and
//! reports a short error line instead.

use crate::cli::common::{CliError, CliResult};
use crate::models::Keymap;
use crate::parser;
use clap::Args;
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use tracing::warn;

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watch a keymap file and reparse it on every change
#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    /// Path to the .keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Output one JSON document per successful parse
    #[arg(long)]
    pub json: bool,
}

impl WatchArgs {
    /// Execute the watch command. Runs until the channel closes.
    pub fn execute(&self) -> CliResult<()> {
        // Initial parse so the user sees state before the first change.
        let mut last_good = self.reparse(None);

        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx)
            .map_err(|e| CliError::io(format!("Failed to create file watcher: {e}")))?;
        debouncer
            .watcher()
            .watch(&self.keymap, RecursiveMode::NonRecursive)
            .map_err(|e| {
                CliError::io(format!("Failed to watch {}: {e}", self.keymap.display()))
            })?;

        for result in rx {
            match result {
                Ok(_events) => {
                    last_good = self.reparse(last_good);
                }
                Err(e) => warn!(error = %e, "file watcher error"),
            }
        }

        Ok(())
    }

    /// Reads and parses the file once. Returns the new model on success,
    /// the previous one otherwise.
    fn reparse(&self, last_good: Option<Keymap>) -> Option<Keymap> {
        let source = match std::fs::read_to_string(&self.keymap) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("✗ Failed to read {}: {e}", self.keymap.display());
                return last_good;
            }
        };

        match parser::parse(&source, Some(&self.keymap)) {
            Ok(keymap) => {
                self.report(&keymap);
                Some(keymap)
            }
            Err(e) => {
                eprintln!("✗ Failed to parse keymap: {e}");
                last_good
            }
        }
    }

    fn report(&self, keymap: &Keymap) {
        if self.json {
            match serde_json::to_string(keymap) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("✗ Failed to serialize keymap: {e}"),
            }
        } else {
            println!(
                "✓ {}: {} layers, {} keys ({})",
                self.keymap.display(),
                keymap.layers.len(),
                keymap.layout.total_keys,
                keymap.layout.name
            );
        }
    }
}
