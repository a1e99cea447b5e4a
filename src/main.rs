//! ZMK Lens - terminal inspector for ZMK keymap files
//!
//! Parses devicetree-style .keymap files into a structured model and
//! prints layers, inferred layout geometry, and behavior labels.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zmklens::cli::{InspectArgs, ValidateArgs, WatchArgs};
use zmklens::constants::{APP_BINARY_NAME, APP_NAME};

/// ZMK Lens - terminal inspector for ZMK keymap files
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, long_about = None)]
#[command(about = format!("{APP_NAME} - terminal inspector for ZMK keymap files"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a keymap file and print its layers
    Inspect(InspectArgs),
    /// Validate a keymap file and report its structure
    Validate(ValidateArgs),
    /// Watch a keymap file and reparse it on every change
    Watch(WatchArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Watch(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.message);
        std::process::exit(e.exit_code.code());
    }
}
