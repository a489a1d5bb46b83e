//! Hypertree CLI
//!
//! Lays out generated trees in the Poincare disk and prints the result as
//! JSON, for inspection and for feeding external renderers.
//!
//! # Commands
//!
//! - `layout`: lay out a balanced tree and print node circles and edge geodesics
//! - `focus`: animate a node to the center and print every frame
//! - `settings`: print the effective settings after file and environment overrides
//!
//! Exit codes: 0 on success, 1 on error, 2 on invalid input.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;
mod snapshot;

/// Hypertree CLI - hyperbolic tree layout
#[derive(Parser)]
#[command(name = "hypertree")]
#[command(version)]
#[command(about = "Lay out trees in the Poincare disk and animate focus changes")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a balanced tree and print its snapshot
    ///
    /// # Examples
    ///
    /// ```bash
    /// hypertree layout --depth 4 --branching 3 --orientation north
    /// ```
    Layout(commands::layout::LayoutArgs),
    /// Move a node to the center of the disk, printing each animation frame
    ///
    /// # Examples
    ///
    /// ```bash
    /// hypertree focus --node 5 --steps 8
    /// ```
    Focus(commands::focus::FocusArgs),
    /// Print the effective settings
    Settings(commands::SettingsArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Layout(args) => commands::layout::handle_layout(args),
        Commands::Focus(args) => commands::focus::handle_focus(args),
        Commands::Settings(args) => commands::handle_settings(args),
    };

    std::process::exit(exit_code);
}
