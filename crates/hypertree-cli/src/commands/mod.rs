//! Command handlers.
//!
//! Each handler returns the process exit code, see [`CliExitCode`].

pub mod focus;
pub mod layout;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use hypertree_core::{HyperError, HyperResult, HyperView, Orientation, Settings, Tree};
use tracing::error;

use crate::error::{exit_code_for_error, CliExitCode};
use crate::snapshot::to_json;

/// Where settings come from, shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsSource {
    /// TOML settings file; `HYPERTREE_*` environment variables override it
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Growth direction (radial, north, south, east, west)
    #[arg(short, long)]
    pub orientation: Option<Orientation>,

    /// Base node distance, in (0, 1)
    #[arg(short, long)]
    pub expansion: Option<f64>,

    /// Sibling sweep factor, in (0, π/2]
    #[arg(long)]
    pub sweep: Option<f64>,

    /// Move along the plain translation instead of keeping orientation
    #[arg(long)]
    pub no_preserve_orientation: bool,
}

impl SettingsSource {
    /// File and environment first, then command-line flags, validated.
    pub fn resolve(&self) -> HyperResult<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(orientation) = self.orientation {
            settings.orientation = orientation;
        }
        if let Some(expansion) = self.expansion {
            settings.expansion = expansion;
        }
        if let Some(sweep) = self.sweep {
            settings.sweep = sweep;
        }
        if self.no_preserve_orientation {
            settings.preserve_orientation = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Shape of the generated tree.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Levels below the root
    #[arg(short, long, default_value = "3")]
    pub depth: usize,

    /// Children per inner node
    #[arg(short, long, default_value = "3")]
    pub branching: usize,

    #[command(flatten)]
    pub settings: SettingsSource,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl TreeArgs {
    /// Generates the tree and lays it out with the resolved settings.
    pub fn build_view(&self, settings: Settings) -> HyperResult<HyperView> {
        HyperView::new(Tree::balanced(self.depth, self.branching), settings)
    }
}

/// Arguments for the settings command.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub source: SettingsSource,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the settings command.
pub fn handle_settings(args: SettingsArgs) -> i32 {
    let settings = match args.source.resolve() {
        Ok(s) => s,
        Err(e) => return report(&e),
    };
    print_json(&settings, args.pretty)
}

/// Logs `err` and returns its exit code.
pub(crate) fn report(err: &HyperError) -> i32 {
    error!(error = %err, "command failed");
    eprintln!("Error: {}", err);
    exit_code_for_error(err).into()
}

/// Prints `value` to stdout as JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> i32 {
    match write_json(&mut io::stdout().lock(), value, pretty) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => report(&e),
    }
}

/// Writes `value` as one JSON document followed by a newline.
pub(crate) fn write_json<T: serde::Serialize>(
    out: &mut impl Write,
    value: &T,
    pretty: bool,
) -> HyperResult<()> {
    let json = to_json(value, pretty)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
