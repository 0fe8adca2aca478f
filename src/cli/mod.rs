//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod decode;
mod info;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, SheetConfig};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Environment variable holding a tracing filter (e.g. `sheetanim=debug`)
pub const LOG_ENV: &str = "SHEETANIM_LOG";

/// Check if a path looks like a sprite sheet export (.json).
pub fn is_sheet_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("json"))
}

/// Find all sheet files in a directory (recursively).
pub fn find_sheet_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/**/*.json", dir.display());
    let mut files: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// sanim - Decode sprite sheet exports into animation data
#[derive(Parser)]
#[command(name = "sanim")]
#[command(about = "sanim - Decode sprite sheet JSON exports (frames, tags, slices) into animation data")]
#[command(version)]
pub struct Cli {
    /// Path to sheetanim.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Decoder flags shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct DecodeArgs {
    /// Milliseconds per quantization step
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tick_ms: Option<u32>,

    /// Ticks per quantization step
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub ticks_per_step: Option<u32>,

    /// Keep slice bounds in top-down Y
    #[arg(long)]
    pub no_flip_y: bool,

    /// Treat unrecognized tag directions as errors
    #[arg(long)]
    pub strict_directions: bool,

    /// Accept slice keys in any order
    #[arg(long)]
    pub allow_unsorted_slice_keys: bool,
}

impl DecodeArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            tick_ms: self.tick_ms,
            ticks_per_step: self.ticks_per_step,
            no_flip_y: self.no_flip_y.then_some(true),
            strict_directions: self.strict_directions.then_some(true),
            allow_unsorted_slice_keys: self.allow_unsorted_slice_keys.then_some(true),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a sheet and print its animations as JSON
    Decode {
        /// Sprite sheet JSON export
        input: PathBuf,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only emit the animation with this tag name
        #[arg(short, long)]
        tag: Option<String>,

        /// Add a horizontally mirrored copy of every animation
        #[arg(long)]
        mirror: bool,

        /// Emit sprite projections instead of animation frames
        #[arg(long)]
        sprites: bool,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,

        /// Suffix for mirrored tag names (default from config: "_mirrored")
        #[arg(long)]
        mirror_suffix: Option<String>,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Summarize the tags of a sheet
    Info {
        /// Sprite sheet JSON export
        input: PathBuf,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Decode many sheets and report which ones fail
    Check {
        /// Sheets to check
        #[arg(required_unless_present = "dir")]
        files: Vec<PathBuf>,

        /// Directory to scan for .json sheets (recursive)
        #[arg(long)]
        dir: Option<PathBuf>,

        #[command(flatten)]
        decode: DecodeArgs,
    },
}

/// Install the stderr tracing subscriber.
///
/// `SHEETANIM_LOG` wins when set; otherwise the level follows `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,sheetanim={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load config and apply CLI overrides, reporting failures on stderr.
fn load_settings(config: Option<&Path>, overrides: &CliOverrides) -> Option<SheetConfig> {
    match load_config(config) {
        Ok(mut settings) => {
            merge_cli_overrides(&mut settings, overrides);
            Some(settings)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decode { input, output, tag, mirror, sprites, compact, mirror_suffix, decode: decode_args } => {
            let overrides = CliOverrides {
                compact: compact.then_some(true),
                mirror_suffix,
                ..decode_args.overrides()
            };
            let Some(settings) = load_settings(cli.config.as_deref(), &overrides) else {
                return ExitCode::from(EXIT_INVALID_ARGS);
            };
            decode::run_decode(&input, output.as_deref(), tag.as_deref(), mirror, sprites, &settings)
        }
        Commands::Info { input, format, decode: decode_args } => {
            let Some(settings) = load_settings(cli.config.as_deref(), &decode_args.overrides()) else {
                return ExitCode::from(EXIT_INVALID_ARGS);
            };
            info::run_info(&input, &format, &settings)
        }
        Commands::Check { files, dir, decode: decode_args } => {
            let Some(settings) = load_settings(cli.config.as_deref(), &decode_args.overrides()) else {
                return ExitCode::from(EXIT_INVALID_ARGS);
            };
            check::run_check(&files, dir.as_deref(), &settings)
        }
    }
}
