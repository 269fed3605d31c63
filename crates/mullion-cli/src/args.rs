//! Command-line argument definitions for the Mullion CLI.
//!
//! [`Args`] is parsed with [`clap`]: the drawing to lay out, where to write
//! the SVG, an optional configuration file and the log verbosity.

use std::path::PathBuf;

use clap::Parser;

/// Lay out a subdivided frame and export it as SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Drawing file with `[parameters]` and `[[dividers]]` tables (TOML)
    pub input: PathBuf,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when the layout has overlapping dividers or thickness warnings
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
