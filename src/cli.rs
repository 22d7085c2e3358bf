use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[command(name = "subshift")]
#[command(version)]
#[command(about = "Shift every timestamp in an SRT, VTT, or ASS subtitle file by a fixed offset.")]
pub struct Args {
    /// Input subtitle file
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "print_default_config"
    )]
    pub file: Option<PathBuf>,

    /// Shift in seconds; negative and fractional values are allowed (e.g. -1.25)
    #[arg(short, long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub time: Option<String>,

    /// Output file (defaults to the input name with `_rsynced` before the extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Timing line grammar (otherwise inferred from the input extension)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    pub print_default_config: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Srt,
    Vtt,
    Ass,
}
