use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenesplit")]
#[command(
    author,
    version,
    about = "Split recordings into scenes described by a CSV sidecar",
    disable_help_flag = true
)]
pub struct Cli {
    /// Source recordings; wildcards are allowed (e.g. "tapes/*.avi")
    pub source: String,

    /// Existing folder the scenes are written to
    pub destination: PathBuf,

    /// Accept kept segments whose dates go backwards
    #[arg(short = 't', long = "tolerate-dates")]
    pub tolerate_dates: bool,

    /// Show what would be produced without running ffmpeg
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(short = 'h', short_alias = '?', long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}
