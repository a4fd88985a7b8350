//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Compose text from six-dot Braille cells.
#[derive(Debug, Clone, Parser)]
#[command(name = "braille-tui", version, about)]
pub struct Args {
    /// Directory holding one `<letter>.mp3` clip per letter.
    #[arg(long, default_value = "audios")]
    pub audio_dir: PathBuf,

    /// Program used to play clips, e.g. "mpg123 -q". The clip path is
    /// appended as the last argument. Clips are skipped when unset.
    #[arg(long)]
    pub player: Option<String>,

    /// Write logs to this file. Filtered by `RUST_LOG`, default `info`.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
