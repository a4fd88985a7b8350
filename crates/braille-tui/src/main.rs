//! Braille composer in the terminal.
//!
//! Toggle dots with `1`-`6` or the mouse, commit with Enter, quit with Esc.

use braille_tui::{Args, AudioPlayer, Runtime, SoundBank, TerminalDriver, TerminalError, logging};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TerminalError> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let audio = AudioPlayer::new(SoundBank::new(args.audio_dir), args.player);
    let driver = TerminalDriver::new(audio)?;

    let mut runtime = Runtime::new(driver);
    runtime.run().await
}
