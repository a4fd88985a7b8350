//! Letter clips.
//!
//! Each letter has one clip, `<dir>/<letter>.mp3`. Playback is delegated to
//! an external player process that is spawned and never awaited, so a slow
//! or stuck player cannot hold up input. Overlapping clips are allowed.

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use braille_core::Letter;
use tokio::process::Command;
use tracing::{debug, warn};

/// Resolves letters to clip files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundBank {
    dir: PathBuf,
}

impl SoundBank {
    /// Bank rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Clip directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the clip for `letter`.
    pub fn path_for(&self, letter: Letter) -> PathBuf {
        self.dir.join(format!("{letter}.mp3"))
    }
}

/// What happened to a playback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// Player process spawned.
    Started,
    /// No player configured.
    NoPlayer,
    /// Clip file does not exist.
    MissingClip(PathBuf),
    /// Player could not be spawned.
    Failed(String),
}

/// Spawns the configured player for committed letters.
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    bank: SoundBank,
    program: Option<String>,
    args: Vec<String>,
}

impl AudioPlayer {
    /// Player running `command` (program followed by arguments, split on
    /// whitespace). `None` or a blank command disables playback.
    pub fn new(bank: SoundBank, command: Option<String>) -> Self {
        let mut words = command.iter().flat_map(|c| c.split_whitespace()).map(str::to_owned);
        let program = words.next();
        Self { bank, program, args: words.collect() }
    }

    /// The clip bank.
    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }

    /// Start playback of `letter` without waiting for it to finish.
    ///
    /// Must be called from within a tokio runtime; the child is reaped in
    /// the background.
    pub fn play(&self, letter: Letter) -> Playback {
        let Some(program) = &self.program else {
            debug!(%letter, "no player configured");
            return Playback::NoPlayer;
        };

        let clip = self.bank.path_for(letter);
        if !clip.is_file() {
            warn!(%letter, clip = %clip.display(), "clip not found");
            return Playback::MissingClip(clip);
        }

        let spawned = Command::new(program)
            .args(&self.args)
            .arg(&clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(%letter, pid = ?child.id(), "playback started");
                Playback::Started
            },
            Err(error) => {
                warn!(%letter, program, %error, "failed to start player");
                Playback::Failed(error.to_string())
            },
        }
    }
}
