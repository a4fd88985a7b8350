//! Runtime loop driven by a scripted driver.
//!
//! The driver replays fixed input batches and records every side effect, so
//! the tests observe exactly what the terminal front-end would be asked to do.

use std::{collections::VecDeque, convert::Infallible};

use braille_app::{App, AppEvent, Driver, Letter, Runtime};

#[derive(Default)]
struct ScriptedDriver {
    script: VecDeque<Vec<AppEvent>>,
    sounds: Vec<char>,
    frames: Vec<String>,
    stopped: bool,
}

impl ScriptedDriver {
    fn new(batches: Vec<Vec<AppEvent>>) -> Self {
        Self { script: batches.into(), ..Self::default() }
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    fn poll_events(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Option<Vec<AppEvent>>, Self::Error>> + Send {
        std::future::ready(Ok(self.script.pop_front()))
    }

    fn play_sound(&mut self, letter: Letter) {
        self.sounds.push(letter.as_char());
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.frames.push(format!("{}|{}", app.line(), app.preview()));
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

fn toggle(index: usize) -> AppEvent {
    AppEvent::ToggleDot { index }
}

#[tokio::test]
async fn commits_play_sounds_in_order() {
    let driver = ScriptedDriver::new(vec![
        vec![toggle(0), toggle(2), AppEvent::Commit],
        vec![toggle(0), AppEvent::Commit],
        vec![AppEvent::Space],
    ]);
    let mut runtime = Runtime::new(driver);

    runtime.run().await.unwrap();

    assert_eq!(runtime.app().line().as_str(), "ba ");
    assert_eq!(runtime.driver().sounds, vec!['b', 'a']);
    assert!(runtime.driver().stopped);
}

#[tokio::test]
async fn renders_once_per_batch() {
    let driver = ScriptedDriver::new(vec![vec![toggle(0), toggle(2)], vec![AppEvent::Commit]]);
    let mut runtime = Runtime::new(driver);

    runtime.run().await.unwrap();

    // Initial frame, then one per batch.
    assert_eq!(runtime.driver().frames, vec!["|", "|b", "b|"]);
}

#[tokio::test]
async fn rejected_commit_plays_nothing() {
    let driver = ScriptedDriver::new(vec![vec![toggle(1), AppEvent::Commit]]);
    let mut runtime = Runtime::new(driver);

    runtime.run().await.unwrap();

    assert!(runtime.driver().sounds.is_empty());
    assert!(runtime.app().line().is_empty());
    assert_eq!(runtime.driver().frames.last().map(String::as_str), Some("|?"));
}

#[tokio::test]
async fn out_of_range_toggle_is_dropped() {
    let driver = ScriptedDriver::new(vec![vec![toggle(9), toggle(0), AppEvent::Commit]]);
    let mut runtime = Runtime::new(driver);

    runtime.run().await.unwrap();

    assert_eq!(runtime.app().line().as_str(), "a");
}

#[tokio::test]
async fn quit_stops_before_remaining_input() {
    let driver = ScriptedDriver::new(vec![
        vec![toggle(0), AppEvent::Quit, AppEvent::Commit],
        vec![AppEvent::Space],
    ]);
    let mut runtime = Runtime::new(driver);

    runtime.run().await.unwrap();

    assert!(runtime.app().should_quit());
    assert!(runtime.app().line().is_empty());
    assert!(runtime.driver().sounds.is_empty());
    assert_eq!(runtime.driver().script.len(), 1);
    assert!(runtime.driver().stopped);
}

#[tokio::test]
async fn empty_batch_skips_render() {
    let driver = ScriptedDriver::new(vec![vec![], vec![AppEvent::Backspace]]);
    let mut runtime = Runtime::new(driver);

    runtime.run().await.unwrap();

    // Backspace on an empty line changes nothing, so only the initial frame.
    assert_eq!(runtime.driver().frames.len(), 1);
}
