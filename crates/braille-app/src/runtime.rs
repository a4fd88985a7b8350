//! Generic runtime loop.
//!
//! [`Runtime`] owns the [`App`] and a [`Driver`]. It renders once up front,
//! then repeatedly waits for input, feeds each event to the state machine and
//! executes the returned actions. Renders requested within one input batch
//! are coalesced into a single draw.

use tracing::{debug, info, warn};

use crate::{App, AppAction, AppEvent, Driver};

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue { render: bool },
    Quit,
}

/// Orchestrates the App state machine over a [`Driver`].
pub struct Runtime<D: Driver> {
    app: App,
    driver: D,
}

impl<D: Driver> Runtime<D> {
    /// Runtime with a fresh [`App`].
    pub fn new(driver: D) -> Self {
        Self::with_app(App::new(), driver)
    }

    /// Runtime resuming an existing [`App`].
    pub fn with_app(app: App, driver: D) -> Self {
        Self { app, driver }
    }

    /// Current application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run until quit or until the input source closes.
    ///
    /// [`Driver::stop`] is called on every exit path.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if polling or rendering fails.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let result = self.event_loop().await;
        self.driver.stop();
        result
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let Some(events) = self.driver.poll_events().await? else {
                info!("input closed");
                return Ok(());
            };

            let mut render = false;
            for event in events {
                match self.dispatch(event) {
                    Flow::Continue { render: requested } => render |= requested,
                    Flow::Quit => {
                        info!(line_len = self.app.line().len(), "quit requested");
                        return Ok(());
                    },
                }
            }

            if render {
                self.driver.render(&self.app)?;
            }
        }
    }

    fn dispatch(&mut self, event: AppEvent) -> Flow {
        let actions = match self.app.handle(event) {
            Ok(actions) => actions,
            Err(error) => {
                warn!(%error, ?event, "input rejected");
                return Flow::Continue { render: false };
            },
        };

        let mut render = false;
        for action in actions {
            match action {
                AppAction::Render => render = true,
                AppAction::PlaySound { letter } => {
                    debug!(%letter, "play sound");
                    self.driver.play_sound(letter);
                },
                AppAction::Quit => return Flow::Quit,
            }
        }
        Flow::Continue { render }
    }
}
