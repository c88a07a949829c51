//! Generic runtime for application orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`Session`]: room-lifecycle state machine
//! - [`Driver`]: platform-specific I/O
//!
//! Processing is run-to-completion: every action produced by one event is
//! executed, in order, before the next event is taken.

use talkroom_proto::{Message, encode};

use crate::{
    AppAction, AppEvent, ClientConfig, ConnectionState, Driver, Incoming, Session, ViewCommand,
};

/// Why the runtime stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The user quit.
    Quit,
    /// The session logged out. The user should be sent to `logout_url`.
    LoggedOut {
        /// Where the server expects the user to go next.
        logout_url: String,
    },
    /// The channel closed without a logout.
    ConnectionClosed,
}

/// Generic runtime that orchestrates a [`Session`] over a [`Driver`].
pub struct Runtime<D: Driver> {
    driver: D,
    session: Session,
    config: ClientConfig,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime for the given driver and configuration.
    pub fn new(driver: D, config: ClientConfig) -> Self {
        let session = Session::new(config.identity.clone());
        Self { driver, session, config }
    }

    /// Run the main event loop.
    ///
    /// Connects to the configured chat channel, then:
    /// 1. Polls for a user-interface event from the driver
    /// 2. Drains every frame the channel has pending
    /// 3. Renders
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<Exit, D::Error> {
        self.driver.render(&self.session)?;

        let url = self.config.talk_url();
        self.driver.connect(&url).await?;
        tracing::info!(%url, "channel open");

        let mut next = self.step(AppEvent::Connected).await?;
        let exit = loop {
            self.driver.render(&self.session)?;
            if let Some(exit) = next {
                break exit;
            }
            next = self.process_cycle().await?;
        };

        self.driver.stop();
        tracing::info!(?exit, "runtime stopped");
        Ok(exit)
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `Some` once the runtime should stop.
    async fn process_cycle(&mut self) -> Result<Option<Exit>, D::Error> {
        if let Some(event) = self.driver.poll_event().await?
            && let Some(exit) = self.step(event).await?
        {
            return Ok(Some(exit));
        }

        while self.driver.is_connected()
            && let Some(incoming) = self.driver.recv_frame().await
        {
            let event = match incoming {
                Incoming::Frame(frame) => AppEvent::Frame(frame),
                Incoming::Closed => AppEvent::Closed,
            };
            if let Some(exit) = self.step(event).await? {
                return Ok(Some(exit));
            }
        }

        Ok(None)
    }

    /// Feed one event to the session and execute its actions in order.
    async fn step(&mut self, event: AppEvent) -> Result<Option<Exit>, D::Error> {
        let mut exit = None;

        for action in self.session.handle(event) {
            match action {
                AppAction::Send(message) => self.send(&message).await?,
                AppAction::View(command) => {
                    if matches!(command, ViewCommand::NavigateAway { .. }) {
                        exit = Some(Exit::LoggedOut { logout_url: self.config.logout_url() });
                    }
                    if let Err(error) = self.driver.apply(&command) {
                        tracing::warn!(%error, ?command, "view command skipped");
                    }
                },
                AppAction::CloseChannel => self.driver.close_channel().await,
                AppAction::Quit => exit = Some(Exit::Quit),
            }
        }

        if exit.is_none() && self.session.state() == ConnectionState::Closed {
            exit = Some(Exit::ConnectionClosed);
        }
        Ok(exit)
    }

    /// Encode and send one message. Unencodable messages are dropped.
    async fn send(&mut self, message: &Message) -> Result<(), D::Error> {
        match encode(message) {
            Ok(frame) => self.driver.send_frame(frame).await,
            Err(error) => {
                tracing::error!(%error, kind = %message.kind(), "dropping unencodable message");
                Ok(())
            },
        }
    }

    /// Get a reference to the Session
    pub fn session(&self) -> &Session {
        &self.session
    }
}
