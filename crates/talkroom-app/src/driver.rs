//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the runtime from the terminal and the
//! network. Each frontend implements it, while the generic [`crate::Runtime`]
//! handles all orchestration.

use std::future::Future;

use talkroom_proto::Frame;

use crate::{AppEvent, Session, ViewCommand, ViewError};

/// What the channel has for the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    /// A frame from the server.
    Frame(Frame),
    /// The channel closed. Nothing more will arrive.
    Closed,
}

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic, so the same loop
/// runs against a real terminal and against scripted drivers in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, a WebSocket for the channel
/// - **Tests**: in-memory queues of events and frames
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next user-interface event.
    ///
    /// Returns `None` if no event is ready. Implementations should wait only
    /// briefly so inbound frames keep flowing.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Send a frame to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the send fails.
    fn send_frame(&mut self, frame: Frame) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Take the next pending item from the channel.
    ///
    /// Returns `None` if nothing is pending right now.
    fn recv_frame(&mut self) -> impl Future<Output = Option<Incoming>> + Send;

    /// Open the channel to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot be opened.
    fn connect(&mut self, url: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Check if the channel is open.
    fn is_connected(&self) -> bool;

    /// Apply one view change.
    ///
    /// # Errors
    ///
    /// - `ViewError::MissingViewBinding` if the command names an unknown panel.
    fn apply(&mut self, command: &ViewCommand) -> Result<(), ViewError>;

    /// Close the channel. Frames already handed to [`Self::send_frame`] are
    /// still delivered.
    fn close_channel(&mut self) -> impl Future<Output = ()> + Send;

    /// Render the session.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, session: &Session) -> Result<(), Self::Error>;

    /// Release every resource held by the driver.
    fn stop(&mut self);
}
