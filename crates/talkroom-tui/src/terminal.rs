//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The chat channel is a WebSocket.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use talkroom_app::{
    AppEvent, Driver, Incoming, Session, ViewCommand, ViewError,
    transport::{self, ConnectedChannel, TransportError},
};
use talkroom_proto::Frame;
use thiserror::Error;

use crate::{KeyInput, Screen, ui};

/// How long to wait for a key before checking the channel again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui) and the chat
/// channel (WebSocket). Owns the [`Screen`] the session's view commands are
/// applied to.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    channel: Option<ConnectedChannel>,
    screen: Screen,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, channel: None, screen: Screen::new() })
    }

    /// Convert a crossterm key event to a [`KeyInput`].
    pub fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => Some(KeyInput::NewRoom),
                KeyCode::Char('o') => Some(KeyInput::OpenRoom),
                KeyCode::Char('c') => Some(KeyInput::Esc),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event).and_then(|key| self.screen.handle_key(key)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(None),
                }
            }

            // Nothing typed; let the runtime drain the channel
            () = tokio::time::sleep(POLL_INTERVAL) => Ok(None),
        }
    }

    async fn send_frame(&mut self, frame: Frame) -> Result<(), Self::Error> {
        match &self.channel {
            Some(channel) => channel.send(frame).await.map_err(TerminalError::from),
            None => {
                tracing::warn!(%frame, "dropping frame, channel is closed");
                Ok(())
            },
        }
    }

    async fn recv_frame(&mut self) -> Option<Incoming> {
        let incoming = self.channel.as_mut()?.try_recv();
        if incoming == Some(Incoming::Closed) {
            self.channel = None;
        }
        incoming
    }

    async fn connect(&mut self, url: &str) -> Result<(), Self::Error> {
        self.channel = Some(transport::connect(url).await?);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    fn apply(&mut self, command: &ViewCommand) -> Result<(), ViewError> {
        self.screen.apply(command)
    }

    async fn close_channel(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            channel.close().await;
        }
    }

    fn render(&mut self, session: &Session) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, session, &self.screen);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.channel = None;
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
