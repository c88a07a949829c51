//! Application layer for talkroom
//!
//! Pure state machines and a generic runtime for the multi-room chat client.
//! The same code runs against a real terminal and WebSocket in production and
//! against scripted in-memory drivers in tests.
//!
//! # Components
//!
//! - [`RoomDirectory`]: every room known to exist on the server
//! - [`TabManager`]: rooms open locally as panels, and which one is focused
//! - [`command`]: turns a line typed into a room into a protocol message
//! - [`Session`]: per-connection controller; dispatches inbound messages,
//!   handles user input and runs the connection lifecycle
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: generic orchestration loop over a [`Driver`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
pub mod command;
mod config;
mod directory;
mod dispatch;
mod driver;
mod error;
mod event;
mod lifecycle;
mod runtime;
mod session;
mod state;
mod tabs;
#[cfg(feature = "transport")]
pub mod transport;
mod view;

pub use action::AppAction;
pub use command::Command;
pub use config::{ClientConfig, Identity};
pub use directory::RoomDirectory;
pub use driver::{Driver, Incoming};
pub use error::AppError;
pub use event::AppEvent;
pub use runtime::{Exit, Runtime};
pub use session::Session;
pub use state::ConnectionState;
pub use tabs::{ConversationLog, LogLine, Tab, TabManager, ViewBinding};
pub use view::{ViewCommand, ViewError};
