//! Terminal UI for talkroom
//!
//! A thin shell over [`talkroom_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`talkroom_app::Runtime`].
//!
//! This crate only handles keys, the view model and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod screen;
pub mod terminal;
pub mod ui;

pub use input::{InputLine, KeyInput};
pub use screen::{Focus, Mode, Panel, Screen};
pub use talkroom_app::{AppEvent, ClientConfig, Driver, Exit, Identity, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
