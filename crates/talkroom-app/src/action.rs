//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::Session`] state machine for the runtime to
//! execute, in order.

use talkroom_proto::Message;

use crate::ViewCommand;

/// Actions produced by the Session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Encode a message and send it on the channel.
    Send(Message),

    /// Apply an instruction to the view layer.
    View(ViewCommand),

    /// Close the channel.
    CloseChannel,

    /// Quit the application.
    Quit,
}
