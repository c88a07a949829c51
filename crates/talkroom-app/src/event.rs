//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::Session`] state machine.
//!
//! Events originate from two distinct sources:
//! - Connection lifecycle and inbound frames from the channel.
//! - User interactions with the view layer (submitting input, clicking rooms).

use talkroom_proto::Frame;

/// Events processed by the Session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The channel is open.
    Connected,

    /// A frame arrived on the channel.
    Frame(Frame),

    /// The channel closed.
    Closed,

    /// The user submitted the input line of a room panel.
    SubmitInput {
        /// Room whose input was submitted.
        room: String,
        /// Raw input text.
        text: String,
    },

    /// The user submitted the room-creation control.
    CreateRoom {
        /// Requested room name.
        name: String,
    },

    /// The user picked a room from the roster.
    SelectRoom {
        /// Picked room.
        name: String,
    },

    /// The user picked an open tab.
    FocusTab {
        /// Picked room.
        name: String,
    },

    /// The user asked to quit.
    Quit,
}
