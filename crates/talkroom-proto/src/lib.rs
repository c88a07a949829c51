//! Talkroom wire protocol
//!
//! Every exchange between the chat client and the server is one text
//! [`Frame`] carrying a flat JSON object. The `msgType` field selects the
//! message kind; the remaining fields (`senderId`, `senderName`, `room`,
//! `rooms`, `content`) are present or absent depending on the kind.
//!
//! # Components
//!
//! - [`Message`]: typed protocol messages, one variant per kind
//! - [`encode`] / [`decode`]: conversion between [`Message`] and [`Frame`]
//! - [`validate_room_name`]: the room naming rule enforced by the server

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod errors;
mod frame;
mod message;
mod room_name;

pub use errors::{DecodeError, EncodeError, RoomNameError};
pub use frame::{Decoded, Frame, decode, encode};
pub use message::{Message, MessageKind};
pub use room_name::validate_room_name;

/// Room every session joins on connect. It can never be left.
pub const MAIN_ROOM: &str = "main";

/// Server path of the chat channel.
pub const TALK_PATH: &str = "/talk";

/// Server path visited after the session ends.
pub const LOGOUT_PATH: &str = "/logout";

/// Input keyword that leaves the room it was typed in.
pub const EXIT_COMMAND: &str = "exit";

/// Input keyword that ends the session.
pub const LOGOUT_COMMAND: &str = "logout";
