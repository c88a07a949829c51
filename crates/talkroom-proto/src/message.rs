//! Typed protocol messages.
//!
//! The wire format is a single flat object for every kind, which makes it easy
//! to send a field the kind does not define or to forget one it requires.
//! [`Message`] closes that gap: each kind is its own variant carrying exactly
//! its fields, and matching on it is exhaustive.

use std::fmt;

/// A protocol message exchanged with the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Request (outbound) or announcement (inbound) of a new room.
    CreateRoom {
        /// Session that created the room.
        sender_id: String,
        /// Name of the new room.
        room: String,
    },

    /// Chat line posted to a room.
    Text {
        /// Session that posted the line.
        sender_id: String,
        /// Target room.
        room: String,
        /// Display name of the poster.
        sender_name: String,
        /// Line content.
        content: String,
    },

    /// Leave request (outbound) or its confirmation (inbound).
    UserLeftRoom {
        /// Session leaving the room.
        sender_id: String,
        /// Room being left.
        room: String,
        /// Display name of the leaving user.
        sender_name: String,
    },

    /// Session end, requested locally or forced by the server.
    Logout {
        /// Session being logged out.
        sender_id: String,
        /// Room the logout was issued from.
        room: String,
        /// Display name of the user.
        sender_name: String,
    },

    /// Snapshot of the room roster.
    RoomsList {
        /// Room names, in server order.
        rooms: Vec<String>,
    },

    /// A room no longer exists.
    RemoveRoom {
        /// Name of the removed room.
        room: String,
    },

    /// This session has been added to a room.
    UserJoinedRoom {
        /// Name of the joined room.
        room: String,
    },

    /// The server rejected an operation.
    ServerError {
        /// Human-readable reason.
        content: String,
    },
}

impl Message {
    /// Kind of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::CreateRoom { .. } => MessageKind::CreateRoom,
            Self::Text { .. } => MessageKind::Text,
            Self::UserLeftRoom { .. } => MessageKind::UserLeftRoom,
            Self::Logout { .. } => MessageKind::Logout,
            Self::RoomsList { .. } => MessageKind::RoomsList,
            Self::RemoveRoom { .. } => MessageKind::RemoveRoom,
            Self::UserJoinedRoom { .. } => MessageKind::UserJoinedRoom,
            Self::ServerError { .. } => MessageKind::ServerError,
        }
    }

    /// Room this message targets. `None` for roster snapshots and errors.
    pub fn room(&self) -> Option<&str> {
        match self {
            Self::CreateRoom { room, .. }
            | Self::Text { room, .. }
            | Self::UserLeftRoom { room, .. }
            | Self::Logout { room, .. }
            | Self::RemoveRoom { room }
            | Self::UserJoinedRoom { room } => Some(room),
            Self::RoomsList { .. } | Self::ServerError { .. } => None,
        }
    }
}

/// Message kind, as named by the `msgType` wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// `CREATE_ROOM`
    CreateRoom,
    /// `TEXT_MSG`
    Text,
    /// `USER_LEFT_ROOM`
    UserLeftRoom,
    /// `LOGOUT_USER`
    Logout,
    /// `ROOMS_LIST`
    RoomsList,
    /// `REMOVE_ROOM`
    RemoveRoom,
    /// `USER_JOINED_ROOM`
    UserJoinedRoom,
    /// `ERROR`
    ServerError,
}

impl MessageKind {
    /// Every kind, in wire-table order.
    pub const ALL: [Self; 8] = [
        Self::CreateRoom,
        Self::Text,
        Self::UserLeftRoom,
        Self::Logout,
        Self::RoomsList,
        Self::RemoveRoom,
        Self::UserJoinedRoom,
        Self::ServerError,
    ];

    /// The `msgType` string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateRoom => "CREATE_ROOM",
            Self::Text => "TEXT_MSG",
            Self::UserLeftRoom => "USER_LEFT_ROOM",
            Self::Logout => "LOGOUT_USER",
            Self::RoomsList => "ROOMS_LIST",
            Self::RemoveRoom => "REMOVE_ROOM",
            Self::UserJoinedRoom => "USER_JOINED_ROOM",
            Self::ServerError => "ERROR",
        }
    }

    /// Parse a `msgType` string. `None` for kinds this client does not know.
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
