//! Text frames and the JSON codec.
//!
//! A [`Frame`] is one text message on the channel. [`encode`] and [`decode`]
//! convert between frames and typed [`Message`]s.
//!
//! # Invariants
//!
//! - Field Presence: [`encode`] never emits a frame whose kind lacks a
//!   required identifying field (`senderId`, `room`). [`decode`] never yields
//!   a [`Message`] built from a frame missing a required field.
//!
//! - Unknown Kinds: a syntactically valid frame with an unrecognized `msgType`
//!   decodes to [`Decoded::UnknownKind`] rather than an error, so newer
//!   servers can add kinds without breaking older clients.
//!
//! # Wire Compatibility
//!
//! The server serializes an empty roster as `"rooms": null`. [`decode`]
//! treats that as an empty list; everywhere else `null` counts as absent.
//! Fields a kind does not define are ignored on decode and omitted on encode.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{DecodeError, EncodeError, Message, MessageKind};

const MSG_TYPE: &str = "msgType";
const SENDER_ID: &str = "senderId";
const SENDER_NAME: &str = "senderName";
const ROOM: &str = "room";
const ROOMS: &str = "rooms";
const CONTENT: &str = "content";

/// One text frame on the channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame(String);

impl Frame {
    /// Wrap raw frame text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Frame text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the frame, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Frame {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Frame {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of decoding a well-formed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// A message of a known kind.
    Message(Message),
    /// A valid frame whose `msgType` this client does not know.
    UnknownKind(String),
}

/// Flat wire layout shared by every kind. Absent fields are skipped.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireMessage<'a> {
    msg_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rooms: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

impl<'a> WireMessage<'a> {
    fn new(kind: MessageKind) -> Self {
        Self {
            msg_type: kind.as_str(),
            sender_id: None,
            sender_name: None,
            room: None,
            rooms: None,
            content: None,
        }
    }

    fn from_message(message: &'a Message) -> Result<Self, EncodeError> {
        let kind = message.kind();
        let mut wire = Self::new(kind);

        match message {
            Message::CreateRoom { sender_id, room } => {
                wire.sender_id = Some(required(kind, SENDER_ID, sender_id)?);
                wire.room = Some(required(kind, ROOM, room)?);
            },
            Message::Text { sender_id, room, sender_name, content } => {
                wire.sender_id = Some(required(kind, SENDER_ID, sender_id)?);
                wire.room = Some(required(kind, ROOM, room)?);
                wire.sender_name = Some(sender_name.as_str());
                wire.content = Some(content.as_str());
            },
            Message::UserLeftRoom { sender_id, room, sender_name }
            | Message::Logout { sender_id, room, sender_name } => {
                wire.sender_id = Some(required(kind, SENDER_ID, sender_id)?);
                wire.room = Some(required(kind, ROOM, room)?);
                wire.sender_name = Some(sender_name.as_str());
            },
            Message::RoomsList { rooms } => {
                wire.rooms = Some(rooms.as_slice());
            },
            Message::RemoveRoom { room } | Message::UserJoinedRoom { room } => {
                wire.room = Some(required(kind, ROOM, room)?);
            },
            Message::ServerError { content } => {
                wire.content = Some(content.as_str());
            },
        }

        Ok(wire)
    }
}

fn required<'a>(
    kind: MessageKind,
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, EncodeError> {
    if value.is_empty() { Err(EncodeError::MissingField { kind, field }) } else { Ok(value) }
}

/// Serialize a message into a frame.
///
/// # Errors
///
/// - `EncodeError::MissingField` if `senderId` or `room` is empty for a kind
///   that requires it.
pub fn encode(message: &Message) -> Result<Frame, EncodeError> {
    let wire = WireMessage::from_message(message)?;
    serde_json::to_string(&wire).map(Frame).map_err(|e| EncodeError::Serialize(e.to_string()))
}

/// Parse a frame into a message.
///
/// # Errors
///
/// - `DecodeError::Malformed` if the payload is not a JSON object with a
///   string `msgType`, or a known field has the wrong JSON type.
/// - `DecodeError::MissingField` if a known kind lacks a required field.
pub fn decode(frame: &Frame) -> Result<Decoded, DecodeError> {
    let value: Value =
        serde_json::from_str(frame.as_str()).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(DecodeError::Malformed("expected a JSON object".into()));
    };

    let raw_kind = match fields.get(MSG_TYPE) {
        Some(Value::String(raw)) => raw.clone(),
        Some(_) => return Err(DecodeError::Malformed(format!("`{MSG_TYPE}` is not a string"))),
        None => return Err(DecodeError::Malformed(format!("missing `{MSG_TYPE}`"))),
    };

    let Some(kind) = MessageKind::from_wire(&raw_kind) else {
        return Ok(Decoded::UnknownKind(raw_kind));
    };

    let mut fields = Fields { kind, map: fields };
    let message = match kind {
        MessageKind::CreateRoom => Message::CreateRoom {
            sender_id: fields.string(SENDER_ID)?,
            room: fields.string(ROOM)?,
        },
        MessageKind::Text => Message::Text {
            sender_id: fields.string(SENDER_ID)?,
            room: fields.string(ROOM)?,
            sender_name: fields.string(SENDER_NAME)?,
            content: fields.string(CONTENT)?,
        },
        MessageKind::UserLeftRoom => Message::UserLeftRoom {
            sender_id: fields.string(SENDER_ID)?,
            room: fields.string(ROOM)?,
            sender_name: fields.string(SENDER_NAME)?,
        },
        MessageKind::Logout => Message::Logout {
            sender_id: fields.string(SENDER_ID)?,
            room: fields.string(ROOM)?,
            sender_name: fields.string(SENDER_NAME)?,
        },
        MessageKind::RoomsList => Message::RoomsList { rooms: fields.rooms()? },
        MessageKind::RemoveRoom => Message::RemoveRoom { room: fields.string(ROOM)? },
        MessageKind::UserJoinedRoom => Message::UserJoinedRoom { room: fields.string(ROOM)? },
        MessageKind::ServerError => Message::ServerError { content: fields.string(CONTENT)? },
    };

    Ok(Decoded::Message(message))
}

/// Field extraction for one decoded object.
struct Fields {
    kind: MessageKind,
    map: Map<String, Value>,
}

impl Fields {
    fn string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        match self.map.remove(field) {
            Some(Value::String(value)) => Ok(value),
            Some(Value::Null) | None => Err(DecodeError::MissingField { kind: self.kind, field }),
            Some(_) => Err(DecodeError::Malformed(format!(
                "`{field}` of {} is not a string",
                self.kind
            ))),
        }
    }

    fn rooms(&mut self) -> Result<Vec<String>, DecodeError> {
        match self.map.remove(ROOMS) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    _ => Err(DecodeError::Malformed(format!("`{ROOMS}` holds a non-string"))),
                })
                .collect(),
            Some(Value::Null) => Ok(Vec::new()),
            None => Err(DecodeError::MissingField { kind: self.kind, field: ROOMS }),
            Some(_) => Err(DecodeError::Malformed(format!("`{ROOMS}` is not an array"))),
        }
    }
}
