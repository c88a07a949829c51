//! Protocol error types.

use thiserror::Error;

use crate::MessageKind;

/// Errors from turning a [`crate::Frame`] into a [`crate::Message`].
///
/// A well-formed frame with an unrecognized `msgType` is not an error; see
/// [`crate::Decoded::UnknownKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload is not a JSON object with a string `msgType`, or a field has
    /// the wrong JSON type.
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// Payload names a known kind but lacks one of its required fields.
    #[error("{kind} frame is missing required field `{field}`")]
    MissingField {
        /// Kind named by the frame.
        kind: MessageKind,
        /// Wire name of the absent field.
        field: &'static str,
    },
}

/// Errors from turning a [`crate::Message`] into a [`crate::Frame`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A field the kind requires is empty.
    #[error("{kind} message is missing required field `{field}`")]
    MissingField {
        /// Kind of the rejected message.
        kind: MessageKind,
        /// Wire name of the empty field.
        field: &'static str,
    },

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Errors from [`crate::validate_room_name`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomNameError {
    /// Name is empty.
    #[error("room name is empty")]
    Empty,

    /// Name contains a character outside `[A-Za-z0-9_.-]`.
    #[error("room name contains invalid character {ch:?}")]
    InvalidChar {
        /// First offending character.
        ch: char,
    },
}
