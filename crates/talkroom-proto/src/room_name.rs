//! Room naming rule.

use crate::RoomNameError;

/// Check a room name against the rule the server applies to `CREATE_ROOM`.
///
/// Names are non-empty and use only ASCII letters, digits, `_`, `.` and `-`.
/// The server answers a bad name with an `ERROR` frame; checking first lets
/// the client reject it without a round-trip.
pub fn validate_room_name(name: &str) -> Result<(), RoomNameError> {
    if name.is_empty() {
        return Err(RoomNameError::Empty);
    }

    match name.chars().find(|&ch| !is_room_name_char(ch)) {
        Some(ch) => Err(RoomNameError::InvalidChar { ch }),
        None => Ok(()),
    }
}

fn is_room_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-')
}
