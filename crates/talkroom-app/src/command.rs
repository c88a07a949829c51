//! Input interpretation.
//!
//! A line typed into a room panel is either a control command or chat text.
//! The decision is made once, here, and carried as a [`Command`] variant so
//! nothing downstream ever re-reads the raw text.
//!
//! Reserved keywords win over chat: typing exactly `exit` or `logout` can
//! never send that word as a message.

use talkroom_proto::{
    EXIT_COMMAND, LOGOUT_COMMAND, MAIN_ROOM, Message, RoomNameError, validate_room_name,
};

use crate::Identity;

/// Decision for one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the room the line was typed in.
    Leave,
    /// End the session.
    Logout,
    /// Post the line as chat.
    Say(String),
}

impl Command {
    /// Build the outbound message for this command typed in `room`.
    pub fn into_message(self, room: &str, identity: &Identity) -> Message {
        let sender_id = identity.sender_id().to_owned();
        let sender_name = identity.sender_name().to_owned();
        let room = room.to_owned();

        match self {
            Self::Leave => Message::UserLeftRoom { sender_id, room, sender_name },
            Self::Logout => Message::Logout { sender_id, room, sender_name },
            Self::Say(content) => Message::Text { sender_id, room, sender_name, content },
        }
    }
}

/// Interpret a line submitted in `room`.
///
/// Returns `None` for blank input and for `exit` typed in [`MAIN_ROOM`],
/// which cannot be left. Keywords match only the exact input; the text of a
/// [`Command::Say`] is passed through untouched.
pub fn interpret(room: &str, input: &str) -> Option<Command> {
    if input.trim().is_empty() {
        return None;
    }

    match input {
        EXIT_COMMAND if room == MAIN_ROOM => None,
        EXIT_COMMAND => Some(Command::Leave),
        LOGOUT_COMMAND => Some(Command::Logout),
        text => Some(Command::Say(text.to_owned())),
    }
}

/// Build the request for the room-creation control.
///
/// Surrounding whitespace is ignored. Blank input yields `Ok(None)`.
///
/// # Errors
///
/// - `RoomNameError` if the name breaks the server's naming rule.
pub fn create_room(name: &str, identity: &Identity) -> Result<Option<Message>, RoomNameError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    validate_room_name(name)?;
    Ok(Some(Message::CreateRoom {
        sender_id: identity.sender_id().to_owned(),
        room: name.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new("s1", "alice")
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(interpret("dev", ""), None);
        assert_eq!(interpret("dev", "   \t"), None);
    }

    #[test]
    fn exit_leaves_current_room() {
        assert_eq!(interpret("dev", "exit"), Some(Command::Leave));
    }

    #[test]
    fn exit_in_main_is_ignored() {
        assert_eq!(interpret(MAIN_ROOM, "exit"), None);
    }

    #[test]
    fn logout_works_everywhere() {
        assert_eq!(interpret(MAIN_ROOM, "logout"), Some(Command::Logout));
        assert_eq!(interpret("dev", "logout"), Some(Command::Logout));
    }

    #[test]
    fn keywords_match_exactly() {
        assert_eq!(interpret("dev", "exit "), Some(Command::Say("exit ".into())));
        assert_eq!(interpret("dev", "Logout"), Some(Command::Say("Logout".into())));
        assert_eq!(interpret(MAIN_ROOM, "exit now"), Some(Command::Say("exit now".into())));
    }

    #[test]
    fn messages_carry_identity_and_room() {
        let message = Command::Say("hi".into()).into_message("dev", &identity());
        assert_eq!(message, Message::Text {
            sender_id: "s1".into(),
            room: "dev".into(),
            sender_name: "alice".into(),
            content: "hi".into(),
        });

        let message = Command::Leave.into_message("dev", &identity());
        assert_eq!(message, Message::UserLeftRoom {
            sender_id: "s1".into(),
            room: "dev".into(),
            sender_name: "alice".into(),
        });
    }

    #[test]
    fn create_room_trims_and_validates() {
        assert_eq!(
            create_room("  dev ", &identity()),
            Ok(Some(Message::CreateRoom { sender_id: "s1".into(), room: "dev".into() }))
        );
        assert_eq!(create_room("   ", &identity()), Ok(None));
        assert_eq!(
            create_room("my room", &identity()),
            Err(RoomNameError::InvalidChar { ch: ' ' })
        );
    }
}
