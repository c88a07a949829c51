//! Codec tests against the wire layout the server speaks.
//!
//! Inline snapshots pin the exact JSON emitted for each outbound kind; the
//! property test checks that any message with its required fields present
//! survives the trip through a frame.

use proptest::prelude::*;
use talkroom_proto::{Decoded, Frame, Message, MessageKind, decode, encode};

fn encoded(message: &Message) -> String {
    encode(message).map(Frame::into_string).unwrap_or_else(|e| format!("<encode failed: {e}>"))
}

#[test]
fn outbound_create_room_layout() {
    let message = Message::CreateRoom { sender_id: "7f3a".into(), room: "dev".into() };
    insta::assert_snapshot!(encoded(&message), @r#"{"msgType":"CREATE_ROOM","senderId":"7f3a","room":"dev"}"#);
}

#[test]
fn outbound_text_layout() {
    let message = Message::Text {
        sender_id: "7f3a".into(),
        room: "dev".into(),
        sender_name: "alice".into(),
        content: "hello \"there\"".into(),
    };
    insta::assert_snapshot!(encoded(&message), @r#"{"msgType":"TEXT_MSG","senderId":"7f3a","senderName":"alice","room":"dev","content":"hello \"there\""}"#);
}

#[test]
fn outbound_leave_and_logout_layout() {
    let leave = Message::UserLeftRoom {
        sender_id: "7f3a".into(),
        room: "dev".into(),
        sender_name: "alice".into(),
    };
    insta::assert_snapshot!(encoded(&leave), @r#"{"msgType":"USER_LEFT_ROOM","senderId":"7f3a","senderName":"alice","room":"dev"}"#);

    let logout = Message::Logout {
        sender_id: "7f3a".into(),
        room: "main".into(),
        sender_name: "alice".into(),
    };
    insta::assert_snapshot!(encoded(&logout), @r#"{"msgType":"LOGOUT_USER","senderId":"7f3a","senderName":"alice","room":"main"}"#);
}

#[test]
fn inbound_server_frames_decode() {
    // Frames as the server emits them: every field present, unused ones zeroed
    let cases = [
        (
            r#"{"msgType":"ROOMS_LIST","senderId":"system","senderName":"system","rooms":["main","dev"],"room":"","content":""}"#,
            Message::RoomsList { rooms: vec!["main".into(), "dev".into()] },
        ),
        (
            r#"{"msgType":"CREATE_ROOM","senderId":"system","senderName":"system","rooms":null,"room":"dev","content":""}"#,
            Message::CreateRoom { sender_id: "system".into(), room: "dev".into() },
        ),
        (
            r#"{"msgType":"REMOVE_ROOM","senderId":"system","senderName":"system","rooms":null,"room":"dev","content":""}"#,
            Message::RemoveRoom { room: "dev".into() },
        ),
        (
            r#"{"msgType":"ERROR","senderId":"system","senderName":"system","rooms":null,"room":"","content":"Invalid room name"}"#,
            Message::ServerError { content: "Invalid room name".into() },
        ),
    ];

    for (text, expected) in cases {
        assert_eq!(decode(&Frame::from(text)), Ok(Decoded::Message(expected)), "frame: {text}");
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,16}"
}

fn message_strategy() -> impl Strategy<Value = Message> {
    prop_oneof![
        (name_strategy(), name_strategy())
            .prop_map(|(sender_id, room)| Message::CreateRoom { sender_id, room }),
        (name_strategy(), name_strategy(), ".{0,16}", ".{0,64}").prop_map(
            |(sender_id, room, sender_name, content)| Message::Text {
                sender_id,
                room,
                sender_name,
                content
            }
        ),
        (name_strategy(), name_strategy(), ".{0,16}").prop_map(
            |(sender_id, room, sender_name)| Message::UserLeftRoom { sender_id, room, sender_name }
        ),
        (name_strategy(), name_strategy(), ".{0,16}")
            .prop_map(|(sender_id, room, sender_name)| Message::Logout { sender_id, room, sender_name }),
        prop::collection::vec(name_strategy(), 0..6).prop_map(|rooms| Message::RoomsList { rooms }),
        name_strategy().prop_map(|room| Message::RemoveRoom { room }),
        name_strategy().prop_map(|room| Message::UserJoinedRoom { room }),
        ".{0,32}".prop_map(|content| Message::ServerError { content }),
    ]
}

proptest! {
    #[test]
    fn prop_complete_messages_survive_a_frame(message in message_strategy()) {
        let frame = encode(&message);
        prop_assert!(frame.is_ok());

        if let Ok(frame) = frame {
            prop_assert_eq!(decode(&frame), Ok(Decoded::Message(message)));
        }
    }

    #[test]
    fn prop_unknown_kinds_never_error(kind in "[A-Z_]{1,20}") {
        prop_assume!(MessageKind::from_wire(&kind).is_none());

        let frame = Frame::new(format!(r#"{{"msgType":"{kind}","room":"dev"}}"#));
        prop_assert_eq!(decode(&frame), Ok(Decoded::UnknownKind(kind)));
    }
}
