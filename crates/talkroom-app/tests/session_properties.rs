//! Property-based tests for the Session state machine.
//!
//! Events are delivered the way the runtime delivers them: server messages as
//! wire frames, user input as UI events. Invariants are checked after every
//! single event, not just at the end of a sequence.

use std::collections::HashSet;

use proptest::prelude::*;
use talkroom_app::{AppAction, AppEvent, ConnectionState, Identity, Session, ViewCommand};
use talkroom_proto::{Frame, MAIN_ROOM, Message, encode};

const ROOMS: &[&str] = &["main", "dev", "ops", "my room", "my_room"];
const INPUTS: &[&str] = &["hi", "exit", "", "exit now"];

fn room() -> impl Strategy<Value = String> {
    prop::sample::select(ROOMS).prop_map(str::to_owned)
}

fn server(message: &Message) -> AppEvent {
    match encode(message) {
        Ok(frame) => AppEvent::Frame(frame),
        Err(error) => panic!("test message must encode: {error}"),
    }
}

/// Generate server frames and user input over a small set of room names.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        3 => room().prop_map(|room| server(&Message::UserJoinedRoom { room })),
        2 => room().prop_map(|room| server(&Message::UserLeftRoom {
            sender_id: "s1".into(),
            room,
            sender_name: "alice".into(),
        })),
        2 => room().prop_map(|room| server(&Message::CreateRoom { sender_id: "s2".into(), room })),
        1 => room().prop_map(|room| server(&Message::RemoveRoom { room })),
        2 => room().prop_map(|room| server(&Message::Text {
            sender_id: "s2".into(),
            room,
            sender_name: "bob".into(),
            content: "hello".into(),
        })),
        1 => prop::collection::vec(room(), 0..4)
            .prop_map(|rooms| server(&Message::RoomsList { rooms })),
        1 => Just(AppEvent::Frame(Frame::from("{\"msgType\":\"PING\"}"))),
        1 => Just(AppEvent::Frame(Frame::from("garbage"))),
        3 => (room(), prop::sample::select(INPUTS))
            .prop_map(|(room, text)| AppEvent::SubmitInput { room, text: text.into() }),
        2 => room().prop_map(|name| AppEvent::SelectRoom { name }),
        2 => room().prop_map(|name| AppEvent::FocusTab { name }),
        1 => room().prop_map(|name| AppEvent::CreateRoom { name }),
    ]
}

/// Rare events that end the session.
fn terminal_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        Just(AppEvent::Closed),
        room().prop_map(|room| AppEvent::SubmitInput { room, text: "logout".into() }),
        Just(server(&Message::Logout {
            sender_id: "s1".into(),
            room: MAIN_ROOM.into(),
            sender_name: "alice".into(),
        })),
    ]
}

fn connected() -> Session {
    let mut session = Session::new(Identity::new("s1", "alice"));
    let _ = session.handle(AppEvent::Connected);
    session
}

/// Observable state, for comparing before and after an event.
fn observe(session: &Session) -> (ConnectionState, Vec<String>, Vec<(String, usize)>, Option<String>) {
    (
        session.state(),
        session.directory().list().to_vec(),
        session.tabs().iter().map(|tab| (tab.room().to_owned(), tab.log().len())).collect(),
        session.tabs().focused().map(str::to_owned),
    )
}

fn check_invariants(session: &Session) -> Result<(), TestCaseError> {
    let tabs = session.tabs();

    let focused = tabs.iter().filter(|tab| tab.is_focused()).count();
    prop_assert!(focused <= 1, "{focused} tabs focused");
    if !tabs.is_empty() {
        prop_assert_eq!(focused, 1, "open tabs but no focus");
    }

    prop_assert!(tabs.is_open(MAIN_ROOM), "main closed");
    prop_assert!(session.directory().contains(MAIN_ROOM), "main forgotten");

    for tab in tabs.iter() {
        prop_assert!(
            session.directory().contains(tab.room()),
            "open tab {:?} not in directory",
            tab.room()
        );
    }

    let names: HashSet<_> = session.directory().list().iter().collect();
    prop_assert_eq!(names.len(), session.directory().len(), "duplicate directory entry");

    let bindings: HashSet<_> = tabs.iter().map(|tab| tab.binding()).collect();
    prop_assert_eq!(bindings.len(), tabs.len(), "shared view binding");

    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_event(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let mut session = connected();
        check_invariants(&session)?;

        for event in events {
            let _ = session.handle(event);
            check_invariants(&session)?;
        }
    }

    #[test]
    fn prop_session_ending_is_terminal(
        before in prop::collection::vec(event_strategy(), 0..20),
        ending in terminal_strategy(),
        after in prop::collection::vec(event_strategy(), 0..20),
    ) {
        let mut session = connected();
        for event in before {
            let _ = session.handle(event);
        }

        let _ = session.handle(ending);
        prop_assert!(session.state().is_terminal());

        let frozen = observe(&session);
        for event in after {
            let actions = session.handle(event);
            prop_assert!(actions.is_empty(), "ended session acted: {actions:?}");
            prop_assert_eq!(&observe(&session), &frozen);
        }
    }

    #[test]
    fn prop_repeated_create_lists_room_once(room in room(), times in 1usize..6) {
        let mut session = connected();
        for _ in 0..times {
            let _ = session.handle(server(&Message::CreateRoom { sender_id: "s2".into(), room: room.clone() }));
        }

        let count = session.directory().list().iter().filter(|known| **known == room).count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn prop_leaving_any_room_returns_focus_to_main(room in room()) {
        let mut session = connected();
        let _ = session.handle(server(&Message::UserJoinedRoom { room: room.clone() }));
        let _ = session.handle(server(&Message::UserLeftRoom {
            sender_id: "s1".into(),
            room: room.clone(),
            sender_name: "alice".into(),
        }));

        prop_assert_eq!(session.tabs().focused(), Some(MAIN_ROOM));
        if room != MAIN_ROOM {
            prop_assert!(!session.tabs().is_open(&room));
            prop_assert!(!session.directory().contains(&room));
        }
    }

    #[test]
    fn prop_logout_is_never_sent_as_text(room in room()) {
        let mut session = connected();
        let _ = session.handle(server(&Message::UserJoinedRoom { room: room.clone() }));

        let actions = session.handle(AppEvent::SubmitInput { room, text: "logout".into() });

        let sent: Vec<_> = actions
            .iter()
            .filter_map(|action| match action {
                AppAction::Send(message) => Some(message),
                _ => None,
            })
            .collect();
        prop_assert_eq!(sent.len(), 1);
        prop_assert!(matches!(sent[0], Message::Logout { .. }), "sent {:?}, not a logout", sent[0]);
    }
}

#[test]
fn join_exit_and_echo_round_trip() {
    let mut session = connected();
    assert_eq!(session.tabs().iter().map(|tab| tab.room()).collect::<Vec<_>>(), [MAIN_ROOM]);

    let _ = session.handle(server(&Message::UserJoinedRoom { room: "dev".into() }));
    assert_eq!(session.tabs().iter().map(|tab| tab.room()).collect::<Vec<_>>(), [MAIN_ROOM, "dev"]);
    assert_eq!(session.tabs().focused(), Some("dev"));

    let actions = session.handle(AppEvent::SubmitInput { room: "dev".into(), text: "exit".into() });
    let left = Message::UserLeftRoom {
        sender_id: "s1".into(),
        room: "dev".into(),
        sender_name: "alice".into(),
    };
    assert!(actions.contains(&AppAction::Send(left.clone())));

    // the tab stays open until the server echoes the leave
    assert!(session.tabs().is_open("dev"));

    let _ = session.handle(server(&left));
    assert_eq!(session.tabs().iter().map(|tab| tab.room()).collect::<Vec<_>>(), [MAIN_ROOM]);
    assert_eq!(session.tabs().focused(), Some(MAIN_ROOM));
}

#[test]
fn exit_in_main_sends_nothing() {
    let mut session = connected();
    let actions =
        session.handle(AppEvent::SubmitInput { room: MAIN_ROOM.into(), text: "exit".into() });

    assert!(actions.iter().all(|action| !matches!(action, AppAction::Send(_))));
    assert_eq!(session.tabs().focused(), Some(MAIN_ROOM));
}

#[test]
fn snapshots_merge_rather_than_replace() {
    let mut session = connected();
    let _ = session.handle(server(&Message::RoomsList { rooms: vec!["a".into(), "b".into()] }));
    let actions = session.handle(server(&Message::RoomsList { rooms: vec!["a".into(), "c".into()] }));

    assert_eq!(session.directory().list(), [MAIN_ROOM, "a", "b", "c"]);
    assert_eq!(actions, vec![AppAction::View(ViewCommand::RebuildRoster {
        rooms: vec![MAIN_ROOM.into(), "a".into(), "b".into(), "c".into()],
    })]);
}

#[test]
fn roster_selection_opens_tab_without_server_traffic() {
    let mut session = connected();
    let _ = session.handle(server(&Message::CreateRoom { sender_id: "s2".into(), room: "dev".into() }));

    let actions = session.handle(AppEvent::SelectRoom { name: "dev".into() });

    assert!(actions.iter().all(|action| matches!(action, AppAction::View(_))));
    assert_eq!(session.tabs().focused(), Some("dev"));
}

#[test]
fn text_for_unopened_room_creates_no_log() {
    let mut session = connected();
    let actions = session.handle(server(&Message::Text {
        sender_id: "s2".into(),
        room: "ghost".into(),
        sender_name: "bob".into(),
        content: "boo".into(),
    }));

    assert!(actions.is_empty());
    assert!(session.tabs().get("ghost").is_none());
}
