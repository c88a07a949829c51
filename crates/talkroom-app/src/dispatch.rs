//! Inbound message routing.
//!
//! Every frame from the server is decoded once and routed by kind to the
//! directory, the tab set or the connection lifecycle. The match is
//! exhaustive: adding a [`Message`] variant fails to compile until it is
//! routed here.
//!
//! Nothing here fails. Malformed frames, unknown kinds and messages for rooms
//! without a tab are logged and dropped without touching state.

use talkroom_proto::{Decoded, Frame, MAIN_ROOM, Message, decode};

use crate::{AppAction, ConnectionState, Session, ViewCommand, session::views};

impl Session {
    /// Decode `frame` and dispatch it.
    pub fn handle_frame(&mut self, frame: &Frame) -> Vec<AppAction> {
        match decode(frame) {
            Ok(decoded) => self.dispatch(decoded),
            Err(error) => {
                tracing::warn!(%error, frame = frame.as_str(), "dropping undecodable frame");
                vec![]
            },
        }
    }

    /// Route one decoded server message.
    pub fn dispatch(&mut self, decoded: Decoded) -> Vec<AppAction> {
        if self.state != ConnectionState::Active {
            tracing::debug!(state = ?self.state, ?decoded, "dropping message outside an active session");
            return vec![];
        }

        let message = match decoded {
            Decoded::Message(message) => message,
            Decoded::UnknownKind(kind) => {
                tracing::warn!(%kind, "dropping message of unknown kind");
                return vec![];
            },
        };

        tracing::debug!(kind = %message.kind(), room = ?message.room(), "dispatching");

        match message {
            Message::RoomsList { rooms } => self.on_rooms_list(&rooms),
            Message::CreateRoom { room, .. } => self.on_room_created(&room),
            Message::RemoveRoom { room } => self.on_room_removed(&room),
            Message::UserJoinedRoom { room } => self.on_joined(&room),
            Message::UserLeftRoom { room, .. } => self.on_left(&room),
            Message::Text { room, sender_name, content, .. } => {
                self.on_text(&room, &sender_name, &content)
            },
            Message::Logout { .. } => self.logout(),
            Message::ServerError { content } => {
                tracing::warn!(%content, "server reported an error");
                vec![AppAction::View(ViewCommand::Notice { text: content })]
            },
        }
    }

    fn on_rooms_list(&mut self, rooms: &[String]) -> Vec<AppAction> {
        let added = self.directory.replace_all(rooms);
        tracing::debug!(received = rooms.len(), added, "roster snapshot merged");
        views([ViewCommand::RebuildRoster { rooms: self.directory.list().to_vec() }])
    }

    fn on_room_created(&mut self, room: &str) -> Vec<AppAction> {
        if self.directory.add(room) {
            views([ViewCommand::AddRosterEntry { room: room.to_owned() }])
        } else {
            vec![]
        }
    }

    fn on_room_removed(&mut self, room: &str) -> Vec<AppAction> {
        if room == MAIN_ROOM {
            tracing::warn!("ignoring removal of main room");
            return vec![];
        }

        // A removed room cannot stay open: every tab must name a known room.
        let mut commands = if self.tabs.is_open(room) { self.tabs.close(room) } else { Vec::new() };
        if self.directory.remove(room) {
            commands.push(ViewCommand::RemoveRosterEntry { room: room.to_owned() });
        }
        views(commands)
    }

    fn on_joined(&mut self, room: &str) -> Vec<AppAction> {
        let mut commands = Vec::new();
        if self.directory.add(room) {
            commands.push(ViewCommand::AddRosterEntry { room: room.to_owned() });
        }
        commands.extend(self.tabs.open_and_focus(room));
        views(commands)
    }

    fn on_left(&mut self, room: &str) -> Vec<AppAction> {
        if room == MAIN_ROOM {
            tracing::debug!("ignoring leave of main room");
            return vec![];
        }

        let mut commands = self.tabs.close(room);
        if self.directory.remove(room) {
            commands.push(ViewCommand::RemoveRosterEntry { room: room.to_owned() });
        }
        views(commands)
    }

    fn on_text(&mut self, room: &str, sender_name: &str, content: &str) -> Vec<AppAction> {
        match self.tabs.append(room, sender_name, content) {
            Ok(commands) => views(commands),
            Err(error) => {
                tracing::warn!(%error, sender_name, "dropping text for a room without a tab");
                vec![]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppEvent, Identity};

    fn active_session() -> Session {
        let mut session = Session::new(Identity::new("s1", "alice"));
        let _ = session.handle(AppEvent::Connected);
        session
    }

    fn joined(room: &str) -> Decoded {
        Decoded::Message(Message::UserJoinedRoom { room: room.into() })
    }

    fn left(room: &str) -> Decoded {
        Decoded::Message(Message::UserLeftRoom {
            sender_id: "s1".into(),
            room: room.into(),
            sender_name: "alice".into(),
        })
    }

    fn text(room: &str, content: &str) -> Decoded {
        Decoded::Message(Message::Text {
            sender_id: "s2".into(),
            room: room.into(),
            sender_name: "bob".into(),
            content: content.into(),
        })
    }

    #[test]
    fn messages_before_connect_are_dropped() {
        let mut session = Session::new(Identity::new("s1", "alice"));
        assert!(session.dispatch(joined("dev")).is_empty());
        assert!(session.tabs().is_empty());
    }

    #[test]
    fn rooms_list_rebuilds_roster_from_directory() {
        let mut session = active_session();
        let actions = session.dispatch(Decoded::Message(Message::RoomsList {
            rooms: vec!["main".into(), "dev".into()],
        }));

        assert_eq!(actions, vec![AppAction::View(ViewCommand::RebuildRoster {
            rooms: vec!["main".into(), "dev".into()],
        })]);
    }

    #[test]
    fn repeated_create_is_listed_once() {
        let mut session = active_session();
        let created = || {
            Decoded::Message(Message::CreateRoom { sender_id: "s2".into(), room: "dev".into() })
        };

        assert_eq!(session.dispatch(created()).len(), 1);
        assert!(session.dispatch(created()).is_empty());
        assert_eq!(session.directory().list(), ["main", "dev"]);
    }

    #[test]
    fn join_opens_and_focuses() {
        let mut session = active_session();
        let _ = session.dispatch(joined("dev"));

        assert!(session.tabs().is_open("dev"));
        assert!(session.directory().contains("dev"));
        assert_eq!(session.tabs().focused(), Some("dev"));
    }

    #[test]
    fn leave_closes_and_forgets() {
        let mut session = active_session();
        let _ = session.dispatch(joined("dev"));
        let _ = session.dispatch(left("dev"));

        assert!(!session.tabs().is_open("dev"));
        assert!(!session.directory().contains("dev"));
        assert_eq!(session.tabs().focused(), Some(MAIN_ROOM));
    }

    #[test]
    fn leaving_main_changes_nothing() {
        let mut session = active_session();
        assert!(session.dispatch(left(MAIN_ROOM)).is_empty());
        assert!(session.directory().contains(MAIN_ROOM));
        assert_eq!(session.tabs().focused(), Some(MAIN_ROOM));
    }

    #[test]
    fn removing_open_room_closes_its_tab() {
        let mut session = active_session();
        let _ = session.dispatch(joined("dev"));

        let removed = Message::RemoveRoom { room: "dev".into() };
        let actions = session.dispatch(Decoded::Message(removed));

        assert!(matches!(actions.first(), Some(AppAction::View(ViewCommand::DestroyPanel { .. }))));
        assert!(matches!(
            actions.last(),
            Some(AppAction::View(ViewCommand::RemoveRosterEntry { room })) if room == "dev"
        ));
        assert!(!session.tabs().is_open("dev"));
    }

    #[test]
    fn text_without_tab_is_dropped() {
        let mut session = active_session();
        assert!(session.dispatch(text("ghost", "boo")).is_empty());
        assert!(session.tabs().get("ghost").is_none());
    }

    #[test]
    fn text_lands_in_room_log() {
        let mut session = active_session();
        let actions = session.dispatch(text(MAIN_ROOM, "hello"));

        assert!(matches!(actions.as_slice(), [AppAction::View(ViewCommand::AppendLine { .. })]));
        assert_eq!(session.tabs().get(MAIN_ROOM).map(|tab| tab.log().len()), Some(1));
    }

    #[test]
    fn server_error_becomes_notice() {
        let mut session = active_session();
        let actions = session.dispatch(Decoded::Message(Message::ServerError {
            content: "room exists".into(),
        }));

        assert_eq!(actions, vec![AppAction::View(ViewCommand::Notice {
            text: "room exists".into()
        })]);
    }

    #[test]
    fn unknown_kind_is_dropped() {
        let mut session = active_session();
        assert!(session.dispatch(Decoded::UnknownKind("PING".into())).is_empty());
    }

    #[test]
    fn malformed_frame_is_dropped() {
        let mut session = active_session();
        assert!(session.handle_frame(&Frame::from("{not json")).is_empty());
        assert_eq!(session.state(), ConnectionState::Active);
    }

    #[test]
    fn dispatch_is_inert_after_logout() {
        let mut session = active_session();
        let _ = session.dispatch(Decoded::Message(Message::Logout {
            sender_id: "s1".into(),
            room: MAIN_ROOM.into(),
            sender_name: "alice".into(),
        }));

        assert_eq!(session.state(), ConnectionState::LoggedOut);
        assert!(session.dispatch(joined("dev")).is_empty());
        assert!(!session.tabs().is_open("dev"));
    }
}
