//! Connection lifecycle.
//!
//! Transitions of [`ConnectionState`]: connecting opens `main` and switches the
//! view to the active screen; logout closes the channel and navigates away;
//! a close without logout returns the view to the awaiting screen. Both
//! endings are terminal.

use talkroom_proto::{LOGOUT_PATH, MAIN_ROOM, Message};

use crate::{AppAction, ConnectionState, Session, ViewCommand, session::views};

impl Session {
    /// The channel is open: join `main` and activate the view.
    pub fn connected(&mut self) -> Vec<AppAction> {
        if self.state != ConnectionState::AwaitingConnection {
            tracing::debug!(state = ?self.state, "ignoring duplicate connect");
            return vec![];
        }

        tracing::info!(sender_id = self.identity.sender_id(), "connected");
        self.state = ConnectionState::Active;

        let mut commands = Vec::new();
        if self.directory.add(MAIN_ROOM) {
            commands.push(ViewCommand::AddRosterEntry { room: MAIN_ROOM.to_owned() });
        }
        commands.extend(self.tabs.open_and_focus(MAIN_ROOM));
        commands.push(ViewCommand::ShowActive);
        commands.push(ViewCommand::BindCreateRoom);
        views(commands)
    }

    /// The server ended the session.
    pub fn logout(&mut self) -> Vec<AppAction> {
        self.end_session(None)
    }

    /// End the session, first sending `farewell` if this side asked for it.
    pub(crate) fn end_session(&mut self, farewell: Option<Message>) -> Vec<AppAction> {
        if self.state.is_terminal() {
            return vec![];
        }

        tracing::info!(local = farewell.is_some(), "logging out");
        self.state = ConnectionState::LoggedOut;

        let mut actions: Vec<_> = farewell.into_iter().map(AppAction::Send).collect();
        actions.push(AppAction::CloseChannel);
        actions.push(AppAction::View(ViewCommand::NavigateAway { path: LOGOUT_PATH.to_owned() }));
        actions
    }

    /// The channel closed.
    pub fn closed(&mut self) -> Vec<AppAction> {
        if self.state.is_terminal() {
            return vec![];
        }

        tracing::info!(state = ?self.state, "channel closed");
        self.state = ConnectionState::Closed;
        vec![AppAction::View(ViewCommand::ShowAwaiting)]
    }
}
