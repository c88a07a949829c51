//! Per-connection session controller.
//!
//! This module defines [`Session`], the explicit state object that owns the
//! room directory, the tab set and the connection state for one connection.
//! It is a pure state machine: it consumes [`AppEvent`]s and produces
//! [`AppAction`]s for the runtime to execute. No I/O happens here.
//!
//! Inbound messages are routed in the `dispatch` module, connection lifecycle
//! transitions live in `lifecycle`, and user input is handled below.

use crate::{
    AppAction, AppEvent, ConnectionState, Identity, RoomDirectory, TabManager, ViewCommand,
    command::{self, Command},
};

/// Room-lifecycle state machine for one connection.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) identity: Identity,
    pub(crate) directory: RoomDirectory,
    pub(crate) tabs: TabManager,
    pub(crate) state: ConnectionState,
}

impl Session {
    /// Create a session awaiting its connection.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            directory: RoomDirectory::new(),
            tabs: TabManager::new(),
            state: ConnectionState::AwaitingConnection,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Connected => self.connected(),
            AppEvent::Frame(frame) => self.handle_frame(&frame),
            AppEvent::Closed => self.closed(),
            AppEvent::Quit => vec![AppAction::Quit],
            AppEvent::SubmitInput { room, text } => self.guarded(|s| s.submit_input(&room, &text)),
            AppEvent::CreateRoom { name } => self.guarded(|s| s.submit_create_room(&name)),
            AppEvent::SelectRoom { name } => self.guarded(|s| s.select_room(&name)),
            AppEvent::FocusTab { name } => self.guarded(|s| s.focus_tab(&name)),
        }
    }

    /// Run a user-input handler only while the session is active.
    fn guarded(&mut self, handler: impl FnOnce(&mut Self) -> Vec<AppAction>) -> Vec<AppAction> {
        if self.state == ConnectionState::Active {
            handler(self)
        } else {
            tracing::debug!(state = ?self.state, "ignoring input outside an active session");
            vec![]
        }
    }

    /// Interpret a line submitted in `room` and clear that room's input.
    fn submit_input(&mut self, room: &str, text: &str) -> Vec<AppAction> {
        let mut actions = Vec::new();
        if let Some(binding) = self.tabs.binding(room) {
            actions.push(AppAction::View(ViewCommand::ClearInput { binding }));
        }

        match command::interpret(room, text) {
            None => {},
            Some(Command::Logout) => {
                let message = Command::Logout.into_message(room, &self.identity);
                actions.extend(self.end_session(Some(message)));
            },
            Some(command) => {
                actions.push(AppAction::Send(command.into_message(room, &self.identity)));
            },
        }

        actions
    }

    /// Request a new room from the room-creation control.
    fn submit_create_room(&mut self, name: &str) -> Vec<AppAction> {
        let mut actions = match command::create_room(name, &self.identity) {
            Ok(Some(message)) => vec![AppAction::Send(message)],
            Ok(None) => vec![],
            Err(error) => {
                tracing::debug!(name, %error, "rejected room name");
                vec![AppAction::View(ViewCommand::Notice {
                    text: format!("Cannot create room: {error}"),
                })]
            },
        };
        actions.push(AppAction::View(ViewCommand::ClearCreateRoomInput));
        actions
    }

    /// Open a roster room as a tab if needed, then focus it.
    fn select_room(&mut self, name: &str) -> Vec<AppAction> {
        if !self.directory.contains(name) {
            tracing::warn!(room = name, "selected room is not in the directory");
            return vec![];
        }
        views(self.tabs.open_and_focus(name))
    }

    /// Focus an already open tab.
    fn focus_tab(&mut self, name: &str) -> Vec<AppAction> {
        match self.tabs.focus(name) {
            Ok(commands) => views(commands),
            Err(error) => {
                tracing::warn!(%error, "tab click for a closed tab");
                vec![]
            },
        }
    }

    /// Session identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Known rooms.
    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Open rooms.
    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    /// Connection lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }
}

/// Wrap view commands as actions.
pub(crate) fn views(commands: impl IntoIterator<Item = ViewCommand>) -> Vec<AppAction> {
    commands.into_iter().map(AppAction::View).collect()
}
