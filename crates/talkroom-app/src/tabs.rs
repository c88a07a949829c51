//! Open rooms and focus.
//!
//! [`TabManager`] owns the rooms the user currently has open. Each open room
//! is a [`Tab`]: a view binding, a conversation log and a focus flag. Every
//! operation returns the [`ViewCommand`]s that bring the view layer in line
//! with the new state.
//!
//! # Invariants
//!
//! - Single Focus: at most one tab is focused. Once a tab has been focused,
//!   exactly one is focused for as long as the set is non-empty.
//!
//! - Permanent Main: [`MAIN_ROOM`] can be opened but never closed.
//!
//! - Injective Bindings: every tab gets a fresh [`ViewBinding`] from a counter
//!   that never repeats, so distinct rooms never share a panel.

use std::fmt;

use talkroom_proto::MAIN_ROOM;

use crate::{AppError, ViewCommand};

/// Opaque handle tying a tab to its panel in the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewBinding(u64);

impl ViewBinding {
    /// Raw handle value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// One line of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Display name of the poster.
    pub sender_name: String,
    /// Line content.
    pub content: String,
}

/// Append-only history of an open room. Dropped with its tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    lines: Vec<LogLine>,
}

impl ConversationLog {
    fn push(&mut self, sender_name: String, content: String) {
        self.lines.push(LogLine { sender_name, content });
    }

    /// Lines in arrival order.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been said.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An open room.
#[derive(Debug, Clone)]
pub struct Tab {
    room: String,
    binding: ViewBinding,
    log: ConversationLog,
    focused: bool,
}

impl Tab {
    /// Room name.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Handle of this tab's panel.
    pub fn binding(&self) -> ViewBinding {
        self.binding
    }

    /// Conversation so far.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Whether this is the focused tab.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Rooms open as local panels, in opening order.
#[derive(Debug, Clone, Default)]
pub struct TabManager {
    tabs: Vec<Tab>,
    next_binding: u64,
}

impl TabManager {
    /// Create an empty tab set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a room has an open tab.
    pub fn is_open(&self, room: &str) -> bool {
        self.position(room).is_some()
    }

    /// Open a tab for `room` if there is none.
    ///
    /// Allocates a binding and an empty log and asks the view layer for a
    /// panel. Does not focus the new tab; callers follow up with
    /// [`Self::focus`]. No commands if the room is already open.
    pub fn open(&mut self, room: &str) -> Vec<ViewCommand> {
        if self.is_open(room) {
            return vec![];
        }

        let binding = ViewBinding(self.next_binding);
        self.next_binding += 1;
        self.tabs.push(Tab {
            room: room.to_owned(),
            binding,
            log: ConversationLog::default(),
            focused: false,
        });

        tracing::debug!(room, %binding, "tab opened");
        vec![ViewCommand::CreatePanel { binding, room: room.to_owned() }]
    }

    /// Focus the tab for `room`, hiding every other panel.
    ///
    /// # Errors
    ///
    /// - `AppError::TabNotFound` if `room` has no open tab.
    pub fn focus(&mut self, room: &str) -> Result<Vec<ViewCommand>, AppError> {
        let Some(target) = self.position(room) else {
            return Err(AppError::TabNotFound(room.to_owned()));
        };

        let mut commands = Vec::with_capacity(self.tabs.len() + 1);
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.focused = index == target;
            if !tab.focused {
                commands.push(ViewCommand::HidePanel { binding: tab.binding });
            }
        }

        let binding = self.tabs[target].binding;
        commands.push(ViewCommand::ShowPanel { binding });
        commands.push(ViewCommand::FocusInput { binding });
        Ok(commands)
    }

    /// Open `room` if needed, then focus it.
    pub fn open_and_focus(&mut self, room: &str) -> Vec<ViewCommand> {
        let mut commands = self.open(room);
        match self.focus(room) {
            Ok(focus) => commands.extend(focus),
            Err(error) => tracing::warn!(%error, "focus failed right after open"),
        }
        commands
    }

    /// Close the tab for `room` and return focus to [`MAIN_ROOM`].
    ///
    /// Closing `main` is a no-op. Focus returns to `main` even when the closed
    /// tab was not the focused one, or was not open at all.
    pub fn close(&mut self, room: &str) -> Vec<ViewCommand> {
        if room == MAIN_ROOM {
            tracing::debug!("ignoring close of main tab");
            return vec![];
        }

        let mut commands = Vec::new();
        if let Some(index) = self.position(room) {
            let tab = self.tabs.remove(index);
            tracing::debug!(room, binding = %tab.binding, lines = tab.log.len(), "tab closed");
            commands.push(ViewCommand::DestroyPanel { binding: tab.binding });
        }

        match self.focus(MAIN_ROOM) {
            Ok(focus) => commands.extend(focus),
            Err(error) => tracing::warn!(%error, "cannot return focus to main"),
        }
        commands
    }

    /// Append a line to the conversation of `room`.
    ///
    /// # Errors
    ///
    /// - `AppError::TabNotFound` if `room` has no open tab. Nothing is
    ///   recorded; no log is created for it.
    pub fn append(
        &mut self,
        room: &str,
        sender_name: &str,
        content: &str,
    ) -> Result<Vec<ViewCommand>, AppError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|tab| tab.room == room)
            .ok_or_else(|| AppError::TabNotFound(room.to_owned()))?;

        tab.log.push(sender_name.to_owned(), content.to_owned());
        Ok(vec![ViewCommand::AppendLine {
            binding: tab.binding,
            sender_name: sender_name.to_owned(),
            content: content.to_owned(),
        }])
    }

    /// Tab for `room`, if open.
    pub fn get(&self, room: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.room == room)
    }

    /// Binding of the panel for `room`, if open.
    pub fn binding(&self, room: &str) -> Option<ViewBinding> {
        self.get(room).map(Tab::binding)
    }

    /// Room of the focused tab. `None` if no tab is focused.
    pub fn focused(&self) -> Option<&str> {
        self.tabs.iter().find(|tab| tab.focused).map(Tab::room)
    }

    /// Open tabs in opening order.
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    /// Number of open tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether no tab is open.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn position(&self, room: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.room == room)
    }
}
