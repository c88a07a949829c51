//! Instructions for the view layer.
//!
//! The core never touches a screen. It describes every visible change as a
//! [`ViewCommand`] and the driver applies it. Panels are addressed by the
//! [`ViewBinding`] allocated when their tab opened, never by room name, so two
//! rooms can never end up sharing a panel.

use thiserror::Error;

use crate::ViewBinding;

/// One change for the view layer to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Show the awaiting-connection screen.
    ShowAwaiting,

    /// Replace the awaiting-connection screen with the room panels.
    ShowActive,

    /// Route the room-creation control to [`crate::AppEvent::CreateRoom`].
    BindCreateRoom,

    /// Create a panel (tab, input line and conversation area) for a room.
    CreatePanel {
        /// Handle for every later command on this panel.
        binding: ViewBinding,
        /// Room shown in the panel.
        room: String,
    },

    /// Make a panel visible and mark its tab active.
    ShowPanel {
        /// Target panel.
        binding: ViewBinding,
    },

    /// Hide a panel and mark its tab inactive.
    HidePanel {
        /// Target panel.
        binding: ViewBinding,
    },

    /// Move input focus to a panel's input line.
    FocusInput {
        /// Target panel.
        binding: ViewBinding,
    },

    /// Remove a panel and everything it shows.
    DestroyPanel {
        /// Target panel.
        binding: ViewBinding,
    },

    /// Add one line to a panel's conversation area.
    AppendLine {
        /// Target panel.
        binding: ViewBinding,
        /// Display name of the poster.
        sender_name: String,
        /// Line content.
        content: String,
    },

    /// Empty a panel's input line.
    ClearInput {
        /// Target panel.
        binding: ViewBinding,
    },

    /// Empty the room-creation control.
    ClearCreateRoomInput,

    /// Clear the roster display and redraw it from these names.
    RebuildRoster {
        /// Every known room, in display order.
        rooms: Vec<String>,
    },

    /// Append one roster entry.
    AddRosterEntry {
        /// Room to list.
        room: String,
    },

    /// Remove one roster entry.
    RemoveRosterEntry {
        /// Room to unlist.
        room: String,
    },

    /// Show a transient notice to the user.
    Notice {
        /// Notice text.
        text: String,
    },

    /// Leave the session for good and go to `path` on the server.
    NavigateAway {
        /// Server path to visit.
        path: String,
    },
}

/// Errors a view layer reports back while applying a [`ViewCommand`].
///
/// The runtime logs and skips these; a missing panel is never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The command names a panel the view layer does not have.
    #[error("no panel for {0}")]
    MissingViewBinding(ViewBinding),
}
