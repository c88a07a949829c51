//! Terminal view model.
//!
//! [`Screen`] is everything the terminal shows: the panels the session asked
//! for, the roster, the room-creation line and where keyboard focus is. It
//! changes only through [`ViewCommand`]s from the session and through local
//! editing keys, and turns the keys that mean something to the session into
//! [`AppEvent`]s.

use talkroom_app::{AppEvent, ViewBinding, ViewCommand, ViewError};

use crate::{InputLine, KeyInput};

/// Which screen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for the channel.
    Awaiting,
    /// Room panels.
    Active,
}

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The input line of a panel.
    Panel(ViewBinding),
    /// The room-creation line.
    CreateRoom,
}

/// One room panel: tab and input line.
///
/// The conversation itself stays in the session's log for this binding.
#[derive(Debug, Clone)]
pub struct Panel {
    binding: ViewBinding,
    room: String,
    input: InputLine,
    visible: bool,
}

impl Panel {
    /// Room shown in this panel.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Handle the session addresses this panel by.
    pub fn binding(&self) -> ViewBinding {
        self.binding
    }

    /// Input line.
    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Whether this is the panel on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Everything on the terminal.
#[derive(Debug, Clone)]
pub struct Screen {
    mode: Mode,
    panels: Vec<Panel>,
    roster: Vec<String>,
    roster_cursor: usize,
    create_room: InputLine,
    create_room_bound: bool,
    focus: Option<Focus>,
    notice: Option<String>,
    leaving_for: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Start on the awaiting-connection screen.
    pub fn new() -> Self {
        Self {
            mode: Mode::Awaiting,
            panels: Vec::new(),
            roster: Vec::new(),
            roster_cursor: 0,
            create_room: InputLine::new(),
            create_room_bound: false,
            focus: None,
            notice: None,
            leaving_for: None,
        }
    }

    /// Apply one change from the session.
    ///
    /// # Errors
    ///
    /// - `ViewError::MissingViewBinding` if the command names a panel this
    ///   screen never created or already destroyed. The screen is unchanged.
    pub fn apply(&mut self, command: &ViewCommand) -> Result<(), ViewError> {
        match command {
            ViewCommand::ShowAwaiting => self.mode = Mode::Awaiting,
            ViewCommand::ShowActive => self.mode = Mode::Active,
            ViewCommand::BindCreateRoom => self.create_room_bound = true,
            ViewCommand::CreatePanel { binding, room } => self.panels.push(Panel {
                binding: *binding,
                room: room.clone(),
                input: InputLine::new(),
                visible: false,
            }),
            ViewCommand::ShowPanel { binding } => self.panel_mut(*binding)?.visible = true,
            ViewCommand::HidePanel { binding } => self.panel_mut(*binding)?.visible = false,
            ViewCommand::FocusInput { binding } => {
                self.index_of(*binding)?;
                self.focus = Some(Focus::Panel(*binding));
            },
            ViewCommand::DestroyPanel { binding } => {
                let index = self.index_of(*binding)?;
                self.panels.remove(index);
                if self.focus == Some(Focus::Panel(*binding)) {
                    self.focus = None;
                }
            },
            // the line is already in the session log, drawn from there
            ViewCommand::AppendLine { binding, .. } => {
                self.index_of(*binding)?;
            },
            ViewCommand::ClearInput { binding } => self.panel_mut(*binding)?.input.clear(),
            ViewCommand::ClearCreateRoomInput => self.create_room.clear(),
            ViewCommand::RebuildRoster { rooms } => {
                self.roster.clone_from(rooms);
                self.clamp_roster_cursor();
            },
            ViewCommand::AddRosterEntry { room } => self.roster.push(room.clone()),
            ViewCommand::RemoveRosterEntry { room } => {
                self.roster.retain(|listed| listed != room);
                self.clamp_roster_cursor();
            },
            ViewCommand::Notice { text } => self.notice = Some(text.clone()),
            ViewCommand::NavigateAway { path } => self.leaving_for = Some(path.clone()),
        }
        Ok(())
    }

    /// Handle a key press.
    ///
    /// Editing keys change the focused line locally. Keys that mean
    /// something to the session come back as an event.
    pub fn handle_key(&mut self, key: KeyInput) -> Option<AppEvent> {
        if key == KeyInput::Esc {
            return Some(AppEvent::Quit);
        }
        if self.mode != Mode::Active {
            return None;
        }

        match key {
            KeyInput::Enter => self.submit(),
            KeyInput::Tab => self.next_tab(),
            KeyInput::NewRoom => {
                if self.create_room_bound {
                    self.focus = Some(Focus::CreateRoom);
                }
                None
            },
            KeyInput::Up => {
                self.roster_cursor = self.roster_cursor.saturating_sub(1);
                None
            },
            KeyInput::Down => {
                self.roster_cursor += 1;
                self.clamp_roster_cursor();
                None
            },
            KeyInput::OpenRoom => self
                .roster
                .get(self.roster_cursor)
                .map(|name| AppEvent::SelectRoom { name: name.clone() }),
            editing => {
                self.notice = None;
                if let Some(line) = self.focused_line_mut() {
                    line.edit(editing);
                }
                None
            },
        }
    }

    fn submit(&self) -> Option<AppEvent> {
        match self.focus? {
            Focus::CreateRoom => {
                Some(AppEvent::CreateRoom { name: self.create_room.buffer().to_owned() })
            },
            Focus::Panel(binding) => {
                let panel = self.panels.iter().find(|panel| panel.binding == binding)?;
                Some(AppEvent::SubmitInput {
                    room: panel.room.clone(),
                    text: panel.input.buffer().to_owned(),
                })
            },
        }
    }

    /// Ask the session to focus the tab after the visible one.
    fn next_tab(&self) -> Option<AppEvent> {
        if self.panels.is_empty() {
            return None;
        }
        let current = self.panels.iter().position(Panel::is_visible).unwrap_or(0);
        let next = (current + 1) % self.panels.len();
        self.panels.get(next).map(|panel| AppEvent::FocusTab { name: panel.room.clone() })
    }

    fn focused_line_mut(&mut self) -> Option<&mut InputLine> {
        match self.focus? {
            Focus::CreateRoom => Some(&mut self.create_room),
            Focus::Panel(binding) => self
                .panels
                .iter_mut()
                .find(|panel| panel.binding == binding)
                .map(|panel| &mut panel.input),
        }
    }

    fn index_of(&self, binding: ViewBinding) -> Result<usize, ViewError> {
        self.panels
            .iter()
            .position(|panel| panel.binding == binding)
            .ok_or(ViewError::MissingViewBinding(binding))
    }

    fn panel_mut(&mut self, binding: ViewBinding) -> Result<&mut Panel, ViewError> {
        let index = self.index_of(binding)?;
        Ok(&mut self.panels[index])
    }

    fn clamp_roster_cursor(&mut self) {
        self.roster_cursor = self.roster_cursor.min(self.roster.len().saturating_sub(1));
    }

    /// Which screen is up.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Panels in tab order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The panel on screen, if any.
    pub fn visible_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.visible)
    }

    /// Roster entries in display order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Highlighted roster entry.
    pub fn roster_cursor(&self) -> usize {
        self.roster_cursor
    }

    /// Room-creation line.
    pub fn create_room(&self) -> &InputLine {
        &self.create_room
    }

    /// Keyboard focus.
    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Latest notice, cleared by the next edit.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Server path the session is leaving for, once logged out.
    pub fn leaving_for(&self) -> Option<&str> {
        self.leaving_for.as_deref()
    }
}
