//! UI rendering
//!
//! Rendering functions that turn the [`Screen`] and [`Session`] into terminal
//! output using ratatui widgets. All functions are pure (no I/O).

mod awaiting;
mod chat;
mod input;
mod rooms;
mod status;
mod tabs;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use talkroom_app::{ConversationLog, Session, Tab};

use crate::{Focus, Mode, Panel, Screen};

/// Render the entire UI.
pub fn render(frame: &mut Frame, session: &Session, screen: &Screen) {
    match screen.mode() {
        Mode::Awaiting => awaiting::render(frame, session, frame.area()),
        Mode::Active => render_active(frame, session, screen),
    }
}

/// Render the room screen: tab bar, roster and chat, input line, status.
fn render_active(frame: &mut Frame, session: &Session, screen: &Screen) {
    const TABS_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [tabs_area, main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    tabs::render(frame, screen, *tabs_area);
    render_main_area(frame, session, screen, *main_area);

    if let Some(panel) = screen.visible_panel() {
        let focused = matches!(screen.focus(), Some(Focus::Panel(b)) if b == panel.binding());
        let title = format!(" #{} ", panel.room());
        input::render(frame, &title, panel.input(), focused, *input_area);
    }

    status::render(frame, session, screen, *status_area);
}

/// Render the main area (roster sidebar + chat).
fn render_main_area(frame: &mut Frame, session: &Session, screen: &Screen, area: Rect) {
    const ROOM_SIDEBAR_WIDTH: u16 = 22;
    const CHAT_AREA_MIN_WIDTH: u16 = 20;
    const CREATE_ROOM_HEIGHT: u16 = 3;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(ROOM_SIDEBAR_WIDTH), Constraint::Min(CHAT_AREA_MIN_WIDTH)])
        .split(area);

    let [sidebar_area, chat_area] = chunks.as_ref() else {
        return;
    };

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(CREATE_ROOM_HEIGHT)])
        .split(*sidebar_area);

    let [rooms_area, create_area] = sidebar.as_ref() else {
        return;
    };

    rooms::render(frame, screen, *rooms_area);
    input::render(
        frame,
        " New room (^N) ",
        screen.create_room(),
        screen.focus() == Some(Focus::CreateRoom),
        *create_area,
    );
    let panel = screen.visible_panel();
    chat::render(frame, panel, panel.and_then(|panel| conversation(session, panel)), *chat_area);
}

/// Session log behind a panel.
fn conversation<'a>(session: &'a Session, panel: &Panel) -> Option<&'a ConversationLog> {
    session.tabs().iter().find(|tab| tab.binding() == panel.binding()).map(Tab::log)
}
