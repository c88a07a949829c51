//! Roster sidebar
//!
//! Lists every known room. The roster cursor is marked, the visible room is
//! highlighted and open rooms are tinted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{Panel, Screen};

const CURSOR_PREFIX: &str = ">";
const PLAIN_PREFIX: &str = " ";

/// Render the roster sidebar.
pub fn render(frame: &mut Frame, screen: &Screen, area: Rect) {
    let visible = screen.visible_panel().map(Panel::room);

    let items: Vec<ListItem> = screen
        .roster()
        .iter()
        .enumerate()
        .map(|(index, room)| {
            let prefix = if index == screen.roster_cursor() { CURSOR_PREFIX } else { PLAIN_PREFIX };
            let style = if visible == Some(room.as_str()) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if screen.panels().iter().any(|panel| panel.room() == room) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(format!("#{room}"), style),
            ]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Rooms (^O) ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
