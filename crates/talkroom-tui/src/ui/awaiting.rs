//! Awaiting-connection screen

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use talkroom_app::{ConnectionState, Session};

/// Render the screen shown while no channel is open.
pub fn render(frame: &mut Frame, session: &Session, area: Rect) {
    let (text, color) = match session.state() {
        ConnectionState::AwaitingConnection => ("Waiting for connection...", Color::Yellow),
        ConnectionState::Active => ("Connected", Color::Green),
        ConnectionState::LoggedOut => ("Logged out", Color::DarkGray),
        ConnectionState::Closed => ("Connection closed", Color::Red),
    };

    let block = Block::default().borders(Borders::ALL).title(" talkroom ");
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(block);

    frame.render_widget(paragraph, area);
}
