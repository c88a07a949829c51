//! Status bar
//!
//! Displays who is connected, where, and the latest notice.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use talkroom_app::{ConnectionState, ConversationLog, Session};

use crate::Screen;

/// Render the status bar.
pub fn render(frame: &mut Frame, session: &Session, screen: &Screen, area: Rect) {
    let connection_status = match session.state() {
        ConnectionState::AwaitingConnection => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Active => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::LoggedOut => Span::styled("Logged out", Style::default().fg(Color::Red)),
        ConnectionState::Closed => Span::styled("Disconnected", Style::default().fg(Color::Red)),
    };

    let mut spans = vec![
        Span::raw(" "),
        connection_status,
        Span::styled(
            format!(" as {}", summary(session, screen)),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(notice) = screen.notice() {
        spans.push(Span::styled(format!(" | {notice}"), Style::default().fg(Color::LightRed)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Identity and room counts, shown after the connection state.
fn summary(session: &Session, screen: &Screen) -> String {
    let identity = session.identity();
    let room = screen.visible_panel().map_or_else(String::new, |panel| {
        let messages = super::conversation(session, panel).map_or(0, ConversationLog::len);
        format!(" | #{} ({messages} messages)", panel.room())
    });

    format!(
        "{} [{}] | Rooms: {} known, {} open{room}",
        identity.sender_name(),
        identity.sender_id(),
        session.directory().len(),
        session.tabs().len(),
    )
}
