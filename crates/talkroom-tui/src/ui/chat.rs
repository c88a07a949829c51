//! Chat area
//!
//! Displays the conversation of the visible panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use talkroom_app::ConversationLog;

use crate::Panel;

const BORDER_SIZE: u16 = 2;

/// Render the chat area.
pub fn render(frame: &mut Frame, panel: Option<&Panel>, log: Option<&ConversationLog>, area: Rect) {
    let title =
        panel.map_or_else(|| " No Room ".to_owned(), |panel| format!(" #{} ", panel.room()));
    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = match (panel, log) {
        (Some(_), Some(log)) if !log.is_empty() => log
            .lines()
            .iter()
            .map(|line| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("<{}>", line.sender_name),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(line.content.clone()),
                ]))
            })
            .collect(),
        (Some(_), _) => vec![ListItem::new(Line::from(Span::styled(
            "No messages yet",
            Style::default().fg(Color::DarkGray),
        )))],
        (None, _) => vec![],
    };

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
