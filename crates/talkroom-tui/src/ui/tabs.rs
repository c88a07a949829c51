//! Tab bar
//!
//! One tab per open room, in opening order. The visible panel is highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Tabs,
};

use crate::{Panel, Screen};

/// Render the tab bar.
pub fn render(frame: &mut Frame, screen: &Screen, area: Rect) {
    let titles: Vec<String> =
        screen.panels().iter().map(|panel| format!("#{}", panel.room())).collect();
    let selected = screen.panels().iter().position(Panel::is_visible).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");

    frame.render_widget(tabs, area);
}
