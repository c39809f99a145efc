//! Explorer views, one module per tab

pub mod curve;
pub mod formula;
pub mod growth;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::app::App;

/// Draws the shared chrome (tab bar and key hints) and returns the
/// content area between them.
pub(super) fn chrome(frame: &mut Frame, app: &App, hints: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let tabs = Tabs::new(vec!["Formula", "Curve", "Growth"])
        .select(app.view().index())
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(format!(" {} ", app.site_title()))
                .borders(Borders::ALL),
        );
    frame.render_widget(tabs, chunks[0]);

    let footer = Paragraph::new(format!("{}  ·  Tab switch view  ·  q quit", hints))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);

    chunks[1]
}
