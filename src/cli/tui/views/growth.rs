//! Growth view: polynomial vs. exponential cost, log-scale bars

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::cli::tui::app::App;
use crate::domain::{bar_fraction, format_count, GrowthRow};

/// Draw the combinatorial-explosion comparison
pub fn draw(frame: &mut Frame, app: &App) {
    let area = super::chrome(frame, app, "←/→ adjust variable count");

    let row = GrowthRow::new(app.growth_vars());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // n²
            Constraint::Length(3), // n³
            Constraint::Length(3), // 2ⁿ
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "Steps to check {} variables (bars are log-scaled)",
        row.vars
    ));
    frame.render_widget(header, chunks[0]);

    // All bars share the exponential's log scale, so the polynomial
    // rows stay visible while 2ⁿ runs away
    let max = row.exponential;
    draw_bar(frame, chunks[1], "n²  (polynomial)", row.quadratic, max, Color::Cyan);
    draw_bar(frame, chunks[2], "n³  (polynomial)", row.cubic, max, Color::Blue);
    draw_bar(frame, chunks[3], "2ⁿ  (exponential)", row.exponential, max, Color::Red);
}

fn draw_bar(frame: &mut Frame, area: Rect, title: &str, value: f64, max: f64, color: Color) {
    let gauge = Gauge::default()
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(bar_fraction(value, max))
        .label(format_count(value));
    frame.render_widget(gauge, area);
}
