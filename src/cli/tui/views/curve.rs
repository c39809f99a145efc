//! Curve view: the phase-transition chart with a movable probe

use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::cli::tui::app::{App, RATIO_MAX, RATIO_MIN};

/// Draw the phase-transition chart
pub fn draw(frame: &mut Frame, app: &App) {
    let area = super::chrome(frame, app, "←/→ move probe");

    let curve = app.curve();
    let points = curve.samples(RATIO_MIN, RATIO_MAX, 200);
    let threshold = [(curve.midpoint, 0.0), (curve.midpoint, 1.0)];
    let probe = [(app.probe_ratio(), curve.probability(app.probe_ratio()))];

    let datasets = vec![
        Dataset::default()
            .name("P(satisfiable)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
        Dataset::default()
            .name(format!("critical ~{:.3}", curve.midpoint))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&threshold),
        Dataset::default()
            .name("probe")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .data(&probe),
    ];

    let title = format!(
        "Random 3-SAT satisfiability: P(sat) at ratio {:.2} = {:.3}",
        app.probe_ratio(),
        curve.probability(app.probe_ratio())
    );

    let chart = Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("clauses / variables")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([RATIO_MIN, RATIO_MAX])
                .labels([
                    format!("{:.1}", RATIO_MIN),
                    format!("{:.3}", curve.midpoint),
                    format!("{:.1}", RATIO_MAX),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("P(satisfiable)")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 1.0])
                .labels(["0.0", "0.5", "1.0"]),
        );

    frame.render_widget(chart, area);
}
