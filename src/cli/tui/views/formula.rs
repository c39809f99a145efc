//! Formula view: toggle variables, watch clause status live

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::cli::tui::app::App;
use crate::domain::ClauseStatus;

/// Draw the formula explorer
pub fn draw(frame: &mut Frame, app: &App) {
    let area = super::chrome(frame, app, "←/→ formula  ·  1-9 toggle variable  ·  r reset");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Formula picker + description
            Constraint::Length(3), // Variable toggles
            Constraint::Min(4),    // Clauses
            Constraint::Length(3), // Status
        ])
        .split(area);

    draw_picker(frame, app, chunks[0]);
    draw_variables(frame, app, chunks[1]);
    draw_clauses(frame, app, chunks[2]);
    draw_status(frame, app, chunks[3]);
}

fn draw_picker(frame: &mut Frame, app: &App, area: Rect) {
    let names: Vec<Span> = app
        .catalog()
        .entries()
        .iter()
        .enumerate()
        .flat_map(|(i, entry)| {
            let style = if i == app.selected() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(entry.name.clone(), style), Span::raw("   ")]
        })
        .collect();

    let text = vec![
        Line::from(names),
        Line::from(Span::styled(
            app.current().description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Paragraph::new(text).block(Block::default().title("Formulas").borders(Borders::ALL));
    frame.render_widget(block, area);
}

fn draw_variables(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (var, state) in app.assignment().entries() {
        let style = match state.as_bool() {
            Some(true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Some(false) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!("x{} = {}", var, state.symbol()),
            style,
        ));
        spans.push(Span::raw("   "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Variables (press the number to cycle ? → T → F)")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn draw_clauses(frame: &mut Frame, app: &App, area: Rect) {
    let entry = app.current();
    let eval = app.eval();

    let items: Vec<ListItem> = entry
        .formula
        .clauses()
        .iter()
        .zip(&eval.clauses)
        .map(|(clause, status)| {
            let status_style = match status {
                ClauseStatus::Satisfied => Style::default().fg(Color::Green),
                ClauseStatus::Violated => Style::default().fg(Color::Red),
                ClauseStatus::Undetermined => Style::default().fg(Color::DarkGray),
            };

            let mut spans = vec![
                Span::styled(status.symbol().to_string(), status_style),
                Span::raw("  ("),
            ];
            for (i, lit) in clause.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" ∨ ", Style::default().fg(Color::DarkGray)));
                }
                // Color each literal by its own truth value, like the
                // site widget does
                let lit_style = match app.assignment().eval_literal(lit) {
                    Some(true) => Style::default().fg(Color::Green),
                    Some(false) => Style::default().fg(Color::Red),
                    None => Style::default(),
                };
                spans.push(Span::styled(lit.to_string(), lit_style));
            }
            spans.push(Span::raw(")"));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Clauses").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let eval = app.eval();
    let total = eval.clauses.len();
    let num_vars = app.current().formula.num_vars() as usize;
    let unassigned = num_vars - app.assignment().assigned_count();

    let (message, style) = if !eval.fully_assigned && !eval.any_violated {
        let mut message = format!("{} variable(s) unassigned.", unassigned);
        if eval.satisfied_count() > 0 {
            message.push_str(&format!(
                " {}/{} clauses satisfied so far.",
                eval.satisfied_count(),
                total
            ));
        }
        (message, Style::default().fg(Color::DarkGray))
    } else if eval.all_satisfied {
        (
            "All clauses satisfied! This assignment is a model of the formula.".to_string(),
            Style::default().fg(Color::Green),
        )
    } else if eval.any_violated {
        (
            format!(
                "{} clause(s) violated. Try a different assignment.",
                eval.violated_count()
            ),
            Style::default().fg(Color::Red),
        )
    } else {
        (String::new(), Style::default())
    };

    let paragraph = Paragraph::new(message)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
