//! Explorer application state and key handling

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use super::views;
use super::{Terminal, ViewMode};
use crate::domain::{
    evaluate_formula, Assignment, Catalog, FormulaEntry, FormulaEval, TransitionCurve,
};

/// Ratio range of the curve view, matching the chart on the site.
pub const RATIO_MIN: f64 = 1.0;
pub const RATIO_MAX: f64 = 7.0;

/// Variable-count range of the growth view.
const GROWTH_MIN: u32 = 1;
const GROWTH_MAX: u32 = 30;

/// Application state
pub struct App {
    /// Formula catalogue (built-ins plus site extras)
    catalog: Catalog,

    /// Phase-transition curve parameters
    curve: TransitionCurve,

    /// Site title for the header
    site_title: String,

    /// Current view
    view: ViewMode,

    /// Selected formula index
    selected: usize,

    /// Assignment for the selected formula; rebuilt on selection
    assignment: Assignment,

    /// Evaluation of the selected formula under the assignment
    eval: FormulaEval,

    /// Probe position on the curve view
    probe_ratio: f64,

    /// Variable count on the growth view
    growth_vars: u32,

    /// Whether to quit
    should_quit: bool,
}

impl App {
    /// Create a new explorer, optionally starting on a named formula
    pub fn new(
        catalog: Catalog,
        curve: TransitionCurve,
        site_title: String,
        formula: Option<&str>,
        view: ViewMode,
    ) -> Result<Self> {
        let selected = match formula {
            Some(name) => catalog
                .position(name)
                .ok_or_else(|| anyhow::anyhow!("Formula not found: {}", name))?,
            None => 0,
        };

        let entry = catalog
            .get(selected)
            .ok_or_else(|| anyhow::anyhow!("Formula catalogue is empty"))?;
        let assignment = Assignment::for_formula(&entry.formula);
        let eval = evaluate_formula(&entry.formula, &assignment);
        let probe_ratio = curve.midpoint.clamp(RATIO_MIN, RATIO_MAX);

        Ok(Self {
            catalog,
            curve,
            site_title,
            view,
            selected,
            assignment,
            eval,
            probe_ratio,
            growth_vars: 10,
            should_quit: false,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            ViewMode::Formula => views::formula::draw(frame, self),
            ViewMode::Curve => views::curve::draw(frame, self),
            ViewMode::Growth => views::growth::draw(frame, self),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.view = self.view.next(),
            KeyCode::BackTab => self.view = self.view.prev(),
            _ => match self.view {
                ViewMode::Formula => self.handle_formula_key(key),
                ViewMode::Curve => self.handle_curve_key(key),
                ViewMode::Growth => self.handle_growth_key(key),
            },
        }
    }

    fn handle_formula_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('n') => {
                self.select((self.selected + 1) % self.catalog.len());
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.select((self.selected + self.catalog.len() - 1) % self.catalog.len());
            }
            KeyCode::Char('r') => {
                self.assignment.reset();
                self.reeval();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let var = c as u32 - '0' as u32;
                if var <= self.current().formula.num_vars() {
                    self.assignment.toggle(var);
                    self.reeval();
                }
            }
            _ => {}
        }
    }

    fn handle_curve_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.probe_ratio = (self.probe_ratio - 0.05).max(RATIO_MIN);
            }
            KeyCode::Right => {
                self.probe_ratio = (self.probe_ratio + 0.05).min(RATIO_MAX);
            }
            _ => {}
        }
    }

    fn handle_growth_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Down => {
                self.growth_vars = self.growth_vars.saturating_sub(1).max(GROWTH_MIN);
            }
            KeyCode::Right | KeyCode::Up => {
                self.growth_vars = (self.growth_vars + 1).min(GROWTH_MAX);
            }
            _ => {}
        }
    }

    /// Switch formulas; the assignment is owned by one widget session,
    /// so it resets on every switch.
    fn select(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        if let Some(entry) = self.catalog.get(index) {
            self.selected = index;
            self.assignment = Assignment::for_formula(&entry.formula);
            self.reeval();
        }
    }

    fn reeval(&mut self) {
        self.eval = evaluate_formula(&self.current().formula, &self.assignment);
    }

    pub fn current(&self) -> &FormulaEntry {
        // selected is always a valid catalogue index
        &self.catalog.entries()[self.selected]
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn curve(&self) -> TransitionCurve {
        self.curve
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn eval(&self) -> &FormulaEval {
        &self.eval
    }

    pub fn probe_ratio(&self) -> f64 {
        self.probe_ratio
    }

    pub fn growth_vars(&self) -> u32 {
        self.growth_vars
    }
}
