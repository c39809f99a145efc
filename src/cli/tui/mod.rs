//! Interactive terminal explorer
//!
//! The terminal counterpart of the site's interactive widgets: toggle
//! variable assignments and watch clause status live, probe the
//! phase-transition curve, and compare growth rates.

mod app;
mod views;

use std::io::{self, stdout, Stdout};
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use super::Output;
use crate::domain::{Catalog, TransitionCurve};
use app::App;

/// Terminal type alias
pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// View mode for the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Formula,
    Curve,
    Growth,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::Formula => ViewMode::Curve,
            ViewMode::Curve => ViewMode::Growth,
            ViewMode::Growth => ViewMode::Formula,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ViewMode::Formula => ViewMode::Growth,
            ViewMode::Curve => ViewMode::Formula,
            ViewMode::Growth => ViewMode::Curve,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewMode::Formula => 0,
            ViewMode::Curve => 1,
            ViewMode::Growth => 2,
        }
    }
}

impl FromStr for ViewMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formula" | "explorer" | "f" | "1" => Ok(ViewMode::Formula),
            "curve" | "c" | "2" => Ok(ViewMode::Curve),
            "growth" | "g" | "3" => Ok(ViewMode::Growth),
            _ => Err(()),
        }
    }
}

/// Launch the explorer
pub fn run(
    output: &Output,
    catalog: Catalog,
    curve: TransitionCurve,
    site_title: String,
    formula: Option<&str>,
    view: &str,
) -> Result<()> {
    output.verbose_ctx("explore", "Initializing explorer");

    let view_mode = view.parse().unwrap_or_default();
    let mut app = App::new(catalog, curve, site_title, formula, view_mode)?;

    let mut terminal = init_terminal()?;

    // Run the main loop with panic safety so the terminal is restored
    // even if drawing panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| app.run(&mut terminal)));

    let restore_result = restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("Explorer panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("Explorer panicked: {}", s))
            } else {
                Err(anyhow!("Explorer panicked with unknown error"))
            }
        }
    }
}

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
