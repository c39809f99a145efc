//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{curve_cmd, formula_cmd, post_cmd, tui};
use crate::domain::{Catalog, TransitionCurve};
use crate::storage::{Site, SiteError};

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Local-first toolkit for a research-blog site")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new quill site
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Query blog posts
    #[command(subcommand)]
    Post(post_cmd::PostCommands),

    /// Inspect and evaluate the example formulas
    #[command(subcommand)]
    Formula(formula_cmd::FormulaCommands),

    /// Sample the 3-SAT phase-transition curve
    Curve {
        /// Print the probability at one ratio instead of a table
        #[arg(long)]
        at: Option<f64>,

        /// Lower end of the sampled ratio range
        #[arg(long, default_value = "1.0")]
        min: f64,

        /// Upper end of the sampled ratio range
        #[arg(long, default_value = "7.0")]
        max: f64,

        /// Number of sample steps across the range
        #[arg(long, default_value = "12")]
        samples: usize,
    },

    /// Compare polynomial and exponential growth
    Growth {
        /// Variable count (omit for the 10..50 ladder)
        #[arg(long)]
        vars: Option<u32>,
    },

    /// Open the interactive explorer
    Explore {
        /// Formula to open with
        formula: Option<String>,

        /// Initial view (formula, curve, growth)
        #[arg(long, default_value = "formula")]
        view: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Quill starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing site at: {}", path));
            let site = Site::init(&path)?;
            output.success(&format!(
                "Initialized quill site at {}",
                site.root().display()
            ));
        }

        Commands::Post(cmd) => post_cmd::run(cmd, &output)?,
        Commands::Formula(cmd) => formula_cmd::run(cmd, &output)?,

        Commands::Curve {
            at,
            min,
            max,
            samples,
        } => curve_cmd::curve(&output, at, min, max, samples)?,

        Commands::Growth { vars } => curve_cmd::growth(&output, vars)?,

        Commands::Explore { formula, view } => {
            let (catalog, curve, title) = explorer_context(&output)?;
            tui::run(&output, catalog, curve, title, formula.as_deref(), &view)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Catalogue, curve and title for the explorer, falling back to the
/// built-ins outside a site.
fn explorer_context(output: &Output) -> Result<(Catalog, TransitionCurve, String)> {
    match Site::open_current() {
        Ok(site) => {
            let title = if site.config().site.title.is_empty() {
                "quill".to_string()
            } else {
                site.config().site.title.clone()
            };
            Ok((site.catalog(), site.curve(), title))
        }
        Err(e) if e.downcast_ref::<SiteError>().is_some() => {
            output.verbose_ctx("explore", "Not in a site; using built-in catalogue");
            Ok((
                Catalog::builtin(),
                TransitionCurve::default(),
                "quill".to_string(),
            ))
        }
        Err(e) => Err(e),
    }
}
