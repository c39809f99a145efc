//! Formula CLI commands
//!
//! These work inside or outside a site: without a `quill.toml` the
//! built-in catalogue is used, a site adds its configured formulas.

use anyhow::{bail, Result};
use clap::Subcommand;

use super::output::Output;
use crate::domain::{
    evaluate_formula, Assignment, Catalog, FormulaEntry, VarId, VarState,
};
use crate::storage::{Site, SiteError};

#[derive(Subcommand)]
pub enum FormulaCommands {
    /// List the formula catalogue
    List,

    /// Show a formula's clauses
    Show {
        /// Formula name (case-insensitive, substring match allowed)
        name: String,
    },

    /// Evaluate a formula under a partial assignment
    Eval {
        /// Formula name
        name: String,

        /// Variable assignment, e.g. `x1=true`, `2=f`, `x3=?` (repeatable)
        #[arg(long = "assign", short = 'a', value_name = "VAR=VALUE")]
        assignments: Vec<String>,
    },
}

pub fn run(cmd: FormulaCommands, output: &Output) -> Result<()> {
    match cmd {
        FormulaCommands::List => list_formulas(output),
        FormulaCommands::Show { name } => show_formula(output, &name),
        FormulaCommands::Eval { name, assignments } => eval_formula(output, &name, &assignments),
    }
}

/// The site's catalogue, or the built-ins when not inside a site.
fn open_catalog(output: &Output) -> Result<Catalog> {
    match Site::open_current() {
        Ok(site) => Ok(site.catalog()),
        Err(e) if e.downcast_ref::<SiteError>().is_some() => {
            output.verbose_ctx("formula", "Not in a site; using built-in catalogue");
            Ok(Catalog::builtin())
        }
        Err(e) => Err(e),
    }
}

fn find_entry<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a FormulaEntry> {
    catalog
        .find(name)
        .ok_or_else(|| anyhow::anyhow!("Formula not found: {}", name))
}

/// Parses one `VAR=VALUE` assignment argument.
///
/// Variables accept `x3` or bare `3`; values accept
/// `true`/`t`/`1`, `false`/`f`/`0`, and `?`/`u`/`unassigned`.
fn parse_assignment(raw: &str) -> Result<(VarId, VarState)> {
    let Some((var_part, value_part)) = raw.split_once('=') else {
        bail!("Invalid assignment '{}': expected VAR=VALUE", raw);
    };

    let var_part = var_part.trim();
    let digits = var_part
        .strip_prefix('x')
        .or_else(|| var_part.strip_prefix('X'))
        .unwrap_or(var_part);

    let var: VarId = digits
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid variable '{}' in '{}'", var_part, raw))?;
    if var == 0 {
        bail!("Invalid variable '{}': variables are numbered from 1", var_part);
    }

    let state = match value_part.trim().to_lowercase().as_str() {
        "true" | "t" | "1" => VarState::True,
        "false" | "f" | "0" => VarState::False,
        "?" | "u" | "unassigned" => VarState::Unassigned,
        other => bail!("Invalid value '{}' in '{}'", other, raw),
    };

    Ok((var, state))
}

fn list_formulas(output: &Output) -> Result<()> {
    let catalog = open_catalog(output)?;

    if output.is_json() {
        output.data(&catalog.entries());
    } else {
        println!("{:<18} {:>5} {:>8} {:>7}  DESCRIPTION", "NAME", "VARS", "CLAUSES", "RATIO");
        println!("{}", "-".repeat(72));
        for entry in catalog.entries() {
            println!(
                "{:<18} {:>5} {:>8} {:>7.2}  {}",
                entry.name,
                entry.formula.num_vars(),
                entry.formula.clauses().len(),
                entry.formula.ratio(),
                entry.description
            );
        }
    }

    Ok(())
}

fn show_formula(output: &Output, name: &str) -> Result<()> {
    let catalog = open_catalog(output)?;
    let entry = find_entry(&catalog, name)?;

    if output.is_json() {
        output.data(entry);
    } else {
        println!("{}", entry.name);
        if !entry.description.is_empty() {
            println!("{}", entry.description);
        }
        println!(
            "{} variables, {} clauses (ratio {:.2})",
            entry.formula.num_vars(),
            entry.formula.clauses().len(),
            entry.formula.ratio()
        );
        println!();
        for clause in entry.formula.clauses() {
            println!("  {}", clause);
        }
    }

    Ok(())
}

fn eval_formula(output: &Output, name: &str, assignments: &[String]) -> Result<()> {
    let catalog = open_catalog(output)?;
    let entry = find_entry(&catalog, name)?;

    let mut assignment = Assignment::for_formula(&entry.formula);
    for raw in assignments {
        let (var, state) = parse_assignment(raw)?;
        // Out-of-range variables are ignored, matching the evaluator's
        // permissive contract.
        assignment.set(var, state);
    }

    let eval = evaluate_formula(&entry.formula, &assignment);

    if output.is_json() {
        let vars: serde_json::Map<String, serde_json::Value> = assignment
            .entries()
            .map(|(var, state)| (format!("x{}", var), serde_json::json!(state)))
            .collect();
        let clauses: Vec<_> = entry
            .formula
            .clauses()
            .iter()
            .zip(&eval.clauses)
            .map(|(clause, status)| {
                serde_json::json!({
                    "clause": clause.to_string(),
                    "status": status,
                })
            })
            .collect();

        output.data(&serde_json::json!({
            "formula": entry.name,
            "assignment": vars,
            "clauses": clauses,
            "all_satisfied": eval.all_satisfied,
            "any_violated": eval.any_violated,
            "fully_assigned": eval.fully_assigned,
        }));
    } else {
        println!("{}: {}", entry.name, entry.description);

        let vars: Vec<String> = assignment
            .entries()
            .map(|(var, state)| format!("x{}={}", var, state.symbol()))
            .collect();
        println!("Assignment: {}", vars.join(" "));
        println!();

        for (clause, status) in entry.formula.clauses().iter().zip(&eval.clauses) {
            println!("  {} {}", status.symbol(), clause);
        }

        println!();
        println!(
            "{}/{} clauses satisfied, {} violated",
            eval.satisfied_count(),
            eval.clauses.len(),
            eval.violated_count()
        );

        if eval.all_satisfied && eval.fully_assigned {
            println!("All clauses satisfied: this assignment is a model of the formula.");
        } else if eval.any_violated {
            println!("The assignment violates the formula; try different values.");
        } else if !eval.fully_assigned {
            let remaining = entry.formula.num_vars() as usize - assignment.assigned_count();
            println!("{} variable(s) still unassigned.", remaining);
        }
    }

    Ok(())
}
