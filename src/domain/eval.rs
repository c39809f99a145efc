//! Three-valued evaluation of clauses and formulas.
//!
//! Evaluation is a pure display helper: it never fails, and edge
//! inputs (stray variables, zero clauses) yield trivial results
//! instead of errors.

use serde::Serialize;

use super::assignment::Assignment;
use super::logic::{Clause, Formula};

/// The live status of a clause under a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseStatus {
    /// Some literal is true; unassigned variables elsewhere don't matter.
    Satisfied,
    /// Every literal is assigned and false.
    Violated,
    /// No literal is true yet and at least one variable is unassigned.
    Undetermined,
}

impl ClauseStatus {
    /// Display symbol: `✓`, `✗`, or `?`.
    pub fn symbol(self) -> &'static str {
        match self {
            ClauseStatus::Satisfied => "✓",
            ClauseStatus::Violated => "✗",
            ClauseStatus::Undetermined => "?",
        }
    }
}

/// Evaluates one clause under the assignment.
///
/// A single true literal settles the clause, so the scan stops early;
/// order never affects the result.
pub fn evaluate_clause(clause: &Clause, assignment: &Assignment) -> ClauseStatus {
    let mut has_unassigned = false;

    for lit in clause.iter() {
        match assignment.eval_literal(lit) {
            Some(true) => return ClauseStatus::Satisfied,
            Some(false) => {}
            None => has_unassigned = true,
        }
    }

    if has_unassigned {
        ClauseStatus::Undetermined
    } else {
        ClauseStatus::Violated
    }
}

/// Per-clause statuses plus the derived formula-level flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaEval {
    /// One status per clause, in clause order.
    pub clauses: Vec<ClauseStatus>,
    /// Every clause is satisfied (vacuously true for zero clauses).
    pub all_satisfied: bool,
    /// At least one clause is violated.
    pub any_violated: bool,
    /// Every variable in the formula's scope is assigned.
    pub fully_assigned: bool,
}

impl FormulaEval {
    /// Number of satisfied clauses.
    pub fn satisfied_count(&self) -> usize {
        self.count(ClauseStatus::Satisfied)
    }

    /// Number of violated clauses.
    pub fn violated_count(&self) -> usize {
        self.count(ClauseStatus::Violated)
    }

    fn count(&self, status: ClauseStatus) -> usize {
        self.clauses.iter().filter(|s| **s == status).count()
    }
}

/// Evaluates every clause of the formula under the assignment.
pub fn evaluate_formula(formula: &Formula, assignment: &Assignment) -> FormulaEval {
    let clauses: Vec<ClauseStatus> = formula
        .clauses()
        .iter()
        .map(|clause| evaluate_clause(clause, assignment))
        .collect();

    let all_satisfied = clauses.iter().all(|s| *s == ClauseStatus::Satisfied);
    let any_violated = clauses.iter().any(|s| *s == ClauseStatus::Violated);
    let fully_assigned = formula.vars().all(|v| assignment.get(v).is_assigned());

    FormulaEval {
        clauses,
        all_satisfied,
        any_violated,
        fully_assigned,
    }
}
