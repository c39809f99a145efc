//! Partial truth assignments over a formula's variables.
//!
//! Variables are tri-state: unassigned, true, or false. The explicit
//! enum keeps the undetermined-vs-violated distinction in clause
//! evaluation exhaustively matchable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::logic::{Formula, Literal, VarId};

/// The value of a single variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarState {
    #[default]
    Unassigned,
    True,
    False,
}

impl VarState {
    /// Advances through the toggle cycle: unassigned → true → false → unassigned.
    pub fn cycle(self) -> Self {
        match self {
            VarState::Unassigned => VarState::True,
            VarState::True => VarState::False,
            VarState::False => VarState::Unassigned,
        }
    }

    /// The assigned boolean, or `None` when unassigned.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            VarState::Unassigned => None,
            VarState::True => Some(true),
            VarState::False => Some(false),
        }
    }

    /// True unless unassigned.
    pub fn is_assigned(self) -> bool {
        self != VarState::Unassigned
    }

    /// Single-character display symbol: `?`, `T`, or `F`.
    pub fn symbol(self) -> &'static str {
        match self {
            VarState::Unassigned => "?",
            VarState::True => "T",
            VarState::False => "F",
        }
    }
}

impl From<bool> for VarState {
    fn from(value: bool) -> Self {
        if value {
            VarState::True
        } else {
            VarState::False
        }
    }
}

impl fmt::Display for VarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A mutable partial assignment for variables `1..=num_vars`.
///
/// Lookups outside that range read as unassigned and writes to them
/// are ignored, so evaluation never fails on a stray variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<VarState>,
}

impl Assignment {
    /// Creates an all-unassigned state for `num_vars` variables.
    pub fn new(num_vars: VarId) -> Self {
        Self {
            values: vec![VarState::Unassigned; num_vars as usize],
        }
    }

    /// Creates an all-unassigned state matching a formula's scope.
    pub fn for_formula(formula: &Formula) -> Self {
        Self::new(formula.num_vars())
    }

    /// Size of the variable scope.
    pub fn num_vars(&self) -> VarId {
        self.values.len() as VarId
    }

    /// The state of a variable; out-of-range reads are unassigned.
    pub fn get(&self, var: VarId) -> VarState {
        if var == 0 {
            return VarState::Unassigned;
        }
        self.values
            .get(var as usize - 1)
            .copied()
            .unwrap_or_default()
    }

    /// Sets a variable's state; out-of-range writes are ignored.
    pub fn set(&mut self, var: VarId, state: VarState) {
        if var == 0 {
            return;
        }
        if let Some(slot) = self.values.get_mut(var as usize - 1) {
            *slot = state;
        }
    }

    /// Cycles a variable through unassigned → true → false → unassigned.
    pub fn toggle(&mut self, var: VarId) {
        self.set(var, self.get(var).cycle());
    }

    /// Returns every variable to unassigned.
    pub fn reset(&mut self) {
        self.values.fill(VarState::Unassigned);
    }

    /// Number of variables with an assigned value.
    pub fn assigned_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_assigned()).count()
    }

    /// True when every variable in scope is assigned.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_assigned())
    }

    /// Truth value of a literal, or `None` when its variable is unassigned.
    pub fn eval_literal(&self, lit: Literal) -> Option<bool> {
        self.get(lit.var()).as_bool().map(|v| lit.eval_with(v))
    }

    /// Iterates over `(variable, state)` pairs in variable order.
    pub fn entries(&self) -> impl Iterator<Item = (VarId, VarState)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as VarId + 1, *v))
    }
}
