//! The example-formula catalogue.
//!
//! A small fixed set of hand-authored formulas drives the explorer
//! and the `formula` commands. The built-in entries illustrate the
//! easy / hard / impossible spectrum; sites can append their own via
//! `[[formula]]` tables in `quill.toml`.

use serde::{Deserialize, Serialize};

use super::logic::Formula;

/// A named formula with a one-line description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaEntry {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(flatten)]
    pub formula: Formula,
}

impl FormulaEntry {
    /// Creates an entry from nested signed clause codes.
    pub fn from_codes(name: &str, description: &str, num_vars: u32, clauses: &[&[i32]]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            formula: Formula::from_codes(num_vars, clauses),
        }
    }
}

/// An ordered collection of formula entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<FormulaEntry>,
}

impl Catalog {
    /// The built-in example formulas.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                FormulaEntry::from_codes(
                    "Easy (SAT)",
                    "Unit propagation solves it immediately",
                    3,
                    &[&[1, 2, 3], &[1, -2, 3], &[-1, 2, 3]],
                ),
                FormulaEntry::from_codes(
                    "Hard (SAT)",
                    "Near the phase transition, requires search",
                    4,
                    &[
                        &[1, 2, -3],
                        &[-1, 3, 4],
                        &[2, -3, -4],
                        &[-1, -2, 4],
                        &[1, -3, 4],
                        &[-2, 3, -4],
                        &[1, 2, 4],
                    ],
                ),
                FormulaEntry::from_codes(
                    "Unsatisfiable",
                    "No assignment can satisfy all clauses",
                    2,
                    &[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]],
                ),
            ],
        }
    }

    /// Appends extra entries, e.g. from site configuration.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = FormulaEntry>) {
        self.entries.extend(extra);
    }

    /// The entries in catalogue order.
    pub fn entries(&self) -> &[FormulaEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalogue has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at a catalogue position.
    pub fn get(&self, index: usize) -> Option<&FormulaEntry> {
        self.entries.get(index)
    }

    /// Finds an entry by name: exact match first, then
    /// case-insensitive, then substring.
    pub fn find(&self, name: &str) -> Option<&FormulaEntry> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// Like [`find`](Self::find), but returns the catalogue position.
    pub fn position(&self, name: &str) -> Option<usize> {
        let exact = self.entries.iter().position(|e| e.name == name);
        if exact.is_some() {
            return exact;
        }

        let folded = self
            .entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name));
        if folded.is_some() {
            return folded;
        }

        let needle = name.to_lowercase();
        self.entries
            .iter()
            .position(|e| e.name.to_lowercase().contains(&needle))
    }
}
