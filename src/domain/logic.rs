//! Propositional building blocks: literals, clauses, formulas.
//!
//! Literals use the DIMACS-style signed encoding: the magnitude names
//! a 1-based variable and the sign gives the polarity. Formulas are
//! conjunctions of clauses; clauses are disjunctions of literals.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// A variable index, 1-based.
pub type VarId = u32;

/// A propositional literal: a variable or its negation.
///
/// E.g. `3` is `x3` and `-3` is `¬x3`. Zero is not a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Literal(i32);

impl Literal {
    /// Creates a literal from a signed code, or `None` for zero.
    pub fn new(code: i32) -> Option<Self> {
        if code == 0 {
            None
        } else {
            Some(Self(code))
        }
    }

    /// The 1-based variable this literal refers to.
    pub fn var(self) -> VarId {
        self.0.unsigned_abs()
    }

    /// True if the literal asserts its variable rather than negating it.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The same literal with opposite polarity.
    pub fn negated(self) -> Self {
        Self(-self.0)
    }

    /// Truth value of the literal given a value for its variable.
    pub fn eval_with(self, value: bool) -> bool {
        if self.is_positive() {
            value
        } else {
            !value
        }
    }

    /// The raw signed code.
    pub fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_positive() {
            write!(f, "x{}", self.var())
        } else {
            write!(f, "¬x{}", self.var())
        }
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        Literal::new(code).ok_or_else(|| D::Error::custom("literal code must be nonzero"))
    }
}

/// A disjunction of literals.
///
/// Order does not affect the truth value but is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Creates a clause from literals.
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// Creates a clause from signed codes, dropping any zeros.
    pub fn from_codes(codes: &[i32]) -> Self {
        Self {
            literals: codes.iter().copied().filter_map(Literal::new).collect(),
        }
    }

    /// The literals in display order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Iterates over the literals.
    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// Number of literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True for the empty clause (an unsatisfiable disjunction).
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The largest variable referenced, or 0 for the empty clause.
    pub fn max_var(&self) -> VarId {
        self.iter().map(Literal::var).max().unwrap_or(0)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, ")")
    }
}

/// An ordered conjunction of clauses over a shared variable namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formula {
    num_vars: VarId,
    clauses: Vec<Clause>,
}

impl Formula {
    /// Creates a formula over `num_vars` variables.
    ///
    /// The variable namespace is widened to cover any literal that
    /// refers past `num_vars`, keeping every literal in range instead
    /// of rejecting the input.
    pub fn new(num_vars: VarId, clauses: Vec<Clause>) -> Self {
        let referenced = clauses.iter().map(Clause::max_var).max().unwrap_or(0);
        Self {
            num_vars: num_vars.max(referenced),
            clauses,
        }
    }

    /// Creates a formula from nested signed codes.
    pub fn from_codes(num_vars: VarId, clauses: &[&[i32]]) -> Self {
        Self::new(
            num_vars,
            clauses.iter().map(|c| Clause::from_codes(c)).collect(),
        )
    }

    /// Size of the variable namespace.
    pub fn num_vars(&self) -> VarId {
        self.num_vars
    }

    /// The clauses in display order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Iterates over all variables in scope, `1..=num_vars`.
    pub fn vars(&self) -> impl Iterator<Item = VarId> {
        1..=self.num_vars
    }

    /// Clause-to-variable ratio, the x-axis of the transition curve.
    pub fn ratio(&self) -> f64 {
        if self.num_vars == 0 {
            0.0
        } else {
            self.clauses.len() as f64 / self.num_vars as f64
        }
    }
}

impl<'de> Deserialize<'de> for Formula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            num_vars: VarId,
            clauses: Vec<Clause>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Formula::new(raw.num_vars, raw.clauses))
    }
}
