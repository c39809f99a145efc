//! The random-3-SAT phase-transition probability curve.
//!
//! A logistic sigmoid centered on the empirical critical ratio. This
//! is an illustration of the sharp satisfiability drop-off, not a
//! fitted model; the steepness is a display parameter.

use serde::{Deserialize, Serialize};

/// Empirical critical clause-to-variable ratio for random 3-SAT.
pub const CRITICAL_RATIO: f64 = 4.267;

/// Default sigmoid steepness, tuned to resemble the empirical curve.
pub const DEFAULT_STEEPNESS: f64 = 4.5;

/// Satisfiability-probability curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionCurve {
    /// Ratio at which the probability crosses 0.5.
    pub midpoint: f64,
    /// How sharply the probability falls around the midpoint.
    pub steepness: f64,
}

impl Default for TransitionCurve {
    fn default() -> Self {
        Self {
            midpoint: CRITICAL_RATIO,
            steepness: DEFAULT_STEEPNESS,
        }
    }
}

impl TransitionCurve {
    pub fn new(midpoint: f64, steepness: f64) -> Self {
        Self { midpoint, steepness }
    }

    /// Approximate probability that a random 3-SAT formula at this
    /// clause-to-variable ratio is satisfiable. Total on all reals,
    /// always within `[0, 1]`.
    pub fn probability(&self, ratio: f64) -> f64 {
        1.0 / (1.0 + (self.steepness * (ratio - self.midpoint)).exp())
    }

    /// Samples the curve over `[min, max]` inclusive with `steps`
    /// segments, yielding `steps + 1` `(ratio, probability)` points.
    pub fn samples(&self, min: f64, max: f64, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let ratio = min + (i as f64 / steps as f64) * (max - min);
                (ratio, self.probability(ratio))
            })
            .collect()
    }
}
