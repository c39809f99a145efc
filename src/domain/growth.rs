//! Polynomial-versus-exponential growth comparison.
//!
//! Backs the combinatorial-explosion chart: for `n` variables, how do
//! n², n³ and 2ⁿ compare, and how should such magnitudes be rendered.

use serde::Serialize;

/// Growth figures for a single variable count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthRow {
    pub vars: u32,
    /// n², polynomial.
    pub quadratic: f64,
    /// n³, polynomial.
    pub cubic: f64,
    /// 2ⁿ, the search-space size.
    pub exponential: f64,
}

impl GrowthRow {
    pub fn new(vars: u32) -> Self {
        let n = vars as f64;
        Self {
            vars,
            quadratic: n * n,
            cubic: n * n * n,
            exponential: 2f64.powi(vars.min(1023) as i32),
        }
    }

    /// The fixed comparison ladder: 10, 20, 30, 40, 50 variables.
    pub fn ladder() -> Vec<GrowthRow> {
        [10, 20, 30, 40, 50].into_iter().map(GrowthRow::new).collect()
    }
}

/// Renders a magnitude compactly: `123`, `1.5K`, `2.1M`, `3.4B`, or
/// scientific notation from 10¹⁵ up.
pub fn format_count(n: f64) -> String {
    if n >= 1e15 {
        format!("{:.1e}", n)
    } else if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        format!("{:.0}", n)
    }
}

/// Log-scale bar length in `[0, 1]` so polynomial bars stay visible
/// next to an exponential one. Nonpositive values get no bar; tiny
/// positive values keep a sliver.
pub fn bar_fraction(value: f64, max: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let max_log = max.log10().max(1.0);
    (value.log10() / max_log).clamp(0.02, 1.0)
}
