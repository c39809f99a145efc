//! Curve and growth CLI commands
//!
//! Both work outside a site; a site's `[curve]` section overrides the
//! chart parameters.

use anyhow::Result;

use super::output::Output;
use crate::domain::{format_count, GrowthRow, TransitionCurve};
use crate::storage::{Site, SiteError};

/// The site's curve parameters, or the defaults when not in a site.
fn open_curve(output: &Output) -> Result<TransitionCurve> {
    match Site::open_current() {
        Ok(site) => Ok(site.curve()),
        Err(e) if e.downcast_ref::<SiteError>().is_some() => {
            output.verbose_ctx("curve", "Not in a site; using default curve parameters");
            Ok(TransitionCurve::default())
        }
        Err(e) => Err(e),
    }
}

pub fn curve(
    output: &Output,
    at: Option<f64>,
    min: f64,
    max: f64,
    samples: usize,
) -> Result<()> {
    let curve = open_curve(output)?;

    if let Some(ratio) = at {
        let probability = curve.probability(ratio);

        if output.is_json() {
            output.data(&serde_json::json!({
                "midpoint": curve.midpoint,
                "steepness": curve.steepness,
                "ratio": ratio,
                "probability": probability,
            }));
        } else {
            println!("P(satisfiable) at ratio {:.3} = {:.3}", ratio, probability);
        }
        return Ok(());
    }

    let points = curve.samples(min, max, samples);

    if output.is_json() {
        let points: Vec<_> = points
            .iter()
            .map(|(ratio, probability)| {
                serde_json::json!({ "ratio": ratio, "probability": probability })
            })
            .collect();
        output.data(&serde_json::json!({
            "midpoint": curve.midpoint,
            "steepness": curve.steepness,
            "points": points,
        }));
    } else {
        println!("{:>8} {:>8}", "RATIO", "P(SAT)");
        for (ratio, probability) in &points {
            println!("{:>8.2} {:>8.3}", ratio, probability);
        }
        println!();
        println!(
            "Critical ratio ~{:.3}: below it almost every formula is satisfiable,",
            curve.midpoint
        );
        println!("above it almost none are.");
    }

    Ok(())
}

pub fn growth(output: &Output, vars: Option<u32>) -> Result<()> {
    let rows = match vars {
        Some(n) => vec![GrowthRow::new(n)],
        None => GrowthRow::ladder(),
    };

    if output.is_json() {
        output.data(&rows);
    } else {
        println!("{:>5} {:>12} {:>12} {:>12}", "VARS", "N^2", "N^3", "2^N");
        println!("{}", "-".repeat(46));
        for row in &rows {
            println!(
                "{:>5} {:>12} {:>12} {:>12}",
                row.vars,
                format_count(row.quadratic),
                format_count(row.cubic),
                format_count(row.exponential)
            );
        }
        println!();
        println!("Polynomial checking stays tractable; exhaustive search does not.");
    }

    Ok(())
}
