//! Compound-interest projection engine.
//!
//! Simulates month-by-month compounding with a fixed monthly contribution
//! and emits one balance snapshot per year plus summary totals. Pure and
//! in-memory; safe to call repeatedly with no shared state.
//!
//! # Numeric semantics
//!
//! All accumulation runs on unrounded `f64` values. Rounding to whole
//! currency units happens only when a series point is emitted, and the
//! summary is derived from the final *unrounded* balance so per-year
//! rounding error never compounds into the headline numbers.

use serde::Serialize;

/// Inputs to a projection run.
///
/// The reference UI clamps these (initial 0..=1,000,000, contribution
/// 0..=10,000, rate 1..=20%, years 1..=50) but the engine itself accepts
/// any finite values.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionParams {
    /// Starting balance.
    pub initial: f64,
    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
    /// Annual interest rate in percent (8.0 means 8%).
    pub annual_rate_pct: f64,
    /// Duration in years. Zero produces only the year-0 snapshot.
    pub years: u32,
}

/// One year-end snapshot of the projection, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    /// Year index, 0 being the unmodified initial state.
    pub year: u32,
    /// Cumulative principal plus contributions to date.
    pub principal: i64,
    /// Cumulative interest earned to date.
    pub interest: i64,
    /// Total balance; always equals `principal + interest`.
    pub total: i64,
}

/// Headline totals derived from the final unrounded state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectionSummary {
    pub final_balance: f64,
    pub final_contributions: f64,
    pub total_interest: f64,
    /// Final balance over initial investment. When the initial investment
    /// is zero the divisor is treated as 1, so this degrades to the raw
    /// final balance instead of dividing by zero.
    pub growth_multiplier: f64,
}

/// A full projection: the year-indexed series and its summary.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub series: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

/// Run the compounding simulation.
pub fn project(params: &ProjectionParams) -> Projection {
    let monthly_rate = params.annual_rate_pct / 100.0 / 12.0;

    let mut balance = params.initial;
    let mut contributions = params.initial;

    let mut series = Vec::with_capacity(params.years as usize + 1);
    series.push(snapshot(0, balance, contributions));

    for year in 1..=params.years {
        for _month in 0..12 {
            balance = balance * (1.0 + monthly_rate) + params.monthly_contribution;
            contributions += params.monthly_contribution;
        }
        series.push(snapshot(year, balance, contributions));
    }

    let divisor = if params.initial == 0.0 {
        1.0
    } else {
        params.initial
    };

    let summary = ProjectionSummary {
        final_balance: balance,
        final_contributions: contributions,
        total_interest: balance - contributions,
        growth_multiplier: balance / divisor,
    };

    Projection { series, summary }
}

/// Round a snapshot to whole currency units.
///
/// Interest is taken as `total - principal` on the *rounded* values, so
/// `total == principal + interest` holds exactly in every emitted point.
fn snapshot(year: u32, balance: f64, contributions: f64) -> ProjectionPoint {
    let principal = contributions.round() as i64;
    let total = balance.round() as i64;
    ProjectionPoint {
        year,
        principal,
        interest: total - principal,
        total,
    }
}
