use serde::{Deserialize, Serialize};

use crate::analytics::drawdown::analyze_drawdown;
use crate::models::Trade;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_YEAR: f64 = 365.0;
/// Floor on the observed history span so short journals don't annualize
/// into absurd Calmar values.
const MIN_SPAN_DAYS: f64 = 30.0;

/// Classic risk-adjusted return ratios, computed over the r-multiple series
/// with an assumed risk-free rate of 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskRatios {
    pub sharpe: f64,
    pub sortino: f64,
    pub mar: f64,
    pub calmar: f64,
}

/// Compute all four ratios. Degenerate inputs (fewer than 2 trades, zero
/// variance, zero drawdown) resolve to 0; Sortino alone may be INFINITY
/// when there are no losing trades and the mean is positive.
pub fn compute_risk_ratios(trades: &[Trade]) -> RiskRatios {
    let live: Vec<&Trade> = trades.iter().filter(|t| !t.is_placeholder).collect();
    let returns: Vec<f64> = live.iter().map(|t| t.r_multiple).collect();
    let n = returns.len();
    if n == 0 {
        return RiskRatios::default();
    }

    let total_r: f64 = returns.iter().sum();
    let mean = total_r / n as f64;
    let max_drawdown = analyze_drawdown(trades).max_drawdown;

    // Sharpe: sample standard deviation
    let sharpe = if n < 2 {
        0.0
    } else {
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let stdev = variance.sqrt();
        if stdev > 0.0 { mean / stdev } else { 0.0 }
    };

    // Sortino: downside deviation over losing trades only, squared around 0
    let negatives: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    let sortino = if negatives.is_empty() {
        if mean > 0.0 { f64::INFINITY } else { 0.0 }
    } else {
        let downside =
            (negatives.iter().map(|r| r.powi(2)).sum::<f64>() / negatives.len() as f64).sqrt();
        mean / downside
    };

    // MAR: net R over max drawdown R
    let mar = if max_drawdown > 0.0 {
        total_r / max_drawdown
    } else {
        0.0
    };

    let calmar = if max_drawdown > 0.0 && n >= 2 {
        annualized_return(&live, total_r, n) / max_drawdown
    } else {
        0.0
    };

    RiskRatios {
        sharpe,
        sortino,
        mar,
        calmar,
    }
}

/// Compound the per-trade mean over the observed span, floored at 30 days.
/// A mean at or below -1R means the notional stake is gone within one
/// compounding step; annualization is undefined there and reports 0.
fn annualized_return(live: &[&Trade], total_r: f64, n: usize) -> f64 {
    let first = live.iter().map(|t| t.entry_date).min().unwrap_or(0);
    let last = live.iter().map(|t| t.entry_date).max().unwrap_or(0);
    let span_days = (last - first) as f64 / SECONDS_PER_DAY;
    let years = (span_days / DAYS_PER_YEAR).max(MIN_SPAN_DAYS / DAYS_PER_YEAR);

    let base = 1.0 + total_r / n as f64;
    if base <= 0.0 {
        return 0.0;
    }
    base.powf(n as f64 / years) - 1.0
}
