use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Trade;

pub const DEFAULT_HORIZON: usize = 100;

// Seed values when history has no wins or no losses, so the bands keep a
// usable width instead of collapsing to zero.
const DEFAULT_AVG_WIN_R: f64 = 1.5;
const DEFAULT_AVG_LOSS_R: f64 = -1.0;

/// Best- and worst-case forward equity series, both anchored at the last
/// real cumulative R. Index 0 of each series is the anchor itself.
/// Illustrative simulation, not a prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionBands {
    pub anchor: f64,
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
struct ScenarioParams {
    win_rate: f64,
    avg_win_r: f64,
    avg_loss_r: f64,
}

/// Project the equity curve `horizon` trades forward. The random source is
/// caller-supplied so tests can pin a seeded generator.
pub fn project_equity_curve<R: Rng + ?Sized>(
    trades: &[Trade],
    horizon: usize,
    rng: &mut R,
) -> ProjectionBands {
    let returns: Vec<f64> = trades
        .iter()
        .filter(|t| !t.is_placeholder)
        .map(|t| t.r_multiple)
        .collect();

    let anchor: f64 = returns.iter().sum();

    let wins: Vec<f64> = returns.iter().copied().filter(|r| *r > 0.0).collect();
    let losses: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();

    let win_rate = if returns.is_empty() {
        0.0
    } else {
        wins.len() as f64 / returns.len() as f64
    };
    let avg_win_r = if wins.is_empty() {
        DEFAULT_AVG_WIN_R
    } else {
        wins.iter().sum::<f64>() / wins.len() as f64
    };
    let avg_loss_r = if losses.is_empty() {
        DEFAULT_AVG_LOSS_R
    } else {
        losses.iter().sum::<f64>() / losses.len() as f64
    };

    let best = ScenarioParams {
        win_rate: (win_rate * 1.15).min(0.95),
        avg_win_r: avg_win_r * 1.1,
        avg_loss_r: avg_loss_r * 0.9,
    };
    let worst = ScenarioParams {
        win_rate: (win_rate * 0.85).max(0.05),
        avg_win_r: avg_win_r * 0.9,
        avg_loss_r: avg_loss_r * 1.1,
    };

    ProjectionBands {
        anchor,
        best: simulate(anchor, best, horizon, rng),
        worst: simulate(anchor, worst, horizon, rng),
    }
}

fn simulate<R: Rng + ?Sized>(
    anchor: f64,
    params: ScenarioParams,
    horizon: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut series = Vec::with_capacity(horizon + 1);
    let mut cumulative = anchor;
    series.push(cumulative);
    for _ in 0..horizon {
        // Independent Bernoulli trial per future trade
        cumulative += if rng.gen_range(0.0..1.0) < params.win_rate {
            params.avg_win_r
        } else {
            params.avg_loss_r
        };
        series.push(cumulative);
    }
    series
}
