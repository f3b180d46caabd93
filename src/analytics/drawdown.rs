use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::Trade;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One point on the cumulative-R equity curve. The first point is a synthetic
/// start anchor (no trade id) at 0, before the first trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawdownPoint {
    pub trade_id: Option<String>,
    pub entry_date: i64,
    /// "YYYY-MM-DD" label for the chart axis; empty when the timestamp is
    /// out of range.
    pub date: String,
    pub cumulative_r: f64,
    pub peak: f64,
    pub drawdown: f64,
}

fn date_label(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => {
            warn!("entry date {} out of range, point left unlabeled", timestamp);
            String::new()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawdownSeries {
    pub points: Vec<DrawdownPoint>,
    /// Largest gap between the running peak and the curve, in R units.
    pub max_drawdown: f64,
    pub max_consecutive_losses: usize,
    /// Whole days, rounded; 0 when no drawdown episode ever completed.
    pub avg_recovery_days: f64,
    pub max_recovery_days: f64,
}

/// Characterize equity deterioration over the entry-date-ordered sequence.
/// Placeholder trades are excluded; the input is never mutated.
pub fn analyze_drawdown(trades: &[Trade]) -> DrawdownSeries {
    let mut ordered: Vec<&Trade> = trades.iter().filter(|t| !t.is_placeholder).collect();
    ordered.sort_by_key(|t| t.entry_date); // stable, preserves input order on ties

    let start_date = ordered.first().map(|t| t.entry_date).unwrap_or(0);
    let mut points = Vec::with_capacity(ordered.len() + 1);
    points.push(DrawdownPoint {
        trade_id: None,
        entry_date: start_date,
        date: date_label(start_date),
        cumulative_r: 0.0,
        peak: 0.0,
        drawdown: 0.0,
    });

    let mut cumulative = 0.0_f64;
    let mut peak = 0.0_f64;
    let mut max_drawdown = 0.0_f64;

    let mut streak = 0_usize;
    let mut max_consecutive_losses = 0_usize;

    // Recovery episodes: open the first time the curve drops below the
    // running peak, close when it makes a new peak.
    let mut episode_start: Option<i64> = None;
    let mut recovery_days: Vec<f64> = Vec::new();

    for trade in &ordered {
        cumulative += trade.r_multiple;

        if cumulative > peak {
            if let Some(start) = episode_start.take() {
                recovery_days.push((trade.entry_date - start) as f64 / SECONDS_PER_DAY);
            }
            peak = cumulative;
        } else if cumulative < peak && episode_start.is_none() {
            episode_start = Some(trade.entry_date);
        }

        let drawdown = peak - cumulative;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }

        if trade.r_multiple < 0.0 {
            streak += 1;
            if streak > max_consecutive_losses {
                max_consecutive_losses = streak;
            }
        } else {
            streak = 0;
        }

        points.push(DrawdownPoint {
            trade_id: Some(trade.id.clone()),
            entry_date: trade.entry_date,
            date: date_label(trade.entry_date),
            cumulative_r: cumulative,
            peak,
            drawdown,
        });
    }

    let (avg_recovery_days, max_recovery_days) = if recovery_days.is_empty() {
        (0.0, 0.0)
    } else {
        let avg = recovery_days.iter().sum::<f64>() / recovery_days.len() as f64;
        let max = recovery_days.iter().cloned().fold(0.0_f64, f64::max);
        (avg.round(), max.round())
    };

    DrawdownSeries {
        points,
        max_drawdown,
        max_consecutive_losses,
        avg_recovery_days,
        max_recovery_days,
    }
}
