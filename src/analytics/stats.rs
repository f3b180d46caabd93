use serde::{Deserialize, Serialize};

use crate::analytics::drawdown::analyze_drawdown;
use crate::analytics::normalize::{classify, TradeOutcome};
use crate::models::Trade;

/// Scalar KPIs over a (typically pre-filtered) trade set. Profit figures are
/// in R units. Every ratio resolves to 0 on an empty set, never NaN, because
/// the UI renders these fields unconditionally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub break_even_trades: usize,
    pub win_rate: f64,
    pub break_even_rate: f64,
    pub average_r_multiple: f64,
    /// Sum of r-multiples, i.e. net result in R.
    pub total_profit: f64,
    /// Gross positive R over |gross negative R|. INFINITY when there are
    /// wins but no losses; 0 when there are neither.
    pub profit_factor: f64,
    /// R-based expectancy; by this engine's convention equal to the average
    /// r-multiple.
    pub expectancy: f64,
    pub max_drawdown: f64,
}

/// Reduce a trade set to its KPI record. Placeholder trades are excluded
/// from every figure.
pub fn compute_stats(trades: &[Trade]) -> Stats {
    let live: Vec<&Trade> = trades.iter().filter(|t| !t.is_placeholder).collect();
    let total_trades = live.len();
    if total_trades == 0 {
        return Stats::default();
    }

    // Outcome counts
    let mut winning_trades = 0_usize;
    let mut losing_trades = 0_usize;
    let mut break_even_trades = 0_usize;
    for trade in &live {
        match classify(trade) {
            TradeOutcome::Win => winning_trades += 1,
            TradeOutcome::Loss => losing_trades += 1,
            TradeOutcome::BreakEven => break_even_trades += 1,
        }
    }

    let win_rate = winning_trades as f64 / total_trades as f64 * 100.0;
    let break_even_rate = break_even_trades as f64 / total_trades as f64 * 100.0;

    // R sums
    let total_profit: f64 = live.iter().map(|t| t.r_multiple).sum();
    let average_r_multiple = total_profit / total_trades as f64;

    let gross_profit: f64 = live
        .iter()
        .map(|t| t.r_multiple)
        .filter(|r| *r > 0.0)
        .sum();
    let gross_loss: f64 = live
        .iter()
        .map(|t| t.r_multiple)
        .filter(|r| *r < 0.0)
        .sum::<f64>()
        .abs();

    let profit_factor = if gross_loss > 0.0 {
        gross_profit / gross_loss
    } else if gross_profit > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    let max_drawdown = analyze_drawdown(trades).max_drawdown;

    Stats {
        total_trades,
        winning_trades,
        losing_trades,
        break_even_trades,
        win_rate,
        break_even_rate,
        average_r_multiple,
        total_profit,
        profit_factor,
        expectancy: average_r_multiple,
        max_drawdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{trade_with_r, trades_from_days};

    #[test]
    fn test_empty_set_is_all_zeros() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.profit_factor, 0.0);
        assert_eq!(stats.average_r_multiple, 0.0);
        assert_eq!(stats.max_drawdown, 0.0);
        assert!(!stats.expectancy.is_nan());
    }

    #[test]
    fn test_outcome_counts_partition_the_set() {
        let trades = trades_from_days(&[2.0, -1.0, 0.0, 1.5, -0.5]);
        let stats = compute_stats(&trades);
        assert_eq!(stats.total_trades, 5);
        assert_eq!(
            stats.winning_trades + stats.losing_trades + stats.break_even_trades,
            stats.total_trades
        );
        assert_eq!(stats.winning_trades, 2);
        assert_eq!(stats.losing_trades, 2);
        assert_eq!(stats.break_even_trades, 1);
        assert_eq!(stats.win_rate, 40.0);
        assert_eq!(stats.break_even_rate, 20.0);
    }

    #[test]
    fn test_r_based_kpis() {
        let trades = trades_from_days(&[2.0, -1.0, 1.0]);
        let stats = compute_stats(&trades);
        assert_eq!(stats.total_profit, 2.0);
        assert!((stats.average_r_multiple - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.expectancy, stats.average_r_multiple);
        assert_eq!(stats.profit_factor, 3.0); // 3R won over 1R lost
    }

    #[test]
    fn test_profit_factor_sentinels() {
        // Wins and no losses: unbounded
        let winners = trades_from_days(&[1.0, 2.0]);
        assert!(compute_stats(&winners).profit_factor.is_infinite());

        // Neither wins nor losses: 0, not infinity
        let flat = trades_from_days(&[0.0, 0.0]);
        assert_eq!(compute_stats(&flat).profit_factor, 0.0);
    }

    #[test]
    fn test_max_drawdown_matches_analyzer() {
        let trades = trades_from_days(&[1.0, 1.0, -1.0, -1.0, -1.0, 2.0]);
        let stats = compute_stats(&trades);
        assert_eq!(stats.max_drawdown, 3.0);
    }

    #[test]
    fn test_placeholders_never_count() {
        let mut trades = trades_from_days(&[1.0, -1.0]);
        let mut placeholder = trade_with_r(10.0, 999);
        placeholder.is_placeholder = true;
        trades.push(placeholder);

        let stats = compute_stats(&trades);
        assert_eq!(stats.total_trades, 2);
        assert_eq!(stats.total_profit, 0.0);
    }
}
