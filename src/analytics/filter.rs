use crate::models::{FilterCriteria, Trade};

/// Reduce a trade collection to the subset matching all present criteria.
/// Pure and order-preserving: the input is never mutated and identical
/// inputs always produce identical output, so callers may memoize freely.
pub fn apply_filters(trades: &[Trade], criteria: &FilterCriteria) -> Vec<Trade> {
    trades
        .iter()
        .filter(|trade| matches_criteria(trade, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(trade: &Trade, criteria: &FilterCriteria) -> bool {
    if let Some(session) = criteria.session {
        if trade.session != session {
            return false;
        }
    }
    if let Some(strategy_id) = &criteria.strategy_id {
        if trade.strategy_id.as_deref() != Some(strategy_id.as_str()) {
            return false;
        }
    }
    if let Some(direction) = criteria.direction {
        if trade.direction != Some(direction) {
            return false;
        }
    }
    if let Some(pair) = &criteria.pair {
        if trade.pair.as_deref() != Some(pair.as_str()) {
            return false;
        }
    }
    if let Some(account_id) = &criteria.account_id {
        if trade.account_id.as_deref() != Some(account_id.as_str()) {
            return false;
        }
    }
    if let Some((start, end)) = criteria.date_range {
        if trade.entry_date < start || trade.entry_date > end {
            return false;
        }
    }
    if let Some(timeframe) = &criteria.timeframe {
        if trade.timeframe.as_deref() != Some(timeframe.as_str()) {
            return false;
        }
    }
    if let Some(tag) = &criteria.tag {
        if !trade.has_tag(tag) {
            return false;
        }
    }
    // Live/backtest is a tag convention, not a column: "account" tags a live
    // trade, "backtest" a backtest.
    if let Some(strategy_type) = criteria.strategy_type {
        if !trade.tags.iter().any(|t| t == strategy_type.tag()) {
            return false;
        }
    }

    true
}
