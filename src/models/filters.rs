use serde::{Deserialize, Serialize};

use crate::models::{Direction, Session};

/// Live trades carry the "account" tag, backtests the "backtest" tag.
/// There is no dedicated mode column; the tag convention is the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyType {
    Live,
    Backtest,
}

impl StrategyType {
    pub fn tag(&self) -> &'static str {
        match self {
            StrategyType::Live => "account",
            StrategyType::Backtest => "backtest",
        }
    }
}

/// Optional predicates over the trade collection. An absent field means
/// no constraint on that dimension; all present fields must match (AND).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub session: Option<Session>,
    pub strategy_id: Option<String>,
    pub direction: Option<Direction>,
    pub pair: Option<String>,
    pub account_id: Option<String>,
    /// Inclusive [start, end] bounds on entry_date, epoch seconds.
    pub date_range: Option<(i64, i64)>,
    pub timeframe: Option<String>,
    pub tag: Option<String>,
    pub strategy_type: Option<StrategyType>,
}
