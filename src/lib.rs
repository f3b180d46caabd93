//! Trade analytics engine for a personal trading journal.
//!
//! Turns a snapshot of trade records plus optional filter criteria into
//! derived value objects: KPI stats, drawdown/recovery series, risk-adjusted
//! return ratios, and stochastic equity projections. Every computation is a
//! pure function over the caller's snapshot; the engine holds no state and
//! performs no I/O. Persistence and rendering live with the caller.

pub mod analytics;
pub mod error;
pub mod models;

pub use analytics::{
    analyze_drawdown, apply_filters, classify_session, compute_risk_ratios, compute_stats,
    normalize, project_equity_curve, DrawdownPoint, DrawdownSeries, ProjectionBands, RiskRatios,
    Stats, TradeOutcome, DEFAULT_HORIZON,
};
pub use error::ModelError;
pub use models::{Direction, FilterCriteria, Session, StrategyType, Trade, TradeInput};
