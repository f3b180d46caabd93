pub mod drawdown;
pub mod filter;
pub mod normalize;
pub mod projection;
pub mod ratios;
pub mod session;
pub mod stats;

pub use drawdown::{analyze_drawdown, DrawdownPoint, DrawdownSeries};
pub use filter::apply_filters;
pub use normalize::{classify, compute_r_multiple, is_break_even, is_win, normalize, TradeOutcome};
pub use projection::{project_equity_curve, ProjectionBands, DEFAULT_HORIZON};
pub use ratios::{compute_risk_ratios, RiskRatios};
pub use session::{classify_session, session_for_utc_hour};
pub use stats::{compute_stats, Stats};
