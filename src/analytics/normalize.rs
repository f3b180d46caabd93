use uuid::Uuid;

use crate::analytics::session::classify_session;
use crate::error::ModelError;
use crate::models::{Direction, Session, Trade, TradeInput};

/// Risk-normalized outcome: reward as a multiple of the entry-to-stop
/// distance. Zero risk (stop at entry, or missing stop) yields 0.
/// No clamping is applied in either direction.
pub fn compute_r_multiple(entry: f64, exit: f64, sl: f64, direction: Direction) -> f64 {
    let risk = (entry - sl).abs();
    if risk > 0.0 {
        let reward = match direction {
            Direction::Long => exit - entry,
            Direction::Short => entry - exit,
        };
        reward / risk
    } else {
        0.0
    }
}

/// Win test. The raw price comparison is ground truth when direction and
/// both prices are known; partial exits can leave r_multiple positive while
/// the prices disagree. Only without that data does r_multiple decide.
pub fn is_win(trade: &Trade) -> bool {
    match (trade.direction, trade.entry_price, trade.exit_price) {
        (Some(Direction::Long), Some(entry), Some(exit)) => exit > entry,
        (Some(Direction::Short), Some(entry), Some(exit)) => exit < entry,
        _ => trade.r_multiple > 0.0,
    }
}

/// Break-even means an r-multiple of exactly 0, not a tolerance band.
pub fn is_break_even(trade: &Trade) -> bool {
    trade.r_multiple == 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOutcome {
    Win,
    Loss,
    BreakEven,
}

/// Classify a trade into exactly one outcome. Break-even takes precedence,
/// so wins + losses + break-evens always partitions the set.
pub fn classify(trade: &Trade) -> TradeOutcome {
    if is_break_even(trade) {
        TradeOutcome::BreakEven
    } else if is_win(trade) {
        TradeOutcome::Win
    } else {
        TradeOutcome::Loss
    }
}

/// Turn a raw submission into a well-formed Trade: parse direction, derive
/// r_multiple from prices unless an explicit value was supplied, and resolve
/// the session bucket (falling back to Unknown). Edits re-enter through the
/// same path.
pub fn normalize(input: TradeInput) -> Result<Trade, ModelError> {
    let direction: Option<Direction> = input
        .direction
        .as_deref()
        .map(str::parse)
        .transpose()?;

    let r_multiple = match input.r_multiple {
        Some(r) => r,
        None => match (input.entry_price, input.exit_price, input.sl_price, direction) {
            (Some(entry), Some(exit), Some(sl), Some(dir)) => {
                compute_r_multiple(entry, exit, sl, dir)
            }
            _ => 0.0,
        },
    };

    let session: Session = match input.session.as_deref() {
        Some(name) => name.parse()?,
        None => classify_session(input.entry_time.as_deref(), input.entry_timezone.as_deref()),
    };

    Ok(Trade {
        id: input
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        entry_date: input.entry_date,
        exit_date: input.exit_date,
        entry_time: input.entry_time,
        exit_time: input.exit_time,
        entry_timezone: input.entry_timezone,
        entry_price: input.entry_price,
        exit_price: input.exit_price,
        sl_price: input.sl_price,
        direction,
        r_multiple,
        session,
        strategy_id: input.strategy_id,
        account_id: input.account_id,
        pair: input.pair,
        timeframe: input.timeframe,
        tags: input.tags,
        behavioral_tags: input.behavioral_tags,
        is_placeholder: input.is_placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::trade_with_r;
    use crate::models::Session;

    fn input() -> TradeInput {
        TradeInput {
            id: None,
            entry_date: 1_700_000_000,
            exit_date: None,
            entry_time: None,
            exit_time: None,
            entry_timezone: None,
            entry_price: None,
            exit_price: None,
            sl_price: None,
            direction: None,
            r_multiple: None,
            session: None,
            strategy_id: None,
            account_id: None,
            pair: None,
            timeframe: None,
            tags: vec![],
            behavioral_tags: vec![],
            is_placeholder: false,
        }
    }

    #[test]
    fn test_r_multiple_long_and_short() {
        // Long: risked 10, made 20
        assert_eq!(compute_r_multiple(100.0, 120.0, 90.0, Direction::Long), 2.0);
        // Long loser: full stop
        assert_eq!(compute_r_multiple(100.0, 90.0, 90.0, Direction::Long), -1.0);
        // Short: risked 10, made 5
        assert_eq!(compute_r_multiple(100.0, 95.0, 110.0, Direction::Short), 0.5);
        // Short loser beyond the stop is not clamped
        assert_eq!(compute_r_multiple(100.0, 130.0, 110.0, Direction::Short), -3.0);
    }

    #[test]
    fn test_stop_at_entry_means_zero_r() {
        // Undefined risk: entry == stop, exit irrelevant
        assert_eq!(compute_r_multiple(100.0, 150.0, 100.0, Direction::Long), 0.0);
        assert_eq!(compute_r_multiple(100.0, 50.0, 100.0, Direction::Short), 0.0);
    }

    #[test]
    fn test_is_win_prefers_price_comparison() {
        // Partial exits left r positive, but the raw prices say loss
        let mut trade = trade_with_r(0.4, 0);
        trade.direction = Some(Direction::Long);
        trade.entry_price = Some(100.0);
        trade.exit_price = Some(98.0);
        assert!(!is_win(&trade));
        assert!(trade.r_multiple > 0.0);
    }

    #[test]
    fn test_is_win_falls_back_to_r_multiple() {
        let mut trade = trade_with_r(0.7, 0);
        trade.direction = None;
        assert!(is_win(&trade));

        let mut trade = trade_with_r(-0.3, 0);
        trade.direction = Some(Direction::Long);
        trade.exit_price = None; // price comparison impossible
        assert!(!is_win(&trade));
    }

    #[test]
    fn test_classify_partitions_outcomes() {
        assert_eq!(classify(&trade_with_r(1.0, 0)), TradeOutcome::Win);
        assert_eq!(classify(&trade_with_r(-1.0, 0)), TradeOutcome::Loss);
        assert_eq!(classify(&trade_with_r(0.0, 0)), TradeOutcome::BreakEven);
    }

    #[test]
    fn test_normalize_derives_r_and_session() {
        let mut raw = input();
        raw.direction = Some("long".to_string());
        raw.entry_price = Some(100.0);
        raw.exit_price = Some(110.0);
        raw.sl_price = Some(95.0);
        raw.entry_time = Some("09:00".to_string());
        raw.entry_timezone = Some("America/New_York".to_string());

        let trade = normalize(raw).unwrap();
        assert_eq!(trade.r_multiple, 2.0);
        assert_eq!(trade.session, Session::Overlap);
        assert!(!trade.id.is_empty());
    }

    #[test]
    fn test_normalize_respects_explicit_r_and_session() {
        let mut raw = input();
        raw.direction = Some("short".to_string());
        raw.entry_price = Some(100.0);
        raw.exit_price = Some(90.0);
        raw.sl_price = Some(105.0);
        raw.r_multiple = Some(0.8); // partial exits
        raw.session = Some("Asia".to_string());

        let trade = normalize(raw).unwrap();
        assert_eq!(trade.r_multiple, 0.8);
        assert_eq!(trade.session, Session::Asia);
    }

    #[test]
    fn test_normalize_unknown_session_when_underivable() {
        let trade = normalize(input()).unwrap();
        assert_eq!(trade.session, Session::Unknown);
        assert_eq!(trade.r_multiple, 0.0);
    }

    #[test]
    fn test_normalize_rejects_unknown_direction() {
        let mut raw = input();
        raw.direction = Some("sideways".to_string());
        assert!(normalize(raw).is_err());
    }
}
