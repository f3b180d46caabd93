use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl FromStr for Direction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Direction::Long),
            "short" | "sell" => Ok(Direction::Short),
            other => Err(ModelError::UnknownDirection(other.to_string())),
        }
    }
}

/// Coarse trading-hours bucket derived from the UTC hour of entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    Asia,
    London,
    Overlap,
    #[serde(rename = "NY")]
    Ny,
    #[serde(rename = "LateNY")]
    LateNy,
    Unknown,
}

impl FromStr for Session {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Asia" => Ok(Session::Asia),
            "London" => Ok(Session::London),
            "Overlap" => Ok(Session::Overlap),
            "NY" => Ok(Session::Ny),
            "LateNY" => Ok(Session::LateNy),
            "Unknown" => Ok(Session::Unknown),
            other => Err(ModelError::UnknownSession(other.to_string())),
        }
    }
}

/// A normalized journal trade. Analytics only ever read these; edits go
/// back through normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub entry_date: i64,
    pub exit_date: Option<i64>,

    pub entry_time: Option<String>, // "HH:MM" local clock, independent of entry_date
    pub exit_time: Option<String>,
    pub entry_timezone: Option<String>,

    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub sl_price: Option<f64>,

    pub direction: Option<Direction>,
    pub r_multiple: f64,
    pub session: Session,

    pub strategy_id: Option<String>,
    pub account_id: Option<String>,
    pub pair: Option<String>,
    pub timeframe: Option<String>,

    pub tags: Vec<String>,
    pub behavioral_tags: Vec<String>,

    pub is_placeholder: bool,
}

impl Trade {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag) || self.behavioral_tags.iter().any(|t| t == tag)
    }
}

/// Raw user submission, before r-multiple and session derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeInput {
    pub id: Option<String>,
    pub entry_date: i64,
    pub exit_date: Option<i64>,

    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub entry_timezone: Option<String>,

    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub sl_price: Option<f64>,

    pub direction: Option<String>,

    /// Explicit override for partial-exit bookkeeping; derived from prices
    /// when absent.
    pub r_multiple: Option<f64>,
    /// Explicit session override; derived from entry time/timezone when absent.
    pub session: Option<String>,

    pub strategy_id: Option<String>,
    pub account_id: Option<String>,
    pub pair: Option<String>,
    pub timeframe: Option<String>,

    pub tags: Vec<String>,
    pub behavioral_tags: Vec<String>,

    pub is_placeholder: bool,
}
