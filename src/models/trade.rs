use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Direction;

/// A trade record as submitted by the caller. Any subset of fields may be
/// absent; numeric fields tolerate JSON strings and malformed values decode
/// to 0.0 so a single bad record can never sink an analysis request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTrade {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub entry_price: f64,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub exit_price: f64,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub account_size: f64,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub fraction_invested: f64,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub direction: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub trade_reason: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub asset_name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub asset_type: String,
    #[serde(default, alias = "entry_timestamp", deserialize_with = "de_lenient_string")]
    pub entry_time: String,
    #[serde(default, alias = "exit_timestamp", deserialize_with = "de_lenient_string")]
    pub exit_time: String,
}

/// A trade after normalization: derived fields populated, categorical
/// fields lower-cased, timestamps parsed. Detectors only ever see these,
/// and only behind an immutable slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedTrade {
    pub entry_price: f64,
    pub exit_price: f64,
    pub account_size: f64,
    pub fraction_invested: f64,
    pub direction: Direction,
    pub notes: String,
    pub trade_reason: String,
    pub asset_name: String,
    pub asset_type: String,
    pub entry_at: Option<NaiveDateTime>,
    pub exit_at: Option<NaiveDateTime>,
    pub position_size: f64,
    pub pnl: f64,
    pub hold_hours: f64,
}

impl NormalizedTrade {
    pub fn is_winner(&self) -> bool {
        self.pnl > 0.0
    }

    pub fn is_loser(&self) -> bool {
        self.pnl < 0.0
    }
}

/// Accept a JSON number, a numeric string, or null. Anything unparsable
/// becomes 0.0 — the pipeline is total over malformed numeric input.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Num(f64),
        Text(String),
        Null,
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Num(v) if v.is_finite() => v,
        Lenient::Num(_) => 0.0,
        Lenient::Text(s) => s.trim().parse().unwrap_or(0.0),
        Lenient::Null => 0.0,
    })
}

/// Accept a JSON string or null (missing strings default to empty).
fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Null,
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(s) => s,
        Lenient::Null => String::new(),
    })
}
