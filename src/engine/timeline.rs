use chrono::{NaiveDate, NaiveDateTime};

use crate::models::NormalizedTrade;

/// Accepted timestamp formats, tried in order. Date-only strings get a
/// midnight time.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Stable ascending sort by entry timestamp. Unparsable timestamps map to
/// the sentinel minimum so they always land first, keeping the order
/// deterministic and reproducible across runs.
pub fn sort_chronological(trades: &mut [NormalizedTrade]) {
    trades.sort_by_key(|t| t.entry_at.unwrap_or(NaiveDateTime::MIN));
}
