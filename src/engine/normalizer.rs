use tracing::warn;

use crate::engine::timeline;
use crate::models::{Direction, NormalizedTrade, RawTrade};

/// Build a normalized trade from a raw record. Pure: the input is never
/// mutated, and no input can make this fail.
pub fn normalize(raw: &RawTrade) -> NormalizedTrade {
    let direction = Direction::parse(&raw.direction);
    let entry_at = timeline::parse_timestamp(&raw.entry_time);
    let exit_at = timeline::parse_timestamp(&raw.exit_time);

    let position_size = raw.account_size * raw.fraction_invested;
    // A zero entry price means zero shares, so pnl stays 0.0 instead of
    // dividing by zero.
    let shares = if raw.entry_price > 0.0 {
        position_size / raw.entry_price
    } else {
        0.0
    };
    let delta = match direction {
        Direction::Short => raw.entry_price - raw.exit_price,
        // Unknown keeps the long convention; the direction itself is never
        // guessed from the prices.
        Direction::Long | Direction::Unknown => raw.exit_price - raw.entry_price,
    };
    let pnl = shares * delta;

    let hold_hours = match (entry_at, exit_at) {
        (Some(entry), Some(exit)) => (exit - entry).num_seconds() as f64 / 3600.0,
        _ => 0.0,
    };

    NormalizedTrade {
        entry_price: raw.entry_price,
        exit_price: raw.exit_price,
        account_size: raw.account_size,
        fraction_invested: raw.fraction_invested,
        direction,
        notes: raw.notes.clone(),
        trade_reason: raw.trade_reason.trim().to_lowercase(),
        asset_name: raw.asset_name.clone(),
        asset_type: raw.asset_type.trim().to_lowercase(),
        entry_at,
        exit_at,
        position_size,
        pnl,
        hold_hours,
    }
}

/// Normalize a batch, emitting one data-quality note when timestamps were
/// present but unparsable.
pub fn normalize_all(raws: &[RawTrade]) -> Vec<NormalizedTrade> {
    let normalized: Vec<NormalizedTrade> = raws.iter().map(normalize).collect();

    let bad_timestamps = raws
        .iter()
        .zip(&normalized)
        .filter(|(raw, norm)| {
            (!raw.entry_time.trim().is_empty() && norm.entry_at.is_none())
                || (!raw.exit_time.trim().is_empty() && norm.exit_at.is_none())
        })
        .count();
    if bad_timestamps > 0 {
        warn!(
            "{} of {} trades carried unparsable timestamps; treated as earliest",
            bad_timestamps,
            raws.len()
        );
    }

    normalized
}
