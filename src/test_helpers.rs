use chrono::NaiveDateTime;

use crate::models::{Direction, NormalizedTrade, RawTrade};

fn ts(raw: &str) -> NaiveDateTime {
    crate::engine::timeline::parse_timestamp(raw).unwrap()
}

/// A neutral normalized trade for struct-update building in detector tests:
/// flat pnl, small long position, one-hour hold.
pub fn base_trade() -> NormalizedTrade {
    NormalizedTrade {
        entry_price: 100.0,
        exit_price: 100.0,
        account_size: 1000.0,
        fraction_invested: 0.1,
        direction: Direction::Long,
        notes: String::new(),
        trade_reason: String::new(),
        asset_name: String::new(),
        asset_type: String::new(),
        entry_at: Some(ts("2024-03-01T10:00")),
        exit_at: Some(ts("2024-03-01T11:00")),
        position_size: 100.0,
        pnl: 0.0,
        hold_hours: 1.0,
    }
}

/// Like `base_trade`, shifted `days` forward so sequences stay in entry order.
pub fn trade_on_day(days: u32) -> NormalizedTrade {
    let entry = ts(&format!("2024-03-{:02}T10:00", days + 1));
    let exit = ts(&format!("2024-03-{:02}T11:00", days + 1));
    NormalizedTrade {
        entry_at: Some(entry),
        exit_at: Some(exit),
        ..base_trade()
    }
}

/// A raw record with sensible numbers and an indexed entry day.
pub fn raw_trade(day: u32, direction: &str, fraction: f64, entry: f64, exit: f64) -> RawTrade {
    RawTrade {
        entry_price: entry,
        exit_price: exit,
        account_size: 1000.0,
        fraction_invested: fraction,
        direction: direction.to_string(),
        entry_time: format!("2024-03-{:02}T10:00", day + 1),
        exit_time: format!("2024-03-{:02}T14:00", day + 1),
        ..RawTrade::default()
    }
}
