use mindtrade_engine::models::RawTrade;

/// A raw record against a 1000 account, entered on successive March days.
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

pub fn noted(mut trade: RawTrade, notes: &str) -> RawTrade {
    trade.notes = notes.to_string();
    trade
}
