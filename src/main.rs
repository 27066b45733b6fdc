use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use mindtrade_engine::config::AnalysisConfig;
use mindtrade_engine::engine::BiasEngine;
use mindtrade_engine::models::RawTrade;

/// Accepts either a bare JSON array of trade records or an object with a
/// `trades` array and an optional `peer_trades` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum TradeFile {
    Bare(Vec<RawTrade>),
    Tagged {
        trades: Vec<RawTrade>,
        #[serde(default)]
        peer_trades: Option<Vec<RawTrade>>,
    },
}

fn main() -> Result<()> {
    let cfg = AnalysisConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let json_out = args.iter().any(|a| a == "--json");
    let path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .context("usage: mindtrade-engine <trades.json> [--json]")?;

    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let file: TradeFile =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path))?;

    let (trades, peer_trades) = match file {
        TradeFile::Bare(trades) => (trades, None),
        TradeFile::Tagged {
            trades,
            peer_trades,
        } => (trades, peer_trades),
    };

    let engine = BiasEngine::new(cfg);
    let report = engine.analyze_with_peers(&trades, peer_trades.as_deref());

    if json_out {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    Ok(())
}
