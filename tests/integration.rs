mod common;

use common::{noted, raw_trade};
use mindtrade_engine::engine::BiasEngine;
use mindtrade_engine::models::{Bias, RawTrade, RiskLevel};

#[test]
fn oversized_weak_trades_flag_overconfidence() {
    // 10 trades: 3 risk 30% of the account for well under a 5% return.
    let mut trades: Vec<RawTrade> = (0..7)
        .map(|i| raw_trade(i, "long", 0.1, 100.0, 110.0))
        .collect();
    trades.extend((7..10).map(|i| raw_trade(i, "long", 0.3, 100.0, 101.0)));

    let report = BiasEngine::default().analyze(&trades);
    let finding = &report.details[&Bias::Overconfidence];
    assert!((finding.confidence - 0.3).abs() < 1e-9);
    assert!(finding.detected);
}

#[test]
fn post_loss_escalation_flags_revenge_trading() {
    // Alternating win/loss, doubling the stake right after every loss,
    // with frustrated notes along the way.
    let trades = vec![
        raw_trade(0, "long", 0.05, 100.0, 110.0),
        raw_trade(1, "long", 0.05, 100.0, 90.0),
        noted(raw_trade(2, "long", 0.10, 100.0, 110.0), "frustrated, winning it back"),
        raw_trade(3, "long", 0.10, 100.0, 90.0),
        noted(raw_trade(4, "long", 0.20, 100.0, 110.0), "frustrated again"),
    ];

    let report = BiasEngine::default().analyze(&trades);
    let finding = &report.details[&Bias::RevengeTrading];
    // Escalation on 2 of 2 post-loss trades, emotional notes on 2 of 5.
    assert!((finding.confidence - 0.82).abs() < 1e-9);
    assert!(finding.detected);
}

#[test]
fn two_losses_score_loss_aversion_without_winners() {
    // Both trades lose and are held four days; the quick-win side is 0.
    let mut first = raw_trade(0, "long", 0.1, 100.0, 90.0);
    first.exit_time = "2024-03-05T14:00".to_string();
    let mut second = raw_trade(1, "long", 0.1, 100.0, 85.0);
    second.exit_time = "2024-03-06T14:00".to_string();

    let report = BiasEngine::default().analyze(&[first, second]);
    let finding = &report.details[&Bias::LossAversion];
    assert_ne!(finding.explanation, "Not enough trades to evaluate.");
    assert!((finding.confidence - 0.5).abs() < 1e-9);
    assert!(finding.detected);
}

#[test]
fn peer_data_feeds_only_herd_behavior() {
    let mut trades: Vec<RawTrade> = (0..2)
        .map(|i| raw_trade(i, "long", 0.1, 100.0, 101.0))
        .collect();
    for t in &mut trades {
        t.asset_type = "crypto".to_string();
    }
    let mut peers: Vec<RawTrade> = (0..3)
        .map(|_| raw_trade(0, "long", 0.1, 100.0, 101.0))
        .collect();
    peers.push(raw_trade(1, "long", 0.1, 100.0, 101.0));
    for p in &mut peers {
        p.asset_type = "crypto".to_string();
    }

    let engine = BiasEngine::default();
    let without = engine.analyze(&trades);
    let with = engine.analyze_with_peers(&trades, Some(&peers));

    // Both days match the unanimous peer direction: 0.4 + 0.3 * 1.0.
    let herd = &with.details[&Bias::HerdBehavior];
    assert!((herd.confidence - 0.7).abs() < 1e-9);
    assert!(herd.detected);

    // Every other finding is unchanged by the peer set.
    for bias in Bias::ALL {
        if bias != Bias::HerdBehavior {
            assert_eq!(without.details[&bias], with.details[&bias]);
        }
    }
}

#[test]
fn unparsable_timestamps_stay_deterministic() {
    let mut trades: Vec<RawTrade> = (0..4)
        .map(|i| raw_trade(i, "long", 0.1, 100.0, 105.0))
        .collect();
    trades[2].entry_time = "sometime last week".to_string();
    trades[2].exit_time = String::new();

    let engine = BiasEngine::default();
    let first = engine.analyze(&trades);
    trades.reverse();
    let second = engine.analyze(&trades);
    assert_eq!(first, second);
}

#[test]
fn report_json_matches_output_contract() {
    let trades = vec![
        raw_trade(0, "long", 0.1, 100.0, 110.0),
        raw_trade(1, "short", 0.1, 100.0, 90.0),
    ];
    let report = BiasEngine::default().analyze(&trades);
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["detected_biases"].is_array());
    assert!(json["bias_count"].is_number());
    assert_eq!(json["total_trades"], 2);
    assert!(json["overall_confidence"].is_number());
    assert!(json["risk_level"].is_string());

    let details = json["details"].as_object().unwrap();
    assert_eq!(details.len(), 7);
    for name in [
        "Overconfidence",
        "Loss Aversion",
        "Confirmation Bias",
        "FOMO",
        "Recency Bias",
        "Revenge Trading",
        "Herd Behavior",
    ] {
        let entry = details
            .get(name)
            .unwrap_or_else(|| panic!("missing details entry for {}", name));
        assert!(entry["bias_detected"].is_boolean());
        assert!(entry["confidence_score"].is_number());
        assert!(entry["explanation"].is_string());
    }
}

#[test]
fn loud_history_escalates_risk_level() {
    // A long-only crypto streak: oversized stakes for weak returns, quick
    // wins, slow losses, post-loss doubling, and notes full of hype.
    let notes = "late entry, fomo, chasing it like everyone on reddit, frustrated again, knew it";
    let fractions = [0.30, 0.30, 0.50, 0.50, 0.85, 0.85];
    let trades: Vec<RawTrade> = fractions
        .iter()
        .enumerate()
        .map(|(i, &fraction)| {
            let losing = i % 2 == 1;
            let exit = if losing { 90.0 } else { 101.0 };
            let mut t = noted(raw_trade(i as u32, "long", fraction, 100.0, exit), notes);
            t.trade_reason = "fomo".to_string();
            t.asset_type = "crypto".to_string();
            if losing {
                // Nurse the losers for five days.
                t.exit_time = format!("2024-03-{:02}T14:00", i + 6);
            }
            t
        })
        .collect();

    let report = BiasEngine::default().analyze(&trades);
    assert!(report.bias_count >= 4);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert!(report.detected_biases.contains(&Bias::Overconfidence));
    assert!(report.detected_biases.contains(&Bias::RevengeTrading));
    assert!(report.detected_biases.contains(&Bias::Fomo));
    assert!(report.detected_biases.contains(&Bias::HerdBehavior));
}

#[test]
fn quiet_history_stays_low_risk() {
    // Small stakes, mixed directions, two-day holds on both sides.
    let mut trades = vec![
        raw_trade(0, "long", 0.05, 100.0, 108.0),
        raw_trade(1, "short", 0.05, 100.0, 94.0),
        raw_trade(2, "long", 0.05, 100.0, 107.0),
        raw_trade(3, "short", 0.05, 100.0, 103.0),
    ];
    for (i, t) in trades.iter_mut().enumerate() {
        t.exit_time = format!("2024-03-{:02}T14:00", i + 3);
    }
    let report = BiasEngine::default().analyze(&trades);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(report.bias_count, 0);
}
