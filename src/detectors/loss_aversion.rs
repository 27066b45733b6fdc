use crate::detectors::{round4, safe_divide, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, NormalizedTrade};

/// Quick wins, slow losses: winners banked fast while losers are nursed.
pub struct LossAversion;

impl BiasDetector for LossAversion {
    fn bias(&self) -> Bias {
        Bias::LossAversion
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        if trades.len() < 2 {
            return BiasFinding::insufficient_data();
        }

        let cfg = ctx.cfg;
        let mut winners = 0usize;
        let mut quick_wins = 0usize;
        let mut losers = 0usize;
        let mut slow_losses = 0usize;

        for t in trades {
            if t.is_winner() {
                winners += 1;
                if t.hold_hours < cfg.quick_win_hours {
                    quick_wins += 1;
                }
            } else if t.is_loser() {
                losers += 1;
                if t.hold_hours > cfg.slow_loss_hours {
                    slow_losses += 1;
                }
            }
        }

        // A side with no trades contributes 0, never NaN.
        let quick_rate = safe_divide(quick_wins as f64, winners as f64);
        let slow_rate = safe_divide(slow_losses as f64, losers as f64);
        let confidence = (quick_rate + slow_rate) / 2.0;
        let detected = confidence > cfg.thresholds.loss_aversion;

        let mut parts = Vec::new();
        if quick_rate > cfg.thresholds.loss_aversion {
            parts.push(format!(
                "Winners closed within {:.0}h of entry ({:.2})",
                cfg.quick_win_hours, quick_rate
            ));
        }
        if slow_rate > cfg.thresholds.loss_aversion {
            parts.push(format!(
                "Losses held beyond {:.0}h ({:.2})",
                cfg.slow_loss_hours, slow_rate
            ));
        }
        let explanation = if parts.is_empty() {
            "No strong loss aversion detected.".to_string()
        } else {
            parts.join("; ")
        };

        BiasFinding {
            detected,
            confidence: round4(confidence),
            explanation,
            triggers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::test_ctx::CtxOwner;
    use crate::test_helpers::base_trade;

    fn win(hold_hours: f64) -> NormalizedTrade {
        NormalizedTrade {
            pnl: 50.0,
            hold_hours,
            ..base_trade()
        }
    }

    fn loss(hold_hours: f64) -> NormalizedTrade {
        NormalizedTrade {
            pnl: -50.0,
            hold_hours,
            ..base_trade()
        }
    }

    #[test]
    fn single_trade_is_insufficient() {
        let owner = CtxOwner::new();
        let f = LossAversion.detect(&[win(1.0)], &owner.ctx());
        assert!(!f.detected);
        assert_eq!(f.confidence, 0.0);
        assert_eq!(f.explanation, "Not enough trades to evaluate.");
    }

    #[test]
    fn quick_wins_and_slow_losses_detected() {
        let owner = CtxOwner::new();
        // All winners banked in 2h, all losers nursed for 100h.
        let trades = vec![win(2.0), win(3.0), loss(100.0), loss(120.0)];
        let f = LossAversion.detect(&trades, &owner.ctx());
        assert!((f.confidence - 1.0).abs() < 1e-9);
        assert!(f.detected);
    }

    #[test]
    fn patient_wins_and_fast_losses_are_clear() {
        let owner = CtxOwner::new();
        let trades = vec![win(48.0), win(72.0), loss(5.0), loss(10.0)];
        let f = LossAversion.detect(&trades, &owner.ctx());
        assert_eq!(f.confidence, 0.0);
        assert!(!f.detected);
    }

    #[test]
    fn two_losses_still_score() {
        // No winners: the quick-win side is 0, not undefined.
        let owner = CtxOwner::new();
        let trades = vec![loss(100.0), loss(120.0)];
        let f = LossAversion.detect(&trades, &owner.ctx());
        assert!((f.confidence - 0.5).abs() < 1e-9);
        assert!(f.detected);
    }

    #[test]
    fn breakeven_trades_count_for_neither_side() {
        let owner = CtxOwner::new();
        let trades = vec![base_trade(), base_trade(), win(2.0)];
        let f = LossAversion.detect(&trades, &owner.ctx());
        // One winner, quick; no losers.
        assert!((f.confidence - 0.5).abs() < 1e-9);
    }
}
