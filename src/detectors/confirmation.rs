use crate::detectors::{clip01, round4, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, NormalizedTrade};

const STREAK_WEIGHT: f64 = 0.6;
const NOTES_WEIGHT: f64 = 0.4;

/// Long one-way streaks plus self-reinforcing note language.
pub struct ConfirmationBias;

impl BiasDetector for ConfirmationBias {
    fn bias(&self) -> Bias {
        Bias::ConfirmationBias
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        let n = trades.len();
        if n < 2 {
            return BiasFinding::insufficient_data();
        }

        // Longest run of consecutive trades in the same known direction;
        // an unknown direction breaks the run.
        let mut max_streak = 0usize;
        let mut streak = 0usize;
        let mut prev_dir = None;
        for t in trades {
            if t.direction.is_known() {
                if prev_dir == Some(t.direction) {
                    streak += 1;
                } else {
                    streak = 1;
                }
                prev_dir = Some(t.direction);
            } else {
                streak = 0;
                prev_dir = None;
            }
            max_streak = max_streak.max(streak);
        }

        let confirming = trades
            .iter()
            .filter(|t| ctx.signals.confirming(&t.notes))
            .count();

        let streak_rate = max_streak as f64 / n as f64;
        let note_rate = confirming as f64 / n as f64;
        let confidence = clip01(STREAK_WEIGHT * streak_rate + NOTES_WEIGHT * note_rate);
        let detected = confidence > ctx.cfg.thresholds.confirmation;

        let explanation = if detected {
            format!(
                "Longest same-direction streak: {} of {} trades; confirming language in {:.2} of notes.",
                max_streak, n, note_rate
            )
        } else {
            "No strong confirmation bias detected.".to_string()
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
    use crate::models::Direction;
    use crate::test_helpers::base_trade;

    fn dir_trade(direction: Direction, notes: &str) -> NormalizedTrade {
        NormalizedTrade {
            direction,
            notes: notes.to_string(),
            ..base_trade()
        }
    }

    #[test]
    fn single_trade_is_insufficient() {
        let owner = CtxOwner::new();
        let f = ConfirmationBias.detect(&[base_trade()], &owner.ctx());
        assert!(!f.detected);
        assert_eq!(f.explanation, "Not enough trades to evaluate.");
    }

    #[test]
    fn all_same_direction_with_confirming_notes() {
        let owner = CtxOwner::new();
        let trades: Vec<NormalizedTrade> = (0..4)
            .map(|_| dir_trade(Direction::Long, "went exactly as expected"))
            .collect();
        let f = ConfirmationBias.detect(&trades, &owner.ctx());
        // Streak 4/4 and notes 4/4: 0.6 + 0.4.
        assert!((f.confidence - 1.0).abs() < 1e-9);
        assert!(f.detected);
    }

    #[test]
    fn alternating_directions_score_low() {
        let owner = CtxOwner::new();
        let trades = vec![
            dir_trade(Direction::Long, ""),
            dir_trade(Direction::Short, ""),
            dir_trade(Direction::Long, ""),
            dir_trade(Direction::Short, ""),
        ];
        let f = ConfirmationBias.detect(&trades, &owner.ctx());
        // Max streak 1 of 4 => 0.15.
        assert!((f.confidence - 0.15).abs() < 1e-9);
        assert!(!f.detected);
    }

    #[test]
    fn unknown_direction_breaks_the_streak() {
        let owner = CtxOwner::new();
        let trades = vec![
            dir_trade(Direction::Long, ""),
            dir_trade(Direction::Long, ""),
            dir_trade(Direction::Unknown, ""),
            dir_trade(Direction::Long, ""),
        ];
        let f = ConfirmationBias.detect(&trades, &owner.ctx());
        // Streak is 2, not 3.
        assert!((f.confidence - (0.6 * 2.0 / 4.0)).abs() < 1e-9);
    }

    #[test]
    fn streak_alone_can_cross_threshold() {
        let owner = CtxOwner::new();
        let trades: Vec<NormalizedTrade> =
            (0..3).map(|_| dir_trade(Direction::Short, "")).collect();
        let f = ConfirmationBias.detect(&trades, &owner.ctx());
        // 0.6 * 3/3 = 0.6 > 0.3.
        assert!(f.detected);
    }
}
