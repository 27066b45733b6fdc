use crate::detectors::{clip01, round4, safe_divide, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, NormalizedTrade};

const REPEAT_WINNER_WEIGHT: f64 = 0.25;
const AVOID_LOSS_WEIGHT: f64 = 0.25;
const VOLATILITY_WEIGHT: f64 = 0.25;
const NOTES_WEIGHT: f64 = 0.125;
const FLIP_WEIGHT: f64 = 0.125;

/// The last trade steering the next one: win-stay with size-up, loss-avoid,
/// post-win sizing swings, recency language, and rapid direction flips.
pub struct RecencyBias;

impl BiasDetector for RecencyBias {
    fn bias(&self) -> Bias {
        Bias::RecencyBias
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        let n = trades.len();
        if n < 2 {
            return BiasFinding::insufficient_data();
        }

        let mut wins = 0usize;
        let mut repeats = 0usize;
        let mut losses = 0usize;
        let mut avoids = 0usize;
        let mut flips = 0usize;
        let mut sizes_after_win = Vec::new();
        let mut sizes_after_loss = Vec::new();

        for pair in trades.windows(2) {
            let (t, next) = (&pair[0], &pair[1]);

            if t.is_winner() {
                wins += 1;
                if t.direction.is_known()
                    && next.direction == t.direction
                    && next.fraction_invested > t.fraction_invested
                {
                    repeats += 1;
                }
                sizes_after_win.push(next.position_size);
            }

            if t.is_loser() {
                losses += 1;
                if (next.direction.is_known() && next.direction != t.direction)
                    || next.position_size < t.position_size
                {
                    avoids += 1;
                }
                sizes_after_loss.push(next.position_size);
            }

            if t.direction.is_known() && next.direction.is_known() && next.direction != t.direction
            {
                flips += 1;
            }
        }

        let recency_notes = trades
            .iter()
            .filter(|t| ctx.signals.recency_language(&t.notes))
            .count();

        let score_repeat = safe_divide(repeats as f64, wins as f64);
        let score_avoid = safe_divide(avoids as f64, losses as f64);

        let mean_after_win = mean(&sizes_after_win);
        let mean_after_loss = mean(&sizes_after_loss);
        let score_volatility = if mean_after_win > mean_after_loss && mean_after_win > 0.0 {
            ((mean_after_win - mean_after_loss) / mean_after_win).min(1.0)
        } else {
            0.0
        };

        let score_flips = flips as f64 / (n - 1) as f64;
        let score_notes = recency_notes as f64 / n as f64;

        let confidence = clip01(
            REPEAT_WINNER_WEIGHT * score_repeat
                + AVOID_LOSS_WEIGHT * score_avoid
                + VOLATILITY_WEIGHT * score_volatility
                + NOTES_WEIGHT * score_notes
                + FLIP_WEIGHT * score_flips,
        );
        let detected = confidence > ctx.cfg.thresholds.recency;

        let mut triggers = Vec::new();
        if score_repeat > 0.5 {
            triggers.push("repeating winners (win-stay)".to_string());
        }
        if score_avoid > 0.5 {
            triggers.push("cutting/reversing after losses".to_string());
        }
        if score_volatility > 0.5 {
            triggers.push("larger bets after wins (house-money effect)".to_string());
        }
        if score_notes > 0.5 {
            triggers.push("notes citing recent trades".to_string());
        }
        if score_flips > 0.5 {
            triggers.push("rapid direction flips".to_string());
        }

        let explanation = if triggers.is_empty() {
            "no strong recency signals".to_string()
        } else {
            triggers.join("; ")
        };

        BiasFinding {
            detected,
            confidence: round4(confidence),
            explanation,
            triggers,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
