use crate::detectors::{clip01, round4, safe_divide, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, NormalizedTrade};

const ESCALATION_WEIGHT: f64 = 0.7;
const EMOTION_WEIGHT: f64 = 0.3;

/// Sizing up right after a loss, with emotional note language as the
/// secondary signal.
pub struct RevengeTrading;

impl BiasDetector for RevengeTrading {
    fn bias(&self) -> Bias {
        Bias::RevengeTrading
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        let n = trades.len();
        if n < 2 {
            return BiasFinding::insufficient_data();
        }

        let mut loss_followups = 0usize;
        let mut escalations = 0usize;
        for pair in trades.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if prev.is_loser() {
                loss_followups += 1;
                if cur.fraction_invested
                    > prev.fraction_invested * ctx.cfg.revenge_escalation_ratio
                {
                    escalations += 1;
                }
            }
        }

        let emotional = trades
            .iter()
            .filter(|t| ctx.signals.emotional(&t.notes))
            .count();

        let escalation_rate = safe_divide(escalations as f64, loss_followups as f64);
        let emotional_rate = emotional as f64 / n as f64;
        let confidence =
            clip01(ESCALATION_WEIGHT * escalation_rate + EMOTION_WEIGHT * emotional_rate);
        let detected = confidence > ctx.cfg.thresholds.revenge;

        let mut parts = Vec::new();
        if escalation_rate > 0.4 {
            parts.push(format!(
                "Increased position size after losses ({:.2})",
                escalation_rate
            ));
        }
        if emotional_rate > 0.2 {
            parts.push(format!("Emotional language in notes ({:.2})", emotional_rate));
        }
        let explanation = if parts.is_empty() {
            "No strong revenge trading detected.".to_string()
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
