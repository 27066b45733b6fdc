use crate::detectors::{clip01, round4, safe_divide, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, NormalizedTrade};

/// Flags histories where a large share of the account was repeatedly risked
/// for weak realized returns.
pub struct Overconfidence;

impl BiasDetector for Overconfidence {
    fn bias(&self) -> Bias {
        Bias::Overconfidence
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        let n = trades.len();
        if n == 0 {
            return BiasFinding::none("No trades to analyze.");
        }

        let cfg = ctx.cfg;
        let risky_weak = trades
            .iter()
            .filter(|t| {
                t.fraction_invested > cfg.large_fraction
                    && t.pnl < cfg.weak_return_ratio * t.account_size
            })
            .count();

        let confidence = clip01(safe_divide(risky_weak as f64, n as f64));
        let detected = confidence > cfg.thresholds.overconfidence;

        let explanation = if detected {
            format!(
                "High-risk trades with weak returns: {:.2} of history. \
                 Indicates tendency to overestimate own skill and take large risks.",
                confidence
            )
        } else {
            "No strong overconfidence signals detected.".to_string()
        };

        BiasFinding {
            detected,
            confidence: round4(confidence),
            explanation,
            triggers: Vec::new(),
        }
    }
}
