use crate::detectors::{clip01, round4, safe_divide, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, NormalizedTrade};

/// Five independent fear-of-missing-out signals, averaged: late-entry
/// language, hype language, sudden risk jumps, re-entry chasing, and the
/// trader's own stated reason.
pub struct Fomo;

impl BiasDetector for Fomo {
    fn bias(&self) -> Bias {
        Bias::Fomo
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        let n = trades.len();
        if n == 0 {
            return BiasFinding::none("No trades to analyze.");
        }

        let signals = ctx.signals;
        let late = trades
            .iter()
            .filter(|t| signals.late_entry(&t.notes))
            .count();
        let hype = trades.iter().filter(|t| signals.hype(&t.notes)).count();
        let reentry = trades
            .iter()
            .filter(|t| signals.reentry_chasing(&t.notes))
            .count();
        let reason = trades
            .iter()
            .filter(|t| signals.fomo_reason(&t.trade_reason))
            .count();

        let mut risk_jumps = 0usize;
        for pair in trades.windows(2) {
            let prev = pair[0].fraction_invested;
            let cur = pair[1].fraction_invested;
            if prev > 0.0 && cur / prev > ctx.cfg.risk_jump_ratio {
                risk_jumps += 1;
            }
        }

        let score_late = safe_divide(late as f64, n as f64);
        let score_hype = safe_divide(hype as f64, n as f64);
        let score_risk = safe_divide(risk_jumps as f64, (n - 1).max(1) as f64);
        let score_reentry = safe_divide(reentry as f64, n as f64);
        let score_reason = safe_divide(reason as f64, n as f64);

        let confidence =
            clip01((score_late + score_hype + score_risk + score_reentry + score_reason) / 5.0);
        let detected = confidence > ctx.cfg.thresholds.fomo;

        let mut triggers = Vec::new();
        if score_late > 0.0 {
            triggers.push("late entry into strong trend".to_string());
        }
        if score_hype > 0.0 {
            triggers.push("urgent/hype language".to_string());
        }
        if score_risk > 0.0 {
            triggers.push("sudden jump in position size".to_string());
        }
        if score_reentry > 0.0 {
            triggers.push("rapid re-entry after missed move".to_string());
        }
        if score_reason > 0.0 {
            triggers.push("explicit FOMO/chasing reason".to_string());
        }

        let explanation = if triggers.is_empty() {
            "No obvious FOMO signals detected.".to_string()
        } else {
            format!("Detected FOMO indicators: {}.", triggers.join("; "))
        };

        BiasFinding {
            detected,
            confidence: round4(confidence),
            explanation,
            triggers,
        }
    }
}
