use serde::{Deserialize, Serialize};

/// Per-bias detection thresholds on the 0.0–1.0 confidence scale.
///
/// The heuristic lineages this engine reconciles disagreed on several of
/// these cutoffs, so they are calibration knobs rather than constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionThresholds {
    pub overconfidence: f64,
    pub loss_aversion: f64,
    pub confirmation: f64,
    pub fomo: f64,
    pub recency: f64,
    pub revenge: f64,
    pub herd: f64,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            overconfidence: 0.2,
            loss_aversion: 0.4,
            confirmation: 0.3,
            fomo: 0.5,
            recency: 0.5,
            revenge: 0.35,
            herd: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // Overconfidence
    /// Fraction of account above which a position counts as oversized.
    pub large_fraction: f64,
    /// PnL below this fraction of account size counts as a weak return.
    pub weak_return_ratio: f64,

    // Loss Aversion (hours)
    pub quick_win_hours: f64,
    pub slow_loss_hours: f64,

    // FOMO
    /// Position fraction growth vs. the previous trade that counts as a risk jump.
    pub risk_jump_ratio: f64,

    // Revenge Trading
    /// Post-loss position fraction growth that counts as escalation.
    pub revenge_escalation_ratio: f64,

    pub thresholds: DetectionThresholds,

    // Logging
    pub log_level: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            large_fraction: 0.25,
            weak_return_ratio: 0.05,
            quick_win_hours: 24.0,
            slow_loss_hours: 72.0,
            risk_jump_ratio: 1.5,
            revenge_escalation_ratio: 1.3,
            thresholds: DetectionThresholds::default(),
            log_level: "INFO".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let env_f64 = |key: &str, default: f64| -> f64 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Self {
            large_fraction: env_f64("BIAS_LARGE_FRACTION", defaults.large_fraction),
            weak_return_ratio: env_f64("BIAS_WEAK_RETURN_RATIO", defaults.weak_return_ratio),
            quick_win_hours: env_f64("BIAS_QUICK_WIN_HOURS", defaults.quick_win_hours),
            slow_loss_hours: env_f64("BIAS_SLOW_LOSS_HOURS", defaults.slow_loss_hours),
            risk_jump_ratio: env_f64("BIAS_RISK_JUMP_RATIO", defaults.risk_jump_ratio),
            revenge_escalation_ratio: env_f64(
                "BIAS_REVENGE_ESCALATION_RATIO",
                defaults.revenge_escalation_ratio,
            ),
            thresholds: DetectionThresholds {
                overconfidence: env_f64(
                    "BIAS_THRESHOLD_OVERCONFIDENCE",
                    defaults.thresholds.overconfidence,
                ),
                loss_aversion: env_f64(
                    "BIAS_THRESHOLD_LOSS_AVERSION",
                    defaults.thresholds.loss_aversion,
                ),
                confirmation: env_f64(
                    "BIAS_THRESHOLD_CONFIRMATION",
                    defaults.thresholds.confirmation,
                ),
                fomo: env_f64("BIAS_THRESHOLD_FOMO", defaults.thresholds.fomo),
                recency: env_f64("BIAS_THRESHOLD_RECENCY", defaults.thresholds.recency),
                revenge: env_f64("BIAS_THRESHOLD_REVENGE", defaults.thresholds.revenge),
                herd: env_f64("BIAS_THRESHOLD_HERD", defaults.thresholds.herd),
            },
            log_level: std::env::var("BIAS_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_on_unit_scale() {
        let cfg = AnalysisConfig::default();
        let t = &cfg.thresholds;
        for v in [
            t.overconfidence,
            t.loss_aversion,
            t.confirmation,
            t.fomo,
            t.recency,
            t.revenge,
            t.herd,
        ] {
            assert!((0.0..=1.0).contains(&v));
        }
        assert!(cfg.large_fraction > 0.0 && cfg.large_fraction < 1.0);
        assert!(cfg.revenge_escalation_ratio > 1.0);
    }
}
