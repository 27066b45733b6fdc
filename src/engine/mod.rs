pub mod normalizer;
pub mod text_signals;
pub mod timeline;

pub use text_signals::TextSignalMatcher;

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::detectors::{self, AnalysisContext, BiasDetector};
use crate::models::{BiasFinding, BiasReport, NormalizedTrade, RawTrade};

/// Runs the full pipeline: normalize, sort, run every detector over the
/// same immutable sequence, aggregate into one report.
///
/// Holds no per-call state, so one engine can serve any number of
/// independent analysis calls.
pub struct BiasEngine {
    config: AnalysisConfig,
    signals: TextSignalMatcher,
    detectors: Vec<Box<dyn BiasDetector>>,
}

impl BiasEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_signals(config, TextSignalMatcher::new())
    }

    /// Swap in a custom keyword matcher (extended lexicons, localization).
    pub fn with_signals(config: AnalysisConfig, signals: TextSignalMatcher) -> Self {
        Self {
            config,
            signals,
            detectors: detectors::default_detectors(),
        }
    }

    pub fn analyze(&self, trades: &[RawTrade]) -> BiasReport {
        self.analyze_with_peers(trades, None)
    }

    pub fn analyze_with_peers(
        &self,
        trades: &[RawTrade],
        peer_trades: Option<&[RawTrade]>,
    ) -> BiasReport {
        let mut normalized = normalizer::normalize_all(trades);
        timeline::sort_chronological(&mut normalized);

        let normalized_peers: Option<Vec<NormalizedTrade>> = peer_trades.map(|peers| {
            let mut v = normalizer::normalize_all(peers);
            timeline::sort_chronological(&mut v);
            v
        });

        let ctx = AnalysisContext {
            cfg: &self.config,
            signals: &self.signals,
            peers: normalized_peers.as_deref(),
        };

        let mut details: BTreeMap<_, BiasFinding> = BTreeMap::new();
        for detector in &self.detectors {
            let finding = detector.detect(&normalized, &ctx);
            debug!(
                bias = %detector.bias(),
                detected = finding.detected,
                score = finding.confidence,
                "detector finished"
            );
            details.insert(detector.bias(), finding);
        }

        let report = BiasReport::from_findings(normalized.len(), details);
        debug!(
            biases = report.bias_count,
            risk = %report.risk_level,
            "analysis complete"
        );
        report
    }
}

impl Default for BiasEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
