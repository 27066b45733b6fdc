pub mod confirmation;
pub mod fomo;
pub mod herd;
pub mod loss_aversion;
pub mod overconfidence;
pub mod recency;
pub mod revenge;

pub use confirmation::ConfirmationBias;
pub use fomo::Fomo;
pub use herd::HerdBehavior;
pub use loss_aversion::LossAversion;
pub use overconfidence::Overconfidence;
pub use recency::RecencyBias;
pub use revenge::RevengeTrading;

use crate::config::AnalysisConfig;
use crate::engine::text_signals::TextSignalMatcher;
use crate::models::{Bias, BiasFinding, NormalizedTrade};

/// Read-only inputs every detector shares. `peers` is consumed by Herd
/// Behavior only.
pub struct AnalysisContext<'a> {
    pub cfg: &'a AnalysisConfig,
    pub signals: &'a TextSignalMatcher,
    pub peers: Option<&'a [NormalizedTrade]>,
}

/// One heuristic analyzer. Stateless; every call sees the same normalized,
/// chronologically sorted slice and no detector's output feeds another.
pub trait BiasDetector: Send + Sync {
    fn bias(&self) -> Bias;
    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding;
}

/// The full detector set, in report order.
pub fn default_detectors() -> Vec<Box<dyn BiasDetector>> {
    vec![
        Box::new(Overconfidence),
        Box::new(LossAversion),
        Box::new(ConfirmationBias),
        Box::new(Fomo),
        Box::new(RecencyBias),
        Box::new(RevengeTrading),
        Box::new(HerdBehavior),
    ]
}

pub(crate) fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

pub(crate) fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

pub(crate) fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}
