pub mod direction;
pub mod report;
pub mod trade;

pub use direction::Direction;
pub use report::{Bias, BiasFinding, BiasReport, RiskLevel};
pub use trade::{NormalizedTrade, RawTrade};
