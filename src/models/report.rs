use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The seven behavioral biases the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bias {
    #[serde(rename = "Overconfidence")]
    Overconfidence,
    #[serde(rename = "Loss Aversion")]
    LossAversion,
    #[serde(rename = "Confirmation Bias")]
    ConfirmationBias,
    #[serde(rename = "FOMO")]
    Fomo,
    #[serde(rename = "Recency Bias")]
    RecencyBias,
    #[serde(rename = "Revenge Trading")]
    RevengeTrading,
    #[serde(rename = "Herd Behavior")]
    HerdBehavior,
}

impl Bias {
    pub const ALL: [Bias; 7] = [
        Bias::Overconfidence,
        Bias::LossAversion,
        Bias::ConfirmationBias,
        Bias::Fomo,
        Bias::RecencyBias,
        Bias::RevengeTrading,
        Bias::HerdBehavior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Overconfidence => "Overconfidence",
            Bias::LossAversion => "Loss Aversion",
            Bias::ConfirmationBias => "Confirmation Bias",
            Bias::Fomo => "FOMO",
            Bias::RecencyBias => "Recency Bias",
            Bias::RevengeTrading => "Revenge Trading",
            Bias::HerdBehavior => "Herd Behavior",
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// One detector's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasFinding {
    #[serde(rename = "bias_detected")]
    pub detected: bool,
    #[serde(rename = "confidence_score")]
    pub confidence: f64,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,
}

impl BiasFinding {
    pub fn none(explanation: &str) -> Self {
        Self {
            detected: false,
            confidence: 0.0,
            explanation: explanation.to_string(),
            triggers: Vec::new(),
        }
    }

    /// The defined result for a detector that saw fewer trades than it needs.
    pub fn insufficient_data() -> Self {
        Self::none("Not enough trades to evaluate.")
    }
}

/// The combined report for one analysis call. Built fresh every time; the
/// engine never stores one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub detected_biases: Vec<Bias>,
    pub bias_count: usize,
    pub total_trades: usize,
    pub overall_confidence: f64,
    pub risk_level: RiskLevel,
    pub details: BTreeMap<Bias, BiasFinding>,
}

impl BiasReport {
    pub fn from_findings(total_trades: usize, details: BTreeMap<Bias, BiasFinding>) -> Self {
        let detected_biases: Vec<Bias> = Bias::ALL
            .iter()
            .copied()
            .filter(|b| details.get(b).map(|f| f.detected).unwrap_or(false))
            .collect();
        let bias_count = detected_biases.len();

        let overall_confidence = if details.is_empty() {
            0.0
        } else {
            details.values().map(|f| f.confidence).sum::<f64>() / details.len() as f64
        };

        let risk_level = if bias_count >= 4 || overall_confidence > 0.6 {
            RiskLevel::High
        } else if bias_count >= 2 || overall_confidence > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        Self {
            detected_biases,
            bias_count,
            total_trades,
            overall_confidence,
            risk_level,
            details,
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(70));
        println!("  BIAS ANALYSIS REPORT");
        println!("{}", "=".repeat(70));
        println!("  Trades analyzed:    {}", self.total_trades);
        println!("  Biases detected:    {}", self.bias_count);
        println!(
            "  Overall confidence: {:.1}%",
            self.overall_confidence * 100.0
        );
        println!("  Risk level:         {}", self.risk_level);
        println!();
        println!("  PER-BIAS FINDINGS");
        println!("  ───────────────────────────────────");
        for bias in Bias::ALL {
            if let Some(finding) = self.details.get(&bias) {
                println!(
                    "  {:>18}: {} | score {:.2}",
                    bias.as_str(),
                    if finding.detected { "DETECTED" } else { "clear   " },
                    finding.confidence
                );
                println!("  {:>18}  {}", "", finding.explanation);
            }
        }
        println!("{}", "=".repeat(70));
    }
}
