use crate::detectors::{clip01, round4, safe_divide, AnalysisContext, BiasDetector};
use crate::models::{Bias, BiasFinding, Direction, NormalizedTrade};

const ASSET_WEIGHT: f64 = 0.4;
const NOTES_WEIGHT: f64 = 0.3;
const PEER_WEIGHT: f64 = 0.3;

/// Trading what the crowd trades: hyped asset categories, crowd-following
/// note language, and (when a peer trade set is supplied) mimicking the
/// majority peer direction on the same asset.
pub struct HerdBehavior;

impl BiasDetector for HerdBehavior {
    fn bias(&self) -> Bias {
        Bias::HerdBehavior
    }

    fn detect(&self, trades: &[NormalizedTrade], ctx: &AnalysisContext<'_>) -> BiasFinding {
        let n = trades.len();
        if n == 0 {
            return BiasFinding::none("No trades to analyze.");
        }

        let signals = ctx.signals;
        let asset_hits = trades
            .iter()
            .filter(|t| signals.popular_asset(&t.asset_type, &t.asset_name))
            .count();
        let note_hits = trades
            .iter()
            .filter(|t| signals.crowd_following(&t.notes))
            .count();

        let score_asset = safe_divide(asset_hits as f64, n as f64);
        let score_notes = safe_divide(note_hits as f64, n as f64);

        let score_peer = ctx.peers.map(|peers| {
            let matches = trades
                .iter()
                .filter(|t| follows_peer_majority(t, peers))
                .count();
            safe_divide(matches as f64, n as f64)
        });

        let confidence = match score_peer {
            Some(peer) => clip01(
                ASSET_WEIGHT * score_asset + NOTES_WEIGHT * score_notes + PEER_WEIGHT * peer,
            ),
            // Without peer data the remaining weights are re-normalized so a
            // peerless analysis can still reach full scale.
            None => clip01(
                (ASSET_WEIGHT * score_asset + NOTES_WEIGHT * score_notes)
                    / (ASSET_WEIGHT + NOTES_WEIGHT),
            ),
        };
        let detected = confidence > ctx.cfg.thresholds.herd;

        let mut triggers = Vec::new();
        if score_asset > 0.0 {
            triggers.push("trades on popular/hyped assets".to_string());
        }
        if score_notes > 0.0 {
            triggers.push("notes mentioning herd or crowd".to_string());
        }
        if score_peer.unwrap_or(0.0) > 0.0 {
            triggers.push("mimicking peer group trades".to_string());
        }

        let explanation = if triggers.is_empty() {
            "No strong herd behavior signals detected.".to_string()
        } else {
            format!("Detected herd behavior indicators: {}.", triggers.join("; "))
        };

        BiasFinding {
            detected,
            confidence: round4(confidence),
            explanation,
            triggers,
        }
    }
}

/// True when the trade's direction matches the strict-majority direction of
/// peer trades on the same asset type within the same calendar day.
fn follows_peer_majority(trade: &NormalizedTrade, peers: &[NormalizedTrade]) -> bool {
    if !trade.direction.is_known() || trade.asset_type.is_empty() {
        return false;
    }
    let day = match trade.entry_at {
        Some(at) => at.date(),
        None => return false,
    };

    let mut longs = 0usize;
    let mut shorts = 0usize;
    for p in peers {
        if p.asset_type != trade.asset_type {
            continue;
        }
        match p.entry_at {
            Some(at) if at.date() == day => {}
            _ => continue,
        }
        match p.direction {
            Direction::Long => longs += 1,
            Direction::Short => shorts += 1,
            Direction::Unknown => {}
        }
    }

    let majority = if longs > shorts {
        Direction::Long
    } else if shorts > longs {
        Direction::Short
    } else {
        return false;
    };
    majority == trade.direction
}
