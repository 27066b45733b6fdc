/// Language a trader uses when a trade "had to" work out.
const CONFIRMATION_CUES: &[&str] = &[
    "confirm",
    "as expected",
    "knew it",
    "obvious",
    "told you",
    "sure",
    "confident",
    "believe",
];

const LATE_ENTRY_CUES: &[&str] = &["breakout", "late", "lagging", "lag"];

const HYPE_CUES: &[&str] = &[
    "had to get in",
    "too good to miss",
    "parabolic",
    "can't miss",
    "cannot miss",
    "everyone's buying",
    "everybody's buying",
    "hype",
    "moon",
    "fomo",
];

const REENTRY_CUES: &[&str] = &["missed", "should have", "chase", "chasing", "jumped"];

/// Closed set of self-reported trade reasons that label the entry as chasing.
const FOMO_REASONS: &[&str] = &["fomo", "chasing", "trend"];

const RECENCY_CUES: &[&str] = &["last time", "this time", "recent", "again"];

const EMOTIONAL_CUES: &[&str] = &[
    "revenge",
    "angry",
    "frustrated",
    "rage",
    "get back",
    "recover losses",
    "upset",
    "mad",
];

const CROWD_CUES: &[&str] = &[
    "everyone",
    "crowd",
    "herd",
    "social proof",
    "popular",
    "reddit",
    "twitter",
    "discord",
    "telegram",
    "wallstreetbets",
    "tiktok",
];

/// Hyped asset categories and perpetually-trending tickers.
const POPULAR_ASSET_TAGS: &[&str] = &[
    "crypto", "meme", "hot", "trending", "viral", "doge", "shib", "pepe", "gme", "amc", "tsla",
    "nvda",
];

/// Case-insensitive substring lookup over curated keyword groups.
///
/// Owns its lexicons so the word lists can be extended or swapped without
/// touching detector logic; read-only once constructed.
#[derive(Debug, Clone)]
pub struct TextSignalMatcher {
    pub confirmation: Vec<String>,
    pub late_entry: Vec<String>,
    pub hype: Vec<String>,
    pub reentry: Vec<String>,
    pub fomo_reasons: Vec<String>,
    pub recency: Vec<String>,
    pub emotional: Vec<String>,
    pub crowd: Vec<String>,
    pub popular_assets: Vec<String>,
}

fn owned(cues: &[&str]) -> Vec<String> {
    cues.iter().map(|c| c.to_string()).collect()
}

impl Default for TextSignalMatcher {
    fn default() -> Self {
        Self {
            confirmation: owned(CONFIRMATION_CUES),
            late_entry: owned(LATE_ENTRY_CUES),
            hype: owned(HYPE_CUES),
            reentry: owned(REENTRY_CUES),
            fomo_reasons: owned(FOMO_REASONS),
            recency: owned(RECENCY_CUES),
            emotional: owned(EMOTIONAL_CUES),
            crowd: owned(CROWD_CUES),
            popular_assets: owned(POPULAR_ASSET_TAGS),
        }
    }
}

impl TextSignalMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_any(&self, text: &str, cues: &[String]) -> bool {
        if text.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        cues.iter().any(|cue| lower.contains(cue.as_str()))
    }

    pub fn confirming(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.confirmation)
    }

    pub fn late_entry(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.late_entry)
    }

    pub fn hype(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.hype)
    }

    pub fn reentry_chasing(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.reentry)
    }

    /// Exact match against the closed reason set, not substring.
    pub fn fomo_reason(&self, reason: &str) -> bool {
        let reason = reason.trim().to_lowercase();
        self.fomo_reasons.iter().any(|r| *r == reason)
    }

    pub fn recency_language(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.recency)
    }

    pub fn emotional(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.emotional)
    }

    pub fn crowd_following(&self, notes: &str) -> bool {
        self.contains_any(notes, &self.crowd)
    }

    pub fn popular_asset(&self, asset_type: &str, asset_name: &str) -> bool {
        self.contains_any(asset_type, &self.popular_assets)
            || self.contains_any(asset_name, &self.popular_assets)
    }
}
