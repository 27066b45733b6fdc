use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
    Unknown,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Unknown
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
            Direction::Unknown => "unknown",
        }
    }

    /// Parse the trader-supplied direction string. Anything that is not an
    /// explicit long/short stays Unknown — direction is never guessed from
    /// the price delta.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "long" => Direction::Long,
            "short" => Direction::Short,
            _ => Direction::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Direction::Unknown)
    }
}
