// Shared record and result models for the match engine
use serde::{Deserialize, Serialize};

use crate::league_config;

// ============================================================================
// Input Records
// ============================================================================

/// The "clean" side of a match: two named sides and a category tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredRecord {
    pub side_a: String,
    pub side_b: String,
    /// Category tag, e.g. "NFL" or "MBB"
    pub category: String,
    /// Set when the record itself belongs to the excluded sub-population
    /// (e.g. a women's game); the population gate is then skipped.
    #[serde(default)]
    pub excluded_population: bool,
}

impl StructuredRecord {
    pub fn new(side_a: impl Into<String>, side_b: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            side_a: side_a.into(),
            side_b: side_b.into(),
            category: category.into(),
            excluded_population: false,
        }
    }

    /// Same record with the two sides exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            side_a: self.side_b.clone(),
            side_b: self.side_a.clone(),
            category: self.category.clone(),
            excluded_population: self.excluded_population,
        }
    }
}

/// The "noisy" side of a match: a text blob plus the identifier code it came with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FreeTextRecord {
    /// Title, subtitle or post body
    pub text: String,
    /// Coarse category token, usually derived from a market ticker
    pub category_token: String,
    /// Caller already knows the record describes the excluded sub-population
    #[serde(default)]
    pub excluded_population: bool,
}

impl FreeTextRecord {
    pub fn new(text: impl Into<String>, category_token: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category_token: category_token.into(),
            excluded_population: false,
        }
    }

    /// Build from an exchange market: the category token is taken from the ticker.
    ///
    /// `KXNBAGAME-26FEB24ORLLAL-ORL` yields the token `KXNBAGAME:NBA`.
    pub fn from_market(title: impl Into<String>, ticker: &str) -> Self {
        Self::new(title, league_config::category_token(ticker))
    }

    pub fn with_excluded_population(mut self, excluded: bool) -> Self {
        self.excluded_population = excluded;
        self
    }
}

// ============================================================================
// Match Result
// ============================================================================

/// Whether the structured sides lined up with the extracted sides in order or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Direct,
    Swapped,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Direct => Orientation::Swapped,
            Orientation::Swapped => Orientation::Direct,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Direct => "direct",
            Orientation::Swapped => "swapped",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_match: bool,
    /// Blended score in [0, 1]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl MatchResult {
    /// Rejected by a gate before scoring.
    pub fn rejected() -> Self {
        Self {
            is_match: false,
            confidence: 0.0,
            orientation: None,
        }
    }

    pub fn matched(confidence: f64, orientation: Orientation) -> Self {
        Self {
            is_match: true,
            confidence,
            orientation: Some(orientation),
        }
    }

    pub fn no_match(confidence: f64) -> Self {
        Self {
            is_match: false,
            confidence,
            orientation: None,
        }
    }
}
