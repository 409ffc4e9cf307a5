//! Two-sided identifier extraction from free text.
//!
//! Recognised separators, tried in this order:
//! - `A vs B` (also `vs.`, any case): returned as (A, B)
//! - `Away @ Home`: returned as (Home, Away)
//! - `Away at Home` (any case): returned as (Home, Away)
//!
//! Only the first occurrence of the first separator found is used.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    Versus,
    AtSign,
    At,
}

impl Separator {
    /// The away side is written first and must be moved to second place.
    pub fn away_first(&self) -> bool {
        matches!(self, Separator::AtSign | Separator::At)
    }
}

/// Sides split out of a free-text descriptor, already in (first, second) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub first: String,
    pub second: String,
    pub separator: Separator,
}

fn separator_patterns() -> &'static [(Separator, Regex)] {
    static PATTERNS: OnceLock<Vec<(Separator, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            (
                Separator::Versus,
                Regex::new(r"(?i)\s+vs\.?\s+").expect("valid vs pattern"),
            ),
            (
                Separator::AtSign,
                Regex::new(r"\s+@\s+").expect("valid @ pattern"),
            ),
            (
                Separator::At,
                Regex::new(r"(?i)\s+at\s+").expect("valid at pattern"),
            ),
        ]
    })
}

/// Split text into its two sides, or `None` if no separator is present.
pub fn split_matchup(text: &str) -> Option<Matchup> {
    separator_patterns().iter().find_map(|(separator, pattern)| {
        let m = pattern.find(text)?;
        let left = text[..m.start()].trim().to_string();
        let right = text[m.end()..].trim().to_string();

        let (first, second) = if separator.away_first() {
            (right, left)
        } else {
            (left, right)
        };

        Some(Matchup {
            first,
            second,
            separator: *separator,
        })
    })
}

/// Extract (first, second) sides; two empty strings when unresolvable.
pub fn extract_pair(text: &str) -> (String, String) {
    split_matchup(text)
        .map(|m| (m.first, m.second))
        .unwrap_or_default()
}
