//! League configuration for supported categories.
//!
//! This module provides:
//! - Static configuration for every category tag the built-in registry uses
//! - Exchange series prefixes per category
//! - Category token extraction from market tickers
//! - Mapping of free-form sport labels onto category tags

/// Configuration for a single league.
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    /// Category tag used by registry entries and structured records (e.g., "NFL", "MBB")
    pub category: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Kalshi series prefixes whose markets belong to this league
    pub series_prefixes: &'static [&'static str],
}

/// Static configuration for all supported leagues.
pub static LEAGUE_CONFIGS: &[LeagueConfig] = &[
    // Football
    LeagueConfig {
        category: "NFL",
        display_name: "NFL",
        series_prefixes: &["KXNFLGAME", "KXNFLSPREAD", "KXNFLTOTAL"],
    },
    LeagueConfig {
        category: "NCAAF",
        display_name: "College Football",
        series_prefixes: &["KXNCAAFGAME", "KXNCAAFSPREAD", "KXNCAAFTOTAL"],
    },
    // Basketball
    LeagueConfig {
        category: "NBA",
        display_name: "NBA",
        series_prefixes: &["KXNBAGAME", "KXNBASPREAD", "KXNBATOTAL"],
    },
    LeagueConfig {
        category: "MBB",
        display_name: "Men's College Basketball",
        series_prefixes: &[
            "KXNCAAMBGAME",
            "KXNCAAMBSPREAD",
            "KXNCAAMBTOTAL",
            "KXNCAABGAME",
            "KXCBGAME",
        ],
    },
    // Hockey
    LeagueConfig {
        category: "NHL",
        display_name: "NHL",
        series_prefixes: &["KXNHLGAME", "KXNHLSPREAD", "KXNHLTOTAL"],
    },
    // Baseball
    LeagueConfig {
        category: "MLB",
        display_name: "MLB",
        series_prefixes: &["KXMLBGAME", "KXMLBSPREAD", "KXMLBTOTAL"],
    },
];

/// Markers of the women's sub-population in sport labels and series codes.
const WOMENS_MARKERS: &[&str] = &["WOMEN", "WNBA", "NCAAW", "WCBB", "WNFL"];

/// Get a league config by category tag (case-insensitive).
pub fn get_league_config(category: &str) -> Option<&'static LeagueConfig> {
    let upper = category.trim().to_uppercase();
    LEAGUE_CONFIGS.iter().find(|c| c.category == upper)
}

/// Get the league whose series prefixes cover this series code.
pub fn league_for_series(series: &str) -> Option<&'static LeagueConfig> {
    let upper = series.to_uppercase();
    LEAGUE_CONFIGS
        .iter()
        .find(|c| c.series_prefixes.iter().any(|p| upper.starts_with(p)))
}

/// Get all category tags.
pub fn get_categories() -> Vec<&'static str> {
    LEAGUE_CONFIGS.iter().map(|c| c.category).collect()
}

/// Extract the category token from a market ticker.
///
/// The token is the uppercased series segment (everything before the first
/// `-`). When the series belongs to a known league the league's category tag
/// is appended after a `:` so the category gate can find it even when the
/// series code spells the league differently (`KXNCAAMBGAME:MBB`).
pub fn category_token(ticker: &str) -> String {
    let series = ticker
        .split('-')
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase();

    match league_for_series(&series) {
        Some(league) => format!("{}:{}", series, league.category),
        None => series,
    }
}

/// Map a free-form sport label ("college basketball", "CBB", "nfl") onto a category tag.
///
/// Returns `None` for women's labels and for anything unrecognised.
pub fn normalize_category(label: &str) -> Option<&'static str> {
    let u = label.trim().to_uppercase();
    if u.is_empty() || WOMENS_MARKERS.iter().any(|m| u.contains(m)) {
        return None;
    }

    if u.contains("NCAAB")
        || u.contains("CBB")
        || u.contains("MBB")
        || u.contains("COLLEGE BASKETBALL")
    {
        return Some("MBB");
    }
    if u.contains("NCAAF") || u.contains("CFB") || u.contains("COLLEGE FOOTBALL") {
        return Some("NCAAF");
    }
    if u.contains("NBA") || u == "BASKETBALL" {
        return Some("NBA");
    }
    if u.contains("NFL") || u == "FOOTBALL" {
        return Some("NFL");
    }
    if u.contains("NHL") || u.contains("HOCKEY") {
        return Some("NHL");
    }
    // College basketball is the most common NCAA market
    if u.contains("NCAA") || u.contains("COLLEGE") {
        return Some("MBB");
    }
    if u.contains("MLB") || u.contains("BASEBALL") {
        return Some("MLB");
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
