//! Matchup Core - Entity resolution for two-sided event records.
//!
//! Decides whether a structured record (two named sides plus a category) and a
//! free-text record (market title, post text) describe the same event.
//!
//! This module provides:
//! - Label normalization (case folding, punctuation, abbreviation expansion, noise words)
//! - Canonical registry with load-time validation and alias resolution
//! - Two-sided identifier extraction ("A vs B", "Away @ Home", "Away at Home")
//! - Character (edit distance) and token (Jaccard) similarity
//! - Category and population gates applied before scoring
//! - Match engine with direct/swapped orientation and a configurable threshold
//! - Parallel candidate fan-out via rayon

pub mod config;
pub mod error;
pub mod league_config;
pub mod matching;
pub mod models;
pub mod utils;

pub use config::{MatchConfig, DEFAULT_MATCH_THRESHOLD};
pub use error::ConfigError;
pub use matching::engine::{best_index, match_records, MatchBreakdown, MatchEngine};
pub use matching::registry::{AliasResolver, CanonicalRegistry, RegistryEntry};
pub use models::{FreeTextRecord, MatchResult, Orientation, StructuredRecord};
