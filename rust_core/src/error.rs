//! Startup-time configuration errors.
//!
//! Everything that can be wrong with a `MatchConfig` is detected once, when the
//! engine is built. Matching itself never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("registry is empty; at least one entry is required")]
    EmptyRegistry,

    #[error("noise-word list is empty")]
    EmptyNoiseWords,

    #[error("match threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),

    #[error("registry entry '{id}' has an empty category")]
    EmptyCategory { id: String },

    #[error("registry entry '{id}' has a canonical name that normalizes to nothing: '{canonical}'")]
    EmptyCanonical { id: String, canonical: String },

    #[error("duplicate canonical '{canonical}' in category {category} (entries '{first}' and '{second}')")]
    DuplicateCanonical {
        category: String,
        canonical: String,
        first: String,
        second: String,
    },

    #[error("ambiguous label '{label}' in category {category}: claimed by {claimants:?}")]
    AmbiguousAlias {
        category: String,
        label: String,
        claimants: Vec<String>,
    },

    #[error("failed to compile noise-word pattern: {0}")]
    NoisePattern(#[from] regex::Error),

    #[error("failed to read registry file {path}: {source}")]
    RegistryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry file {path}: {source}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
