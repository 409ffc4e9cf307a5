//! Match engine configuration.
//!
//! A `MatchConfig` is validated once when a `MatchEngine` is built; nothing in
//! it is re-checked per call.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::matching::registry::RegistryEntry;
use crate::matching::team;

/// Blended score a pairing must strictly exceed to count as a match.
///
/// Tuned by hand on sports market titles: lower values admit more partial
/// name matches (recall), higher values require near-identical resolved names
/// (precision).
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.82;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub match_threshold: f64,
    /// Words and phrases removed during normalization (mascots, boilerplate)
    pub noise_words: Vec<String>,
    /// Case-insensitive substrings marking an excluded sub-population
    pub exclusion_terms: Vec<String>,
    pub registry: Vec<RegistryEntry>,
    /// Reject ambiguous aliases instead of dropping them with a warning
    pub strict_registry: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            noise_words: team::default_noise_words(),
            exclusion_terms: team::default_exclusion_terms(),
            registry: team::default_registry(),
            strict_registry: false,
        }
    }
}

impl MatchConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn with_registry(mut self, registry: Vec<RegistryEntry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_noise_words(mut self, noise_words: Vec<String>) -> Self {
        self.noise_words = noise_words;
        self
    }

    pub fn with_exclusion_terms(mut self, exclusion_terms: Vec<String>) -> Self {
        self.exclusion_terms = exclusion_terms;
        self
    }

    pub fn with_strict_registry(mut self, strict: bool) -> Self {
        self.strict_registry = strict;
        self
    }

    /// Checks that do not need the normalizer. Registry contents are
    /// validated when the registry is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.match_threshold));
        }
        if self.noise_words.iter().all(|w| w.trim().is_empty()) {
            return Err(ConfigError::EmptyNoiseWords);
        }
        if self.registry.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        Ok(())
    }

    /// Load registry entries from a JSON array file.
    pub fn load_registry_file(path: impl AsRef<Path>) -> Result<Vec<RegistryEntry>, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::RegistryIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::RegistryParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save registry entries as a pretty-printed JSON array.
    pub fn save_registry_file(
        entries: &[RegistryEntry],
        path: impl AsRef<Path>,
    ) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.match_threshold, 0.82);
        assert!(!config.noise_words.is_empty());
        assert!(!config.exclusion_terms.is_empty());
        assert!(!config.registry.is_empty());
        assert!(!config.strict_registry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        for t in [-0.1, 0.0, 1.5, f64::NAN, f64::INFINITY] {
            let err = MatchConfig::default().with_threshold(t).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold(_)));
        }
        assert!(MatchConfig::default().with_threshold(1.0).validate().is_ok());
        assert!(MatchConfig::default().with_threshold(0.01).validate().is_ok());
    }

    #[test]
    fn test_empty_noise_words() {
        let err = MatchConfig::default()
            .with_noise_words(vec![" ".to_string()])
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyNoiseWords));
    }

    #[test]
    fn test_empty_registry() {
        let err = MatchConfig::default()
            .with_registry(Vec::new())
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRegistry));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"match_threshold": 0.9}"#).unwrap();
        assert_eq!(config.match_threshold, 0.9);
        assert_eq!(config.noise_words, team::default_noise_words());
    }

    #[test]
    fn test_registry_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        let entries = vec![RegistryEntry::new("conn", "Connecticut", &["UConn"], "MBB")];

        MatchConfig::save_registry_file(&entries, &path).unwrap();
        let loaded = MatchConfig::load_registry_file(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_registry_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = MatchConfig::load_registry_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::RegistryIo { .. }));
    }

    #[test]
    fn test_registry_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();
        let err = MatchConfig::load_registry_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::RegistryParse { .. }));
    }
}
