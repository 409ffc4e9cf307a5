use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

use matchup_rust_core::config::DEFAULT_MATCH_THRESHOLD;
use matchup_rust_core::MatchConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub match_threshold: f64,
    /// JSON registry file; the built-in sports registry when unset
    pub registry_path: Option<PathBuf>,
    /// Replace the built-in lists when set
    pub noise_words: Option<Vec<String>>,
    pub exclusion_terms: Option<Vec<String>>,
    pub strict_registry: bool,
    /// rayon worker count; rayon's default (one per core) when unset
    pub parallelism: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let match_threshold = match lookup("MATCH_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid MATCH_THRESHOLD: {raw} (expected number)"))?,
            None => DEFAULT_MATCH_THRESHOLD,
        };

        let registry_path = lookup("REGISTRY_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let noise_words = lookup("NOISE_WORDS").map(|raw| parse_csv(&raw));
        let exclusion_terms = lookup("EXCLUSION_TERMS").map(|raw| parse_csv(&raw));

        let strict_registry = lookup("STRICT_REGISTRY")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        let parallelism = match lookup("MATCH_PARALLELISM") {
            Some(raw) => {
                let n = raw
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("Invalid MATCH_PARALLELISM: {raw} (expected integer)"))?;
                if n == 0 {
                    return Err(anyhow!("MATCH_PARALLELISM must be at least 1"));
                }
                Some(n)
            }
            None => None,
        };

        Ok(Self {
            match_threshold,
            registry_path,
            noise_words,
            exclusion_terms,
            strict_registry,
            parallelism,
        })
    }

    /// Engine configuration, reading the registry file if one is set.
    pub fn match_config(&self) -> Result<MatchConfig> {
        let mut config = MatchConfig::default()
            .with_threshold(self.match_threshold)
            .with_strict_registry(self.strict_registry);

        if let Some(path) = &self.registry_path {
            let entries = MatchConfig::load_registry_file(path)
                .with_context(|| format!("Failed to load registry from {}", path.display()))?;
            config = config.with_registry(entries);
        }
        if let Some(words) = &self.noise_words {
            config = config.with_noise_words(words.clone());
        }
        if let Some(terms) = &self.exclusion_terms {
            config = config.with_exclusion_terms(terms.clone());
        }

        Ok(config)
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.match_threshold, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(config.registry_path, None);
        assert_eq!(config.noise_words, None);
        assert!(!config.strict_registry);
        assert_eq!(config.parallelism, None);
        assert_eq!(config.match_config().unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MATCH_THRESHOLD", "0.9"),
            ("NOISE_WORDS", "reward, lost ,,found"),
            ("EXCLUSION_TERMS", "deceased"),
            ("STRICT_REGISTRY", "yes"),
            ("MATCH_PARALLELISM", "4"),
        ])
        .unwrap();
        assert_eq!(config.match_threshold, 0.9);
        assert_eq!(
            config.noise_words,
            Some(vec!["reward".to_string(), "lost".to_string(), "found".to_string()])
        );
        assert!(config.strict_registry);
        assert_eq!(config.parallelism, Some(4));

        let match_config = config.match_config().unwrap();
        assert_eq!(match_config.exclusion_terms, vec!["deceased".to_string()]);
        assert!(match_config.strict_registry);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("MATCH_THRESHOLD", "high")]).is_err());
        assert!(config_from(&[("MATCH_PARALLELISM", "0")]).is_err());
        assert!(config_from(&[("MATCH_PARALLELISM", "-2")]).is_err());
    }

    #[test]
    fn test_registry_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dogs.json");
        std::fs::write(
            &path,
            r#"[{"id": "rex", "canonical": "Rex", "aliases": ["the dog"], "category": "DOG"}]"#,
        )
        .unwrap();

        let config = config_from(&[("REGISTRY_PATH", path.to_str().unwrap())]).unwrap();
        let match_config = config.match_config().unwrap();
        assert_eq!(match_config.registry.len(), 1);
        assert_eq!(match_config.registry[0].canonical, "Rex");

        let missing = config_from(&[("REGISTRY_PATH", "/nonexistent/registry.json")]).unwrap();
        assert!(missing.match_config().is_err());
    }
}
