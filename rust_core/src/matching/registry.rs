//! Canonical registry and alias resolution.
//!
//! This module provides:
//! - `RegistryEntry`: one entity with its canonical name and known aliases
//! - `CanonicalRegistry`: category-scoped lookup from normalized label to canonical
//! - `AliasResolver`: normalize-then-lookup with literal fallback
//!
//! The registry is validated once when built. Within a category, canonical
//! names must be unique. A label claimed by more than one entry is dropped
//! (canonical names keep priority over aliases) or, in strict mode, rejected.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::error::ConfigError;
use crate::utils::normalize::Normalizer;

/// One registered entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: String,
    pub canonical: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
}

impl RegistryEntry {
    pub fn new(
        id: impl Into<String>,
        canonical: impl Into<String>,
        aliases: &[&str],
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            canonical: canonical.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            category: category.into(),
        }
    }
}

/// Category key used for all lookups.
fn category_key(category: &str) -> String {
    category.trim().to_uppercase()
}

#[derive(Debug, Clone, Default)]
struct CategoryIndex {
    /// normalized label -> normalized canonical
    labels: FxHashMap<String, String>,
    canonical_count: usize,
}

/// Category-scoped label lookup, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct CanonicalRegistry {
    categories: FxHashMap<String, CategoryIndex>,
}

impl CanonicalRegistry {
    /// Validate entries and build the lookup tables.
    pub fn build(
        entries: &[RegistryEntry],
        normalizer: &Normalizer,
        strict: bool,
    ) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        let mut categories: FxHashMap<String, CategoryIndex> = FxHashMap::default();
        // (category, normalized canonical) -> entry id
        let mut canonical_owner: FxHashMap<(String, String), String> = FxHashMap::default();
        let mut entry_canonicals: Vec<(String, String)> = Vec::with_capacity(entries.len());

        // Pass 1: canonical names
        for entry in entries {
            let category = category_key(&entry.category);
            if category.is_empty() {
                return Err(ConfigError::EmptyCategory {
                    id: entry.id.clone(),
                });
            }

            let canonical = normalizer.normalize(&entry.canonical);
            if canonical.is_empty() {
                return Err(ConfigError::EmptyCanonical {
                    id: entry.id.clone(),
                    canonical: entry.canonical.clone(),
                });
            }

            let key = (category.clone(), canonical.clone());
            if let Some(first) = canonical_owner.get(&key) {
                return Err(ConfigError::DuplicateCanonical {
                    category,
                    canonical,
                    first: first.clone(),
                    second: entry.id.clone(),
                });
            }
            canonical_owner.insert(key, entry.id.clone());

            let index = categories.entry(category.clone()).or_default();
            index.labels.insert(canonical.clone(), canonical.clone());
            index.canonical_count += 1;
            entry_canonicals.push((category, canonical));
        }

        // Pass 2: collect alias claims
        // (category, label) -> set of canonicals claiming it
        let mut claims: FxHashMap<(String, String), FxHashSet<String>> = FxHashMap::default();
        for (entry, (category, canonical)) in entries.iter().zip(&entry_canonicals) {
            for alias in &entry.aliases {
                let label = normalizer.normalize(alias);
                if label.is_empty() {
                    warn!(
                        "Registry entry '{}' ({}): alias '{}' normalizes to nothing, skipped",
                        entry.id, category, alias
                    );
                    continue;
                }
                if &label == canonical {
                    continue;
                }
                claims
                    .entry((category.clone(), label))
                    .or_default()
                    .insert(canonical.clone());
            }
        }

        // Pass 3: resolve claims, rejecting or dropping ambiguous labels
        let mut claims: Vec<((String, String), FxHashSet<String>)> = claims.into_iter().collect();
        claims.sort_by(|a, b| a.0.cmp(&b.0));

        let mut dropped = 0usize;
        for ((category, label), owners) in claims {
            let index = categories.entry(category.clone()).or_default();
            let shadows_canonical = index.labels.contains_key(&label);

            if owners.len() == 1 && !shadows_canonical {
                if let Some(canonical) = owners.into_iter().next() {
                    index.labels.insert(label, canonical);
                }
                continue;
            }

            let mut claimants: Vec<String> = owners.into_iter().collect();
            if shadows_canonical {
                claimants.push(format!("{} (canonical)", label));
            }
            claimants.sort();

            if strict {
                return Err(ConfigError::AmbiguousAlias {
                    category,
                    label,
                    claimants,
                });
            }
            warn!(
                "Registry {}: label '{}' is ambiguous ({:?}), alias dropped",
                category, label, claimants
            );
            dropped += 1;
        }

        let registry = Self { categories };
        for category in registry.categories() {
            if let Some(index) = registry.categories.get(category) {
                info!(
                    "Registry {}: {} entries, {} labels",
                    category,
                    index.canonical_count,
                    index.labels.len()
                );
            }
        }
        if dropped > 0 {
            warn!("Registry: {} ambiguous aliases dropped", dropped);
        }

        Ok(registry)
    }

    /// Look up an already normalized label within a category.
    pub fn lookup(&self, normalized_label: &str, category: &str) -> Option<&str> {
        self.categories
            .get(&category_key(category))?
            .labels
            .get(normalized_label)
            .map(|s| s.as_str())
    }

    /// All category keys, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut cats: Vec<&str> = self.categories.keys().map(|k| k.as_str()).collect();
        cats.sort_unstable();
        cats
    }

    /// Number of canonical entries.
    pub fn len(&self) -> usize {
        self.categories.values().map(|c| c.canonical_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of resolvable labels (canonicals plus aliases) in a category.
    pub fn label_count(&self, category: &str) -> usize {
        self.categories
            .get(&category_key(category))
            .map(|c| c.labels.len())
            .unwrap_or(0)
    }
}

/// Normalizes a label and maps it onto its canonical name.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    normalizer: Normalizer,
    registry: CanonicalRegistry,
}

impl AliasResolver {
    pub fn new(normalizer: Normalizer, registry: CanonicalRegistry) -> Self {
        Self {
            normalizer,
            registry,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn registry(&self) -> &CanonicalRegistry {
        &self.registry
    }

    /// Resolve a raw label to the normalized canonical name of its entry.
    ///
    /// Unregistered labels come back in normalized form so they can still be
    /// scored. An empty result means the label was unresolvable.
    pub fn resolve_canonical(&self, label: &str, category: &str) -> String {
        let normalized = self.normalizer.normalize(label);
        if normalized.is_empty() {
            return normalized;
        }

        match self.registry.lookup(&normalized, category) {
            Some(canonical) => {
                trace!("Resolved '{}' -> '{}' ({})", label, canonical, category);
                canonical.to_string()
            }
            None => normalized,
        }
    }
}
