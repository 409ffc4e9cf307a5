//! Match engine: gates, extraction, resolution, scoring and the decision.
//!
//! Built once from a validated `MatchConfig`; evaluation afterwards is pure
//! and never fails, so one engine can be shared across threads.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::error::ConfigError;
use crate::matching::extract::extract_pair;
use crate::matching::filters::FilterChain;
use crate::matching::registry::{AliasResolver, CanonicalRegistry};
use crate::models::{FreeTextRecord, MatchResult, Orientation, StructuredRecord};
use crate::utils::normalize::Normalizer;
use crate::utils::similarity::blended_similarity;

/// Every intermediate value behind one decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBreakdown {
    /// Raw sides split from the free text, (first, second)
    pub extracted: (String, String),
    pub resolved_side_a: String,
    pub resolved_side_b: String,
    pub resolved_first: String,
    pub resolved_second: String,
    pub direct_score: f64,
    pub swapped_score: f64,
    /// Gate that rejected the pair; scores are zero when set
    pub rejected_by: Option<&'static str>,
    pub result: MatchResult,
}

impl MatchBreakdown {
    fn rejected(gate: &'static str) -> Self {
        Self {
            extracted: Default::default(),
            resolved_side_a: String::new(),
            resolved_side_b: String::new(),
            resolved_first: String::new(),
            resolved_second: String::new(),
            direct_score: 0.0,
            swapped_score: 0.0,
            rejected_by: Some(gate),
            result: MatchResult::rejected(),
        }
    }
}

#[derive(Debug)]
pub struct MatchEngine {
    resolver: AliasResolver,
    filters: FilterChain,
    threshold: f64,
}

impl MatchEngine {
    /// Validate the config and build the registry.
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let normalizer = Normalizer::new(&config.noise_words)?;
        let registry =
            CanonicalRegistry::build(&config.registry, &normalizer, config.strict_registry)?;

        info!(
            "Match engine ready: {} canonicals, threshold {:.2}, {} exclusion terms",
            registry.len(),
            config.match_threshold,
            config.exclusion_terms.len()
        );

        Ok(Self {
            resolver: AliasResolver::new(normalizer, registry),
            filters: FilterChain::standard(&config.exclusion_terms),
            threshold: config.match_threshold,
        })
    }

    /// Engine over the built-in sports registry.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(&MatchConfig::default())
    }

    /// Replace the gate chain (e.g. to add a domain-specific gate).
    pub fn with_filters(mut self, filters: FilterChain) -> Self {
        self.filters = filters;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn resolver(&self) -> &AliasResolver {
        &self.resolver
    }

    pub fn resolve_canonical(&self, label: &str, category: &str) -> String {
        self.resolver.resolve_canonical(label, category)
    }

    /// Decide whether the two records describe the same event.
    pub fn evaluate(&self, structured: &StructuredRecord, candidate: &FreeTextRecord) -> MatchResult {
        self.explain(structured, candidate).result
    }

    /// Same decision as `evaluate`, with every intermediate value kept.
    pub fn explain(&self, structured: &StructuredRecord, candidate: &FreeTextRecord) -> MatchBreakdown {
        if let Some(gate) = self.filters.first_rejection(structured, candidate) {
            debug!(
                "Rejected by {} gate: '{}' [{}] for {} vs {} ({})",
                gate,
                candidate.text,
                candidate.category_token,
                structured.side_a,
                structured.side_b,
                structured.category
            );
            return MatchBreakdown::rejected(gate);
        }

        let category = structured.category.as_str();
        let (first, second) = extract_pair(&candidate.text);

        let cs_a = self.resolve_canonical(&structured.side_a, category);
        let cs_b = self.resolve_canonical(&structured.side_b, category);
        let ce_first = self.resolve_canonical(&first, category);
        let ce_second = self.resolve_canonical(&second, category);

        let direct = (blended_similarity(&cs_a, &ce_first) + blended_similarity(&cs_b, &ce_second)) / 2.0;
        let swapped = (blended_similarity(&cs_a, &ce_second) + blended_similarity(&cs_b, &ce_first)) / 2.0;

        let result = if direct > self.threshold {
            MatchResult::matched(direct, Orientation::Direct)
        } else if swapped > self.threshold {
            MatchResult::matched(swapped, Orientation::Swapped)
        } else {
            MatchResult::no_match(direct.max(swapped))
        };

        debug!(
            "'{}' vs {} / {}: direct={:.3} swapped={:.3} match={}",
            candidate.text, cs_a, cs_b, direct, swapped, result.is_match
        );

        MatchBreakdown {
            extracted: (first, second),
            resolved_side_a: cs_a,
            resolved_side_b: cs_b,
            resolved_first: ce_first,
            resolved_second: ce_second,
            direct_score: direct,
            swapped_score: swapped,
            rejected_by: None,
            result,
        }
    }

    /// Evaluate many candidates in parallel. Output order follows input order.
    pub fn evaluate_batch(
        &self,
        structured: &StructuredRecord,
        candidates: &[FreeTextRecord],
    ) -> Vec<MatchResult> {
        candidates
            .par_iter()
            .map(|candidate| self.evaluate(structured, candidate))
            .collect()
    }

    /// Highest-confidence matching candidate; the lowest index wins a tie.
    pub fn best_match(
        &self,
        structured: &StructuredRecord,
        candidates: &[FreeTextRecord],
    ) -> Option<(usize, MatchResult)> {
        let results = self.evaluate_batch(structured, candidates);
        best_index(&results).map(|idx| (idx, results[idx]))
    }
}

/// Index of the highest-confidence matching result; the lowest index wins a tie.
pub fn best_index(results: &[MatchResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_match)
        .fold(None::<(usize, f64)>, |best, (idx, r)| match best {
            Some((_, c)) if c >= r.confidence => best,
            _ => Some((idx, r.confidence)),
        })
        .map(|(idx, _)| idx)
}

/// One-shot match with a fresh engine.
///
/// Callers matching more than once should build a `MatchEngine` and reuse it;
/// this rebuilds the registry on every call.
pub fn match_records(
    structured: &StructuredRecord,
    candidate: &FreeTextRecord,
    config: &MatchConfig,
) -> Result<MatchResult, ConfigError> {
    Ok(MatchEngine::new(config)?.evaluate(structured, candidate))
}
