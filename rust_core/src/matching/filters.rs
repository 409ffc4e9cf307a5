//! Candidate gates applied before any scoring.
//!
//! Gates run in a fixed order; the first one that rejects decides the outcome.

use crate::models::{FreeTextRecord, StructuredRecord};

/// A cheap boolean gate over a (structured, candidate) pair.
pub trait CandidateFilter: Send + Sync {
    /// Gate name for logging and explanations
    fn name(&self) -> &'static str;

    fn admits(&self, structured: &StructuredRecord, candidate: &FreeTextRecord) -> bool;
}

/// Candidate's category token must contain the structured record's category tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter;

impl CandidateFilter for CategoryFilter {
    fn name(&self) -> &'static str {
        "category"
    }

    fn admits(&self, structured: &StructuredRecord, candidate: &FreeTextRecord) -> bool {
        let tag = structured.category.trim().to_uppercase();
        if tag.is_empty() {
            return false;
        }
        candidate.category_token.to_uppercase().contains(&tag)
    }
}

/// Rejects candidates that describe an excluded sub-population.
#[derive(Debug, Clone, Default)]
pub struct PopulationFilter {
    /// Lowercased exclusion terms
    terms: Vec<String>,
}

impl PopulationFilter {
    pub fn new(terms: &[String]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    fn mentions_excluded(&self, value: &str) -> bool {
        if self.terms.is_empty() || value.is_empty() {
            return false;
        }
        let lower = value.to_lowercase();
        self.terms.iter().any(|t| lower.contains(t.as_str()))
    }
}

impl CandidateFilter for PopulationFilter {
    fn name(&self) -> &'static str {
        "population"
    }

    fn admits(&self, structured: &StructuredRecord, candidate: &FreeTextRecord) -> bool {
        if structured.excluded_population {
            return true;
        }
        !(candidate.excluded_population
            || self.mentions_excluded(&candidate.text)
            || self.mentions_excluded(&candidate.category_token))
    }
}

/// Ordered list of gates.
pub struct FilterChain {
    filters: Vec<Box<dyn CandidateFilter>>,
}

impl FilterChain {
    /// Category gate, then population gate.
    pub fn standard(exclusion_terms: &[String]) -> Self {
        Self {
            filters: vec![
                Box::new(CategoryFilter),
                Box::new(PopulationFilter::new(exclusion_terms)),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a gate after the existing ones.
    pub fn push(&mut self, filter: Box<dyn CandidateFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Name of the first gate that rejects the pair, if any.
    pub fn first_rejection(
        &self,
        structured: &StructuredRecord,
        candidate: &FreeTextRecord,
    ) -> Option<&'static str> {
        self.filters
            .iter()
            .find(|f| !f.admits(structured, candidate))
            .map(|f| f.name())
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.filters.iter().map(|flt| flt.name()))
            .finish()
    }
}
