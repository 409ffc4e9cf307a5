//! JSON-lines request handling: one structured record and its candidates per line.

use serde::{Deserialize, Serialize};

use matchup_rust_core::league_config::category_token;
use matchup_rust_core::matching::engine::best_index;
use matchup_rust_core::{FreeTextRecord, MatchEngine, MatchResult, StructuredRecord};

/// A candidate as sent by callers: either an explicit category token or a
/// market ticker to derive it from.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateInput {
    pub text: String,
    #[serde(default)]
    pub category_token: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub excluded_population: bool,
}

impl CandidateInput {
    fn into_record(self) -> FreeTextRecord {
        let token = match (self.category_token, self.ticker) {
            (Some(token), _) => token,
            (None, Some(ticker)) => category_token(&ticker),
            (None, None) => String::new(),
        };
        FreeTextRecord::new(self.text, token).with_excluded_population(self.excluded_population)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub structured: StructuredRecord,
    pub candidates: Vec<CandidateInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// One result per candidate, in request order
    pub results: Vec<MatchResult>,
    /// Index of the highest-confidence match
    pub best: Option<usize>,
}

pub fn scan(engine: &MatchEngine, request: ScanRequest) -> ScanResponse {
    let candidates: Vec<FreeTextRecord> = request
        .candidates
        .into_iter()
        .map(CandidateInput::into_record)
        .collect();

    let results = engine.evaluate_batch(&request.structured, &candidates);
    let best = best_index(&results);

    ScanResponse {
        id: request.id,
        results,
        best,
    }
}

/// Parse and evaluate one input line.
pub fn scan_line(engine: &MatchEngine, line: &str) -> Result<ScanResponse, serde_json::Error> {
    let request: ScanRequest = serde_json::from_str(line)?;
    Ok(scan(engine, request))
}
