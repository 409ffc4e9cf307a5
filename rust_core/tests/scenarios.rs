use matchup_rust_core::{
    FreeTextRecord, MatchConfig, MatchEngine, MatchResult, Orientation, RegistryEntry,
    StructuredRecord,
};

fn engine() -> MatchEngine {
    MatchEngine::with_defaults().expect("default config is valid")
}

fn uconn_lsu() -> StructuredRecord {
    StructuredRecord::new("Connecticut", "Louisiana State", "MBB")
}

#[test]
fn aliases_in_listed_order_match_direct() {
    let r = engine().evaluate(&uconn_lsu(), &FreeTextRecord::new("UConn vs LSU", "MBB"));
    assert!(r.is_match);
    assert_eq!(r.orientation, Some(Orientation::Direct));
    assert!(r.confidence > 0.82);
}

#[test]
fn aliases_in_reverse_order_match_swapped() {
    let r = engine().evaluate(&uconn_lsu(), &FreeTextRecord::new("LSU vs UConn", "MBB"));
    assert!(r.is_match);
    assert_eq!(r.orientation, Some(Orientation::Swapped));
    assert!(r.confidence > 0.82);
}

#[test]
fn womens_game_is_rejected_before_scoring() {
    let r = engine().evaluate(
        &uconn_lsu(),
        &FreeTextRecord::new("UConn vs LSU (Women's)", "MBB"),
    );
    assert_eq!(r, MatchResult::rejected());
    assert_eq!(r.confidence, 0.0);
}

#[test]
fn womens_league_token_is_rejected_before_scoring() {
    // "WNFL" contains "NFL" so the category gate passes; the population gate rejects it
    let engine = engine();
    let s = StructuredRecord::new("Chiefs", "Bills", "NFL");
    let candidate = FreeTextRecord::new("Chiefs vs Bills", "WNFL");

    let breakdown = engine.explain(&s, &candidate);
    assert_eq!(breakdown.rejected_by, Some("population"));
    assert_eq!(breakdown.result.confidence, 0.0);
    assert!(!breakdown.result.is_match);
}

#[test]
fn unrelated_teams_score_near_zero() {
    let s = StructuredRecord::new("Duke", "Kentucky", "MBB");
    let r = engine().evaluate(&s, &FreeTextRecord::new("Alabama vs Gonzaga", "MBB"));
    assert!(!r.is_match);
    assert!(r.confidence < 0.1, "confidence {}", r.confidence);
    assert_eq!(r.orientation, None);
}

#[test]
fn mascot_suffix_resolves_like_alias() {
    let engine = engine();
    assert_eq!(engine.resolve_canonical("uconn", "MBB"), "connecticut");
    assert_eq!(engine.resolve_canonical("UConn Huskies", "MBB"), "connecticut");
}

#[test]
fn market_title_with_ticker() {
    let s = StructuredRecord::new("Los Angeles Lakers", "Orlando Magic", "NBA");
    let candidate =
        FreeTextRecord::from_market("Orlando at Los Angeles L Winner?", "KXNBAGAME-26FEB24ORLLAL-ORL");
    assert_eq!(candidate.category_token, "KXNBAGAME:NBA");

    let r = engine().evaluate(&s, &candidate);
    assert!(r.is_match);
    assert_eq!(r.orientation, Some(Orientation::Direct));
}

#[test]
fn college_ticker_carries_category_tag() {
    let candidate = FreeTextRecord::from_market("UConn vs LSU", "KXNCAAMBGAME-26MAR01CONNLSU-CONN");
    let r = engine().evaluate(&uconn_lsu(), &candidate);
    assert!(r.is_match);
}

#[test]
fn excluded_structured_record_skips_population_gate() {
    let engine = engine();
    let candidate = FreeTextRecord::new("UConn vs LSU", "MBB").with_excluded_population(true);
    assert_eq!(engine.evaluate(&uconn_lsu(), &candidate), MatchResult::rejected());

    let mut s = uconn_lsu();
    s.excluded_population = true;
    assert!(engine.evaluate(&s, &candidate).is_match);
}

#[test]
fn lost_and_found_registry() {
    let config = MatchConfig::default()
        .with_noise_words(vec!["reward".to_string(), "lost".to_string(), "found".to_string()])
        .with_exclusion_terms(vec!["deceased".to_string()])
        .with_registry(vec![
            RegistryEntry::new("golden", "Golden Retriever", &["golden", "goldie"], "DOG"),
            RegistryEntry::new("lab", "Labrador Retriever", &["lab", "labrador"], "DOG"),
            RegistryEntry::new("park", "Riverside Park", &["riverside"], "DOG"),
        ]);
    let engine = MatchEngine::new(&config).expect("valid config");

    let report = StructuredRecord::new("Golden Retriever", "Riverside Park", "DOG");
    let posts = vec![
        FreeTextRecord::new("Lab vs Riverside", "DOG"),
        FreeTextRecord::new("Found golden @ Riverside", "DOG"),
        FreeTextRecord::new("Goldie vs Riverside Park (deceased)", "DOG"),
    ];

    let results = engine.evaluate_batch(&report, &posts);
    assert!(!results[0].is_match);
    assert_eq!(results[1].orientation, Some(Orientation::Swapped));
    assert_eq!(results[2], MatchResult::rejected());

    let (idx, best) = engine.best_match(&report, &posts).expect("one candidate matches");
    assert_eq!(idx, 1);
    assert!(best.is_match);
}

#[test]
fn result_serializes_lowercase_orientation() {
    let r = engine().evaluate(&uconn_lsu(), &FreeTextRecord::new("LSU vs UConn", "MBB"));
    let json = serde_json::to_value(r).expect("serializable");
    assert_eq!(json["is_match"], true);
    assert_eq!(json["orientation"], "swapped");

    let miss = serde_json::to_value(MatchResult::rejected()).expect("serializable");
    assert!(miss.get("orientation").is_none());
}
