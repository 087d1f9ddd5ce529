//! End-to-end tests for the recommendation pipeline
//!
//! Exercises the public API the way an embedding application would: build a
//! snapshot, fuse it, read the completeness estimate, drag sliders, restart
//! the engine against the same store.

use orienta::types::{
    PlanItem, PlanItemKind, QuizResult, SignalSnapshot, Subject, SubjectRelation, TagId,
    WeightedTag,
};
use orienta::{
    RecommendationEngine, RecommendationWeights, TomlWeightStore, WeightField,
    DEFAULT_TOTAL_QUIZZES,
};
use std::collections::HashMap;
use tempfile::TempDir;

fn quiz_result(quiz_id: &str, scores: &[(&str, f64)]) -> QuizResult {
    QuizResult {
        quiz_id: quiz_id.to_string(),
        scores: scores
            .iter()
            .map(|(tag, score)| (TagId::new(*tag), *score))
            .collect(),
    }
}

#[test]
fn quiz_only_pipeline_matches_hand_computation() {
    let engine = RecommendationEngine::new(Box::new(orienta::InMemoryWeightStore::new()));

    let snapshot = SignalSnapshot {
        quiz_results: vec![quiz_result("q1", &[("dom-it", 2.0)])],
        ..Default::default()
    };

    // 2 (raw) * 15 (base) * 0.40 (influence) = 12
    let scores = engine.recommend(&snapshot);
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[&TagId::new("dom-it")], 12.0);

    // One of four quizzes passed: 40 * 1/4 = 10
    assert_eq!(engine.completeness(&snapshot, DEFAULT_TOTAL_QUIZZES), 10);
}

#[test]
fn graded_favorite_subject_feeds_two_sources() {
    let engine = RecommendationEngine::new(Box::new(orienta::InMemoryWeightStore::new()));

    let snapshot = SignalSnapshot {
        subjects: vec![Subject {
            id: "bio".to_string(),
            name: "Biology".to_string(),
            grade: 5,
            is_favorite: true,
        }],
        relations: vec![SubjectRelation {
            subject_id: "bio".to_string(),
            tags: vec![WeightedTag::new("dom-med", 80)],
        }],
        ..Default::default()
    };

    // Grade: 40 * 0.8 * 0.30 = 9.6; Like: 30 * 0.8 * 0.20 = 4.8
    let scores = engine.recommend(&snapshot);
    let total = scores[&TagId::new("dom-med")];
    assert!((total - 14.4).abs() < 1e-9);
}

#[test]
fn zero_quiz_catalog_never_divides() {
    let engine = RecommendationEngine::new(Box::new(orienta::InMemoryWeightStore::new()));

    let snapshot = SignalSnapshot {
        quiz_results: vec![
            quiz_result("q1", &[("dom-it", 1.0)]),
            quiz_result("q2", &[("dom-it", 1.0)]),
        ],
        ..Default::default()
    };

    assert_eq!(engine.completeness(&snapshot, 0), 0);
}

#[test]
fn slider_edits_survive_an_engine_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weights.toml");

    let engine = RecommendationEngine::new(Box::new(TomlWeightStore::new(&path)));
    let edited = engine.set_weight(WeightField::QuizWeight, 70).unwrap();
    assert_eq!(
        (
            edited.quiz_weight,
            edited.grade_weight,
            edited.subject_like_weight,
            edited.plan_like_weight,
        ),
        (70, 15, 10, 5)
    );

    // A fresh engine against the same file picks the edit back up.
    let restarted = RecommendationEngine::new(Box::new(TomlWeightStore::new(&path)));
    assert_eq!(restarted.weights(), edited);
}

#[test]
fn corrupt_weight_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weights.toml");
    std::fs::write(&path, "definitely not a weight document").unwrap();

    let engine = RecommendationEngine::new(Box::new(TomlWeightStore::new(&path)));
    assert_eq!(engine.weights(), RecommendationWeights::default());
}

#[test]
fn slider_edit_changes_the_next_recompute() {
    let engine = RecommendationEngine::new(Box::new(orienta::InMemoryWeightStore::new()));

    let snapshot = SignalSnapshot {
        quiz_results: vec![quiz_result("q1", &[("dom-it", 2.0)])],
        plan_items: vec![PlanItem {
            id: "spec-1".to_string(),
            kind: PlanItemKind::Specialty,
            specs: vec![WeightedTag::new("dom-art", 100)],
        }],
        ..Default::default()
    };

    let before = engine.recommend(&snapshot);
    // Quiz at 40%: 2 * 15 * 0.40; plan at 10%: 20 * 1.0 * 0.10.
    assert_eq!(before[&TagId::new("dom-it")], 12.0);
    assert_eq!(before[&TagId::new("dom-art")], 2.0);

    engine.set_weight(WeightField::QuizWeight, 0).unwrap();
    let after = engine.recommend(&snapshot);

    // Quiz silenced entirely; plan got its share of the freed influence.
    assert!(!after.contains_key(&TagId::new("dom-it")));
    assert!(after[&TagId::new("dom-art")] > before[&TagId::new("dom-art")]);
}

#[test]
fn full_snapshot_round_trips_through_json() {
    let raw = r#"{
        "quiz_results": [
            { "quiz_id": "q1", "scores": { "dom-it": 2.0, "dom-art": 1.0 } }
        ],
        "subjects": [
            { "id": "bio", "name": "Biology", "grade": 4, "is_favorite": false }
        ],
        "relations": [
            { "subject_id": "bio", "tags": [ { "tag_id": "dom-med", "weight": 80 } ] }
        ],
        "plan_items": [
            { "id": "c1", "type": "college", "specs": [ { "tag_id": "dom-med", "weight": 60 } ] }
        ]
    }"#;

    let snapshot = SignalSnapshot::from_json(raw).unwrap();
    let engine = RecommendationEngine::new(Box::new(orienta::InMemoryWeightStore::new()));

    let scores = engine.recommend(&snapshot);
    // Grade 4 is half strength: 20 * 0.8 * 0.30 = 4.8; college plan adds
    // 20 * 0.6 * 0.10 = 1.2 on the same tag.
    assert!((scores[&TagId::new("dom-med")] - 6.0).abs() < 1e-9);

    // Quiz share 10 + college plan 25.
    assert_eq!(engine.completeness(&snapshot, 4), 35);

    let weights = engine.weights();
    let map: HashMap<TagId, f64> = orienta::aggregate(&snapshot, &weights);
    assert_eq!(map, scores);
}
