//! Heuristic completeness estimation.
//!
//! Scores how much of the available signal surface the user has populated,
//! on a 0-100 scale. This is a coverage heuristic with fixed design
//! constants, not a statistical confidence interval: it answers "how much
//! data is behind the recommendation", nothing about its accuracy.
//!
//! Recomputed from scratch on every call; there is no persisted state.

use crate::types::{PlanItemKind, SignalSnapshot};
use std::collections::HashSet;

/// Presentation fallback for the quiz denominator when the real catalog
/// count is unknown.
pub const DEFAULT_TOTAL_QUIZZES: u32 = 4;

/// Fixed term weights. These are design constants, deliberately not part of
/// the editable weight vector.
const FAVORITE_TERM: f64 = 10.0;
const QUIZ_TERM: f64 = 40.0;
const SPECIALTY_TERM: f64 = 25.0;
const COLLEGE_TERM: f64 = 25.0;

/// Estimate signal coverage on a 0-100 scale.
///
/// - any favorite subject earns [`FAVORITE_TERM`]
/// - the quiz term scales with the share of distinct quizzes passed out of
///   `total_quizzes_in_db`; repeats of the same quiz add nothing, and a
///   zero denominator zeroes the term instead of dividing
/// - a specialty plan entry and a college plan entry each earn their term
///
/// The sum is rounded and clamped above at 100; all terms are non-negative
/// so the result never goes below 0.
pub fn estimate_completeness(snapshot: &SignalSnapshot, total_quizzes_in_db: u32) -> u8 {
    let mut sum = 0.0;

    if snapshot.subjects.iter().any(|s| s.is_favorite) {
        sum += FAVORITE_TERM;
    }

    if total_quizzes_in_db > 0 {
        let unique_passed: HashSet<&str> = snapshot
            .quiz_results
            .iter()
            .map(|q| q.quiz_id.as_str())
            .collect();
        sum += QUIZ_TERM * unique_passed.len() as f64 / f64::from(total_quizzes_in_db);
    }

    if snapshot
        .plan_items
        .iter()
        .any(|p| p.kind == PlanItemKind::Specialty)
    {
        sum += SPECIALTY_TERM;
    }
    if snapshot
        .plan_items
        .iter()
        .any(|p| p.kind == PlanItemKind::College)
    {
        sum += COLLEGE_TERM;
    }

    sum.min(100.0).round() as u8
}
