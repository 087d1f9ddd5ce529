//! Signal fusion into the tag-score map.
//!
//! Aggregation is a pure linear combination: each source's contributions
//! are scaled by that source's influence factor (`weight / 100`) and summed
//! per tag. The result map is an unbounded non-negative accumulator;
//! consumers compare values relatively, never absolutely, and a tag that is
//! absent means the same thing as a tag at zero.

use crate::recommendation::extractors::{
    grade_signals, like_signals, plan_signals, quiz_signals, Contribution,
};
use crate::recommendation::weights::RecommendationWeights;
use crate::types::{SignalSnapshot, TagId};
use std::collections::HashMap;
use tracing::debug;

/// Fuse all four signal sources into a single tag→score map.
///
/// Commutative and associative over sources and individual contributions,
/// re-entrant, and idempotent: identical inputs produce identical output.
/// Missing relations, empty plans or zero quiz results degrade to a smaller
/// or empty map, never an error.
pub fn aggregate(
    snapshot: &SignalSnapshot,
    weights: &RecommendationWeights,
) -> HashMap<TagId, f64> {
    let relations = snapshot.relation_index();

    let quiz_factor = f64::from(weights.quiz_weight) / 100.0;
    let grade_factor = f64::from(weights.grade_weight) / 100.0;
    let like_factor = f64::from(weights.subject_like_weight) / 100.0;
    let plan_factor = f64::from(weights.plan_like_weight) / 100.0;

    let mut scores = HashMap::new();
    accumulate(
        &mut scores,
        quiz_signals(&snapshot.quiz_results, weights.base_quiz_score),
        quiz_factor,
    );
    accumulate(
        &mut scores,
        grade_signals(&snapshot.subjects, &relations, weights.base_grade_score),
        grade_factor,
    );
    accumulate(
        &mut scores,
        like_signals(&snapshot.subjects, &relations, weights.base_like_score),
        like_factor,
    );
    accumulate(
        &mut scores,
        plan_signals(&snapshot.plan_items, weights.base_plan_score),
        plan_factor,
    );

    debug!(
        tags = scores.len(),
        quizzes = snapshot.quiz_results.len(),
        subjects = snapshot.subjects.len(),
        plan_items = snapshot.plan_items.len(),
        "aggregated signal sources"
    );
    scores
}

/// Fold one source's contributions into the accumulator.
///
/// Zero amounts are not inserted, so tags whose total is zero stay absent
/// from the map.
fn accumulate(scores: &mut HashMap<TagId, f64>, contributions: Vec<Contribution>, factor: f64) {
    for (tag_id, amount) in contributions {
        let scaled = amount * factor;
        if scaled != 0.0 {
            *scores.entry(tag_id).or_insert(0.0) += scaled;
        }
    }
}
