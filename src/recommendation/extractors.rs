//! Per-source signal extraction.
//!
//! One pure function per signal source, each mapping a raw data collection
//! into `(tag, amount)` contributions scaled by the source's base score and
//! any item-local association weight. Extractors never mutate their input,
//! skip blank tag ids, and treat missing references (a subject without a
//! relation, a plan item whose catalog entry resolved to nothing) as zero
//! contribution rather than an error.
//!
//! Influence weights are applied later, by the aggregator; extractors only
//! know about base scores.

use crate::types::{PlanItem, QuizResult, Subject, TagId, WeightedTag};
use std::collections::HashMap;

/// Grades below this never contribute to the grade signal.
pub const GOOD_GRADE: u8 = 4;
/// Grades at or above this contribute at full strength; a grade of exactly
/// [`GOOD_GRADE`] contributes at half strength.
pub const EXCELLENT_GRADE: u8 = 5;

/// One `(tag, amount)` contribution emitted by an extractor.
pub type Contribution = (TagId, f64);

/// Quiz results: every `(tag, raw_score)` entry of every result contributes
/// `raw_score * base_quiz`. Multiple results and multiple tags per result
/// are all additive.
pub fn quiz_signals(results: &[QuizResult], base_quiz: u32) -> Vec<Contribution> {
    let base = f64::from(base_quiz);
    let mut out = Vec::new();
    for result in results {
        for (tag_id, raw_score) in &result.scores {
            if tag_id.is_empty() {
                continue;
            }
            out.push((tag_id.clone(), raw_score * base));
        }
    }
    out
}

/// Grades: only subjects at [`GOOD_GRADE`] or better contribute, through
/// their relation's weighted tags. A top grade earns the full base score, a
/// merely good one earns half.
pub fn grade_signals(
    subjects: &[Subject],
    relations: &HashMap<&str, &[WeightedTag]>,
    base_grade: u32,
) -> Vec<Contribution> {
    let mut out = Vec::new();
    for subject in subjects {
        if subject.grade < GOOD_GRADE {
            continue;
        }
        let Some(tags) = relations.get(subject.id.as_str()) else {
            continue;
        };
        let boost = if subject.grade >= EXCELLENT_GRADE {
            f64::from(base_grade)
        } else {
            f64::from(base_grade) / 2.0
        };
        push_weighted(&mut out, tags, boost);
    }
    out
}

/// Favorite subjects: contribute through their relation regardless of
/// grade. The favorite flag and the grade are independent signals, so one
/// subject can feed both extractors.
pub fn like_signals(
    subjects: &[Subject],
    relations: &HashMap<&str, &[WeightedTag]>,
    base_like: u32,
) -> Vec<Contribution> {
    let mut out = Vec::new();
    for subject in subjects {
        if !subject.is_favorite {
            continue;
        }
        let Some(tags) = relations.get(subject.id.as_str()) else {
            continue;
        };
        push_weighted(&mut out, tags, f64::from(base_like));
    }
    out
}

/// Plan contents: every weighted tag of every resolved plan item
/// contributes `base_plan * weight/100`.
pub fn plan_signals(plan_items: &[PlanItem], base_plan: u32) -> Vec<Contribution> {
    let mut out = Vec::new();
    for item in plan_items {
        push_weighted(&mut out, &item.specs, f64::from(base_plan));
    }
    out
}

fn push_weighted(out: &mut Vec<Contribution>, tags: &[WeightedTag], boost: f64) {
    for tag in tags {
        if tag.tag_id.is_empty() {
            continue;
        }
        out.push((tag.tag_id.clone(), boost * tag.ratio()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlanItemKind;

    fn subject(id: &str, grade: u8, is_favorite: bool) -> Subject {
        Subject {
            id: id.to_string(),
            name: id.to_string(),
            grade,
            is_favorite,
        }
    }

    fn single_relation<'a>(
        subject_id: &'a str,
        tags: &'a [WeightedTag],
    ) -> HashMap<&'a str, &'a [WeightedTag]> {
        HashMap::from([(subject_id, tags)])
    }

    #[test]
    fn test_quiz_signals_are_additive() {
        let results = vec![
            QuizResult {
                quiz_id: "q1".to_string(),
                scores: HashMap::from([(TagId::new("dom-it"), 2.0)]),
            },
            QuizResult {
                quiz_id: "q2".to_string(),
                scores: HashMap::from([
                    (TagId::new("dom-it"), 1.0),
                    (TagId::new("dom-art"), 3.0),
                ]),
            },
        ];

        let contributions = quiz_signals(&results, 15);
        assert_eq!(contributions.len(), 3);

        let it_total: f64 = contributions
            .iter()
            .filter(|(tag, _)| tag.as_str() == "dom-it")
            .map(|(_, amount)| amount)
            .sum();
        assert_eq!(it_total, 45.0); // 2*15 + 1*15
    }

    #[test]
    fn test_quiz_signals_skip_blank_tag_ids() {
        let results = vec![QuizResult {
            quiz_id: "q1".to_string(),
            scores: HashMap::from([(TagId::new(""), 5.0)]),
        }];
        assert!(quiz_signals(&results, 15).is_empty());
    }

    #[test]
    fn test_grade_three_contributes_nothing() {
        let tags = [WeightedTag::new("dom-med", 80)];
        let relations = single_relation("bio", &tags);
        let subjects = vec![subject("bio", 3, false)];

        assert!(grade_signals(&subjects, &relations, 40).is_empty());
    }

    #[test]
    fn test_grade_four_is_half_of_grade_five() {
        let tags = [WeightedTag::new("dom-med", 80)];
        let relations = single_relation("bio", &tags);

        let four = grade_signals(&[subject("bio", 4, false)], &relations, 40);
        let five = grade_signals(&[subject("bio", 5, false)], &relations, 40);

        assert_eq!(four.len(), 1);
        assert_eq!(five.len(), 1);
        assert_eq!(four[0].1, five[0].1 / 2.0);
        assert_eq!(five[0].1, 32.0); // 40 * 0.8
    }

    #[test]
    fn test_graded_subject_without_relation_is_silent() {
        let relations = HashMap::new();
        let subjects = vec![subject("bio", 5, false)];
        assert!(grade_signals(&subjects, &relations, 40).is_empty());
    }

    #[test]
    fn test_like_signals_ignore_grade() {
        let tags = [WeightedTag::new("dom-med", 80)];
        let relations = single_relation("bio", &tags);

        // Favorite with a failing grade still contributes.
        let liked = like_signals(&[subject("bio", 2, true)], &relations, 30);
        assert_eq!(liked.len(), 1);
        assert_eq!(liked[0].1, 24.0); // 30 * 0.8

        // Good grade without the flag does not.
        assert!(like_signals(&[subject("bio", 5, false)], &relations, 30).is_empty());
    }

    #[test]
    fn test_plan_signals_skip_unresolved_items() {
        let items = vec![
            PlanItem {
                id: "spec-1".to_string(),
                kind: PlanItemKind::Specialty,
                specs: vec![WeightedTag::new("dom-it", 50)],
            },
            PlanItem {
                id: "spec-2".to_string(),
                kind: PlanItemKind::College,
                specs: vec![],
            },
        ];

        let contributions = plan_signals(&items, 20);
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions[0].1, 10.0); // 20 * 0.5
    }
}
