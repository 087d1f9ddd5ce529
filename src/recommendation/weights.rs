//! Weight configuration for the recommendation engine.
//!
//! [`RecommendationWeights`] carries two independent groups of values:
//!
//! - four *influence weights* — percentages that decide how much each signal
//!   source contributes to the fused score; they sum to exactly 100 at all
//!   times and are only ever mutated through
//!   [`redistribute`](crate::recommendation::redistribute)
//! - four *base scores* — per-source magnitudes controlling the raw strength
//!   of one unit of that source's signal; each is capped independently and
//!   carries no sum invariant

use crate::error::{OrientaError, Result};
use serde::{Deserialize, Serialize};

/// Influence weights are percentages.
pub const MAX_INFLUENCE: u32 = 100;

/// Per-source base score caps. Quiz is lower because raw quiz scores
/// multiply the base directly, while the other sources scale it by a <=1.0
/// association ratio.
pub const MAX_BASE_QUIZ: u32 = 50;
pub const MAX_BASE_GRADE: u32 = 100;
pub const MAX_BASE_LIKE: u32 = 100;
pub const MAX_BASE_PLAN: u32 = 100;

/// The eight numeric fields controlling signal fusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationWeights {
    pub quiz_weight: u32,
    pub grade_weight: u32,
    pub subject_like_weight: u32,
    pub plan_like_weight: u32,

    pub base_quiz_score: u32,
    pub base_grade_score: u32,
    pub base_like_score: u32,
    pub base_plan_score: u32,
}

impl Default for RecommendationWeights {
    /// Shipped defaults: 40/30/20/10 influence split, 15/40/30/20 bases
    fn default() -> Self {
        Self {
            quiz_weight: 40,
            grade_weight: 30,
            subject_like_weight: 20,
            plan_like_weight: 10,
            base_quiz_score: 15,
            base_grade_score: 40,
            base_like_score: 30,
            base_plan_score: 20,
        }
    }
}

impl RecommendationWeights {
    /// Sum of the four influence weights; 100 for every valid vector
    pub fn influence_sum(&self) -> u32 {
        self.quiz_weight + self.grade_weight + self.subject_like_weight + self.plan_like_weight
    }

    /// Check bounds and the sum invariant
    pub fn validate(&self) -> Result<()> {
        for field in INFLUENCE_FIELDS {
            if self.get(field) > MAX_INFLUENCE {
                return Err(OrientaError::InvalidWeights(format!(
                    "{field:?} is {} (max {MAX_INFLUENCE})",
                    self.get(field)
                )));
            }
        }
        if self.influence_sum() != 100 {
            return Err(OrientaError::InvalidWeights(format!(
                "influence sum is {}",
                self.influence_sum()
            )));
        }
        for field in BASE_FIELDS {
            if self.get(field) > field.cap() {
                return Err(OrientaError::InvalidWeights(format!(
                    "{field:?} is {} (max {})",
                    self.get(field),
                    field.cap()
                )));
            }
        }
        Ok(())
    }

    /// Read one field by name
    pub fn get(&self, field: WeightField) -> u32 {
        match field {
            WeightField::QuizWeight => self.quiz_weight,
            WeightField::GradeWeight => self.grade_weight,
            WeightField::SubjectLikeWeight => self.subject_like_weight,
            WeightField::PlanLikeWeight => self.plan_like_weight,
            WeightField::BaseQuizScore => self.base_quiz_score,
            WeightField::BaseGradeScore => self.base_grade_score,
            WeightField::BaseLikeScore => self.base_like_score,
            WeightField::BasePlanScore => self.base_plan_score,
        }
    }

    /// Write one field by name. Does not rebalance; the redistribution
    /// algorithm is the only caller that touches influence fields.
    pub(crate) fn set(&mut self, field: WeightField, value: u32) {
        match field {
            WeightField::QuizWeight => self.quiz_weight = value,
            WeightField::GradeWeight => self.grade_weight = value,
            WeightField::SubjectLikeWeight => self.subject_like_weight = value,
            WeightField::PlanLikeWeight => self.plan_like_weight = value,
            WeightField::BaseQuizScore => self.base_quiz_score = value,
            WeightField::BaseGradeScore => self.base_grade_score = value,
            WeightField::BaseLikeScore => self.base_like_score = value,
            WeightField::BasePlanScore => self.base_plan_score = value,
        }
    }
}

/// Names the eight editable fields of [`RecommendationWeights`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightField {
    QuizWeight,
    GradeWeight,
    SubjectLikeWeight,
    PlanLikeWeight,
    BaseQuizScore,
    BaseGradeScore,
    BaseLikeScore,
    BasePlanScore,
}

/// Canonical influence-field order. Redistribution hands rounding drift to
/// the first remaining field in this order, so it is part of the observable
/// contract.
pub const INFLUENCE_FIELDS: [WeightField; 4] = [
    WeightField::QuizWeight,
    WeightField::GradeWeight,
    WeightField::SubjectLikeWeight,
    WeightField::PlanLikeWeight,
];

pub(crate) const BASE_FIELDS: [WeightField; 4] = [
    WeightField::BaseQuizScore,
    WeightField::BaseGradeScore,
    WeightField::BaseLikeScore,
    WeightField::BasePlanScore,
];

impl WeightField {
    /// True for the four fields bound by the sum-100 invariant
    pub fn is_influence(self) -> bool {
        matches!(
            self,
            WeightField::QuizWeight
                | WeightField::GradeWeight
                | WeightField::SubjectLikeWeight
                | WeightField::PlanLikeWeight
        )
    }

    /// Upper bound for this field; edits beyond it are clamped, not rejected
    pub fn cap(self) -> u32 {
        match self {
            WeightField::BaseQuizScore => MAX_BASE_QUIZ,
            WeightField::BaseGradeScore => MAX_BASE_GRADE,
            WeightField::BaseLikeScore => MAX_BASE_LIKE,
            WeightField::BasePlanScore => MAX_BASE_PLAN,
            _ => MAX_INFLUENCE,
        }
    }
}
