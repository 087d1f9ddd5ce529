//! Orienta - Signal-Fusion Tag Recommendation Engine
//!
//! An in-process computation library that recommends domain tags (interest
//! and skill affinities such as "IT" or "fine motor skills") by fusing four
//! independently weighted signal sources:
//! - quiz results
//! - subject grades
//! - favorite subjects
//! - education-plan contents (specialties and colleges)
//!
//! alongside a 0-100 completeness estimate of how much signal the fused
//! result is standing on.
//!
//! # Architecture
//!
//! The system is organized into a few layers:
//! - **Types**: the raw signal data model ([`SignalSnapshot`] and friends)
//! - **Recommendation**: extractors, aggregator, completeness estimator and
//!   the constrained weight-redistribution editor
//! - **Store**: the persistence seam for the weight configuration
//! - **Engine**: the facade tying them together for embedding applications
//!
//! # Example
//!
//! ```rust
//! use orienta::{RecommendationEngine, InMemoryWeightStore, WeightField};
//! use orienta::types::SignalSnapshot;
//!
//! let engine = RecommendationEngine::new(Box::new(InMemoryWeightStore::new()));
//!
//! let snapshot = SignalSnapshot::default();
//! let scores = engine.recommend(&snapshot);
//! assert!(scores.is_empty());
//!
//! // Drag the quiz slider to 70; the other three weights rebalance so the
//! // influence split keeps summing to 100.
//! let weights = engine.set_weight(WeightField::QuizWeight, 70).unwrap();
//! assert_eq!(weights.influence_sum(), 100);
//! ```

pub mod engine;
pub mod error;
pub mod recommendation;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use engine::RecommendationEngine;
pub use error::{OrientaError, Result};
pub use recommendation::{
    aggregate, estimate_completeness, redistribute, RecommendationWeights, WeightField,
    DEFAULT_TOTAL_QUIZZES, INFLUENCE_FIELDS,
};
pub use store::{InMemoryWeightStore, TomlWeightStore, WeightStore};
pub use types::{
    PlanItem, PlanItemKind, QuizResult, SignalSnapshot, Subject, SubjectRelation, Tag, TagCatalog,
    TagId, WeightedTag,
};
