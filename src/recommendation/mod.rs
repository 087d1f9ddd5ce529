//! Signal aggregation and weight management for tag recommendations.
//!
//! This module implements the scoring core of the engine: it fuses four
//! heterogeneous signal sources into a single tag→score map and manages the
//! influence-weight configuration that controls the fusion.
//!
//! # Architecture
//!
//! - **Extractors**: one pure function per source (quizzes, grades, favorite
//!   subjects, plan contents) emitting `(tag, amount)` contributions
//! - **Aggregator**: linear combination of extractor output, scaled by the
//!   per-source influence factors
//! - **Completeness**: heuristic 0-100 estimate of how much of the signal
//!   surface the user has populated
//! - **Redistribution**: constrained editor that keeps the four influence
//!   weights summing to exactly 100 across any sequence of slider edits
//!
//! # Determinism
//!
//! Everything in this module is synchronous, allocation-light and free of
//! I/O. Aggregation is a pure linear combination: calling it twice with
//! identical inputs yields identical output, and contribution order never
//! affects the sums.
//!
//! # Usage
//!
//! ```rust
//! use orienta::recommendation::{aggregate, estimate_completeness, RecommendationWeights};
//! use orienta::types::{QuizResult, SignalSnapshot, TagId};
//! use std::collections::HashMap;
//!
//! let snapshot = SignalSnapshot {
//!     quiz_results: vec![QuizResult {
//!         quiz_id: "q1".to_string(),
//!         scores: HashMap::from([(TagId::new("dom-it"), 2.0)]),
//!     }],
//!     ..Default::default()
//! };
//!
//! let weights = RecommendationWeights::default();
//! let scores = aggregate(&snapshot, &weights);
//! assert_eq!(scores[&TagId::new("dom-it")], 12.0);
//!
//! let completeness = estimate_completeness(&snapshot, 4);
//! assert_eq!(completeness, 10);
//! ```

pub mod aggregator;
pub mod completeness;
pub mod extractors;
pub mod redistribute;
pub mod weights;

pub use aggregator::aggregate;
pub use completeness::{estimate_completeness, DEFAULT_TOTAL_QUIZZES};
pub use redistribute::redistribute;
pub use weights::{RecommendationWeights, WeightField, INFLUENCE_FIELDS};
