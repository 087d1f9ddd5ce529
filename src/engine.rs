//! Engine facade owning the live weight configuration.
//!
//! [`RecommendationEngine`] is the single writer of the weight vector: all
//! slider edits go through [`RecommendationEngine::set_weight`], which
//! performs the redistribution and persists the result before releasing the
//! write lock. Two concurrent slider events therefore serialize, and each
//! one reads a consistent snapshot of the vector (last write wins on the
//! stored document).
//!
//! Scoring itself stays pure: `recommend` and `completeness` only read a
//! snapshot of the vector and delegate to the computation core.

use crate::error::Result;
use crate::recommendation::aggregator::aggregate;
use crate::recommendation::completeness::estimate_completeness;
use crate::recommendation::redistribute::redistribute;
use crate::recommendation::weights::{RecommendationWeights, WeightField};
use crate::store::WeightStore;
use crate::types::{SignalSnapshot, TagId};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{info, warn};

/// Facade over the scoring core and the weight store
pub struct RecommendationEngine {
    weights: RwLock<RecommendationWeights>,
    store: Box<dyn WeightStore>,
}

impl RecommendationEngine {
    /// Create an engine, restoring the persisted weight vector
    ///
    /// An empty store yields the shipped defaults. A store that fails to
    /// load, or holds a vector violating its invariants, is logged and
    /// replaced by the defaults; startup never fails over a bad weight
    /// file.
    pub fn new(store: Box<dyn WeightStore>) -> Self {
        let weights = match store.load() {
            Ok(Some(weights)) => {
                info!("restored persisted weight configuration");
                weights
            }
            Ok(None) => {
                info!("no persisted weights, using defaults");
                RecommendationWeights::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load persisted weights, using defaults");
                RecommendationWeights::default()
            }
        };

        Self {
            weights: RwLock::new(weights),
            store,
        }
    }

    /// Current weight vector (a copy; the live value only changes through
    /// [`Self::set_weight`])
    pub fn weights(&self) -> RecommendationWeights {
        *self.weights.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply one slider edit and persist the result
    ///
    /// Runs the constrained redistribution against the current vector and
    /// saves before the lock is released, so concurrent edits serialize.
    /// Returns the new vector.
    pub fn set_weight(&self, field: WeightField, value: u32) -> Result<RecommendationWeights> {
        let mut guard = self.weights.write().unwrap_or_else(|e| e.into_inner());
        let next = redistribute(&guard, field, value);
        self.store.save(&next)?;
        *guard = next;
        Ok(next)
    }

    /// Fuse the snapshot's signal sources into a tag→score map
    pub fn recommend(&self, snapshot: &SignalSnapshot) -> HashMap<TagId, f64> {
        aggregate(snapshot, &self.weights())
    }

    /// Estimate signal coverage for the snapshot
    pub fn completeness(&self, snapshot: &SignalSnapshot, total_quizzes_in_db: u32) -> u8 {
        estimate_completeness(snapshot, total_quizzes_in_db)
    }
}
