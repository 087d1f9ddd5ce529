//! Persistence seam for the weight configuration.
//!
//! The engine does not own a storage format; it talks to a [`WeightStore`]
//! and leaves the rest to the embedding application. Two implementations
//! ship with the crate: an in-memory store for tests and embedded use, and
//! a TOML-file store for standalone deployments.
//!
//! Load semantics are lenient by design: an absent document means "use the
//! defaults", and a corrupt or invariant-violating document is reported as
//! an error by [`WeightStore::load`] so the caller can decide (the engine
//! logs it and falls back to defaults rather than refusing to start).

use crate::error::Result;
use crate::recommendation::weights::RecommendationWeights;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::info;

/// Storage backend trait for the weight vector
///
/// Synchronous by contract: the engine performs a read-modify-write per
/// slider edit and persists before releasing its lock, so the store must
/// not defer the write.
pub trait WeightStore: Send + Sync {
    /// Load the persisted vector; `None` when nothing was saved yet
    fn load(&self) -> Result<Option<RecommendationWeights>>;

    /// Persist the vector; called after every edit
    fn save(&self, weights: &RecommendationWeights) -> Result<()>;
}

/// Volatile store for tests and for callers that persist elsewhere
#[derive(Debug, Default)]
pub struct InMemoryWeightStore {
    slot: RwLock<Option<RecommendationWeights>>,
}

impl InMemoryWeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store, e.g. with a vector restored by the caller
    pub fn with_weights(weights: RecommendationWeights) -> Self {
        Self {
            slot: RwLock::new(Some(weights)),
        }
    }
}

impl WeightStore for InMemoryWeightStore {
    fn load(&self) -> Result<Option<RecommendationWeights>> {
        Ok(*self.slot.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn save(&self, weights: &RecommendationWeights) -> Result<()> {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(*weights);
        Ok(())
    }
}

/// Persisted weight document
///
/// Carries the save timestamp alongside the vector so operators can tell a
/// stale file from a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredWeights {
    updated_at: DateTime<Utc>,
    weights: RecommendationWeights,
}

/// TOML-file store
///
/// Writes the whole document on every save; the vector is eight integers,
/// so there is nothing to be clever about.
#[derive(Debug, Clone)]
pub struct TomlWeightStore {
    path: PathBuf,
}

impl TomlWeightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl WeightStore for TomlWeightStore {
    fn load(&self) -> Result<Option<RecommendationWeights>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let doc: StoredWeights = toml::from_str(&raw)?;
        doc.weights.validate()?;
        Ok(Some(doc.weights))
    }

    fn save(&self, weights: &RecommendationWeights) -> Result<()> {
        let doc = StoredWeights {
            weights: *weights,
            updated_at: Utc::now(),
        };
        let raw = toml::to_string_pretty(&doc)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        info!(path = %self.path.display(), "saved weight configuration");
        Ok(())
    }
}
