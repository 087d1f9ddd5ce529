//! Core data types for the Orienta recommendation engine
//!
//! This module defines the fundamental data structures the engine reasons
//! about: tags, weighted tag associations, school subjects, quiz results and
//! education-plan items, plus the [`SignalSnapshot`] bundle that carries one
//! user's raw signal data into a recompute.
//!
//! All types are plain serde-serializable records. They are produced by
//! external collaborators (quiz storage, subject catalog, plan sync) and the
//! engine never mutates them.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for tags
///
/// Wraps the catalog identifier string to provide type safety and prevent
/// mixing tag ids with subject or quiz identifiers in the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    /// Create a tag id from a catalog identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for blank identifiers, which never carry signal
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TagId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TagId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An atomic interest/skill category the engine reasons about
///
/// Immutable reference data; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub category: String,
}

/// Thin lookup wrapper over the tag reference catalog
///
/// Consumers use it to resolve aggregated tag ids back to display data.
/// The aggregator itself never needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Resolve a tag by id
    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TagId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A tag paired with a 0-100 strength of association to some entity
/// (subject, specialty or college), interpreted as percent-of-full-effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedTag {
    pub tag_id: TagId,
    pub weight: u8,
}

impl WeightedTag {
    pub fn new(tag_id: impl Into<TagId>, weight: u8) -> Self {
        Self {
            tag_id: tag_id.into(),
            weight,
        }
    }

    /// Association strength as a 0.0-1.0 ratio
    pub fn ratio(&self) -> f64 {
        f64::from(self.weight) / 100.0
    }
}

/// Maps a school subject to the tags it develops, each to some degree
///
/// One relation per subject id; no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRelation {
    pub subject_id: String,
    pub tags: Vec<WeightedTag>,
}

/// A school subject with the user's grade and favorite flag
///
/// Grade is on a 0-5 scale where 0 means unset. Grade and favorite flag are
/// independent signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub grade: u8,
    pub is_favorite: bool,
}

/// One completed quiz with its per-tag score map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: String,
    pub scores: HashMap<TagId, f64>,
}

/// Kind of education-plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanItemKind {
    Specialty,
    College,
}

/// One entry of the user's education plan
///
/// `specs` is the already-resolved tag association list from the external
/// specialty/college catalog. A missing catalog entry leaves it empty, which
/// contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: String,
    /// Serialized as `type`, matching the plan collaborator's documents
    #[serde(rename = "type")]
    pub kind: PlanItemKind,
    #[serde(default)]
    pub specs: Vec<WeightedTag>,
}

/// One user's raw signal data, bundled for a single recompute
///
/// Collaborators assemble this from their stores; the engine treats it as
/// read-only input. All collections default to empty so partially populated
/// snapshot documents parse cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSnapshot {
    #[serde(default)]
    pub quiz_results: Vec<QuizResult>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub relations: Vec<SubjectRelation>,
    #[serde(default)]
    pub plan_items: Vec<PlanItem>,
}

impl SignalSnapshot {
    /// Parse a snapshot document shipped by the sync collaborator
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Subject-id lookup over the relation catalog
    ///
    /// Relations are keyed one-per-subject; a duplicated subject id keeps
    /// the last entry.
    pub fn relation_index(&self) -> HashMap<&str, &[WeightedTag]> {
        self.relations
            .iter()
            .map(|r| (r.subject_id.as_str(), r.tags.as_slice()))
            .collect()
    }

    /// True when no source has any data at all
    pub fn is_empty(&self) -> bool {
        self.quiz_results.is_empty()
            && self.subjects.is_empty()
            && self.plan_items.is_empty()
    }
}
