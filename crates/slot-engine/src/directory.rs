//! Owner display-name resolution.
//!
//! The booking view labels each slot with the owner's name, but the owner
//! directory is fetched best-effort and may be missing entries (or absent
//! entirely). Resolution is therefore a total function: every id maps to a
//! name, falling back to a generated placeholder.

use std::collections::HashMap;

use serde::Deserialize;

/// A single record from the owner directory collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerRecord {
    pub id: i64,
    pub name: String,
}

/// Total `owner_id -> display name` lookup with a generated fallback.
#[derive(Debug, Clone, Default)]
pub struct OwnerDirectory {
    names: HashMap<i64, String>,
}

impl OwnerDirectory {
    /// An empty directory; every lookup resolves to the placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from `(id, name)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, String)>) -> Self {
        Self {
            names: pairs.into_iter().collect(),
        }
    }

    /// Build a directory from deserialized [`OwnerRecord`]s.
    pub fn from_records(records: impl IntoIterator<Item = OwnerRecord>) -> Self {
        Self::from_pairs(records.into_iter().map(|r| (r.id, r.name)))
    }

    pub fn insert(&mut self, id: i64, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Resolve an owner id to a display name. Never fails: unknown ids get
    /// the placeholder `"Owner {id}"`.
    pub fn resolve(&self, id: i64) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Owner {}", id))
    }
}
