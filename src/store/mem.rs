//! In-memory fact store.
//!
//! A `HashSet` of statements behind one `RwLock`: reads (similarity scans,
//! snapshots) take the read lock, mutations take the write lock. `replace`
//! holds the write lock across both steps, which is what makes it atomic.
//! All data is lost on process exit.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::statement::Statement;

use super::{Change, Delta, FactStore, StoreResult};

/// In-memory statement set keyed by full form.
pub struct MemoryStore {
    entries: RwLock<HashSet<Statement>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashSet::new()),
        }
    }

    /// Create a store with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashSet::with_capacity(capacity)),
        }
    }
}

impl FactStore for MemoryStore {
    fn add(&self, statement: Statement) -> StoreResult<Delta> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        if entries.insert(statement.clone()) {
            Ok(vec![Change::Added(statement)])
        } else {
            Ok(vec![])
        }
    }

    fn remove(&self, statement: &Statement) -> StoreResult<bool> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        Ok(entries.remove(statement))
    }

    fn replace(&self, old: &Statement, new: Statement) -> StoreResult<Option<Delta>> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        if !entries.remove(old) {
            return Ok(None);
        }
        let mut delta = vec![Change::Removed(old.clone())];
        if entries.insert(new.clone()) {
            delta.push(Change::Added(new));
        }
        Ok(Some(delta))
    }

    fn find_similar(&self, candidate: &Statement) -> StoreResult<Vec<Statement>> {
        let entries = self.entries.read().expect("store lock poisoned");
        Ok(entries
            .iter()
            .filter(|s| s.same_base(candidate))
            .cloned()
            .collect())
    }

    fn contains(&self, statement: &Statement) -> bool {
        let entries = self.entries.read().expect("store lock poisoned");
        entries.contains(statement)
    }

    fn len(&self) -> usize {
        let entries = self.entries.read().expect("store lock poisoned");
        entries.len()
    }

    fn all_statements(&self) -> Vec<Statement> {
        let entries = self.entries.read().expect("store lock poisoned");
        entries.iter().cloned().collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .finish()
    }
}
