//! Fact store: the mutable set of statements the reconcilers operate on.
//!
//! Entries are keyed by full form (content plus complete annotation set). The
//! invariant reconciliation upholds on top of this: no two entries share both a
//! base form and a regular-annotation set — such entries must be merged into
//! one, differing only in accumulated aspect tags.
//!
//! [`FactStore`] is the collaborator seam; [`MemoryStore`] is the in-process
//! implementation. Every mutation reports a [`Delta`] of applied changes.

pub mod mem;

use serde::{Deserialize, Serialize};

pub use mem::MemoryStore;

use crate::error::StoreError;
use crate::statement::Statement;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A single applied store change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// The statement was inserted.
    Added(Statement),
    /// The statement was deleted.
    Removed(Statement),
}

/// The list of changes one operation applied. Empty when nothing changed.
pub type Delta = Vec<Change>;

/// Mutable set of statements keyed by full form.
///
/// `add` and `remove` are atomic primitives. `replace` swaps one full form for
/// another as a single atomic step — reconcilers never issue a bare
/// remove-then-add pair, so a fault can not leave a statement absent halfway
/// through a tag update.
pub trait FactStore: Send + Sync {
    /// Insert a statement. No-op (empty delta) if the full form already exists.
    fn add(&self, statement: Statement) -> StoreResult<Delta>;

    /// Delete a statement by full form. Returns whether the deletion applied.
    fn remove(&self, statement: &Statement) -> StoreResult<bool>;

    /// Atomically replace `old` with `new`.
    ///
    /// Returns `None` (store untouched) when `old` is not present. Otherwise
    /// returns the applied delta: `Removed(old)` plus `Added(new)` unless `new`
    /// already existed as its own entry.
    fn replace(&self, old: &Statement, new: Statement) -> StoreResult<Option<Delta>>;

    /// All entries whose base form equals the candidate's, every annotation
    /// ignored. Read-only; linear scan is acceptable.
    fn find_similar(&self, candidate: &Statement) -> StoreResult<Vec<Statement>>;

    /// Whether the exact full form is present.
    fn contains(&self, statement: &Statement) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all entries.
    fn all_statements(&self) -> Vec<Statement>;
}
