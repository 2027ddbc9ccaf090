//! Aspect-tag reconciliation over a fact store.
//!
//! Given a candidate statement and an aspect expression, the reconcilers decide
//! how to merge or split aspect-tag annotations on stored statements so that no
//! duplicate statement differing only in aspect tags ever exists, and so that
//! removing a tag set leaves the statement's regular annotations untouched.
//!
//! - [`filter`]: partitions annotations into aspect tags and regular metadata
//! - [`add`]: merges target tags into the canonical entry, or inserts a new one
//! - [`remove`]: strips target tags, conjunctive and disjunctive semantics

pub mod add;
pub mod filter;
pub mod remove;

pub use add::{AddOutcome, add_under_aspects};
pub use remove::{RemoveOutcome, remove_under_aspects};
