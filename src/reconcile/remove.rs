//! Remove reconciler: strip target aspect tags from matching statements.
//!
//! A remove never deletes the fact itself. Disassociation replaces the stored
//! statement with a copy missing exactly the targeted aspect tags; regular
//! annotations and non-targeted tags are retained. A statement whose last tag
//! is stripped simply stays in the store aspectless.

use std::collections::BTreeSet;

use tracing::debug;

use crate::aspect::{AspectExpr, AspectId};
use crate::error::ReconcileError;
use crate::statement::Statement;
use crate::store::{Change, Delta, FactStore};

use super::filter::has_all_aspects;

/// What a remove reconciliation did.
///
/// "Nothing qualified" is a first-class result, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No similar statement carried the targeted tags; the store is unchanged.
    Unsuccessful,
    /// At least one statement was disassociated from the targeted tags.
    Successful(Delta),
}

impl RemoveOutcome {
    /// The changes applied to the store. Empty for [`RemoveOutcome::Unsuccessful`].
    pub fn changes(&self) -> &[Change] {
        match self {
            Self::Unsuccessful => &[],
            Self::Successful(delta) => delta,
        }
    }

    /// Whether any disassociation applied.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Successful(_))
    }
}

/// Remove `candidate` from visibility under the aspects named by `expr`.
///
/// Conjunctive expression: a similar statement qualifies when its tags are a
/// superset of the conjunction's identifiers, and loses exactly those.
///
/// Disjunctive expression: every branch whose identifiers the statement carries
/// in full contributes its identifiers to one accumulated removal set, applied
/// in a single pass — a statement tagged under variant A is detagged for A even
/// when it does not also satisfy variant B.
pub fn remove_under_aspects(
    store: &dyn FactStore,
    candidate: &Statement,
    expr: &AspectExpr,
    aspect_property: &str,
) -> Result<RemoveOutcome, ReconcileError> {
    let mut delta = Delta::new();
    let mut applied = false;

    // Each similar statement is evaluated independently; the canonical-entry
    // invariant means normally at most one qualifies.
    for similar in store.find_similar(candidate)? {
        let to_remove: Vec<AspectId> = match expr {
            AspectExpr::Conjunction(conj) => {
                if has_all_aspects(&similar, conj.ids(), aspect_property) {
                    conj.ids().to_vec()
                } else {
                    Vec::new()
                }
            }
            AspectExpr::Disjunction(branches) => branches
                .iter()
                .filter(|branch| has_all_aspects(&similar, branch.ids(), aspect_property))
                .flat_map(|branch| branch.ids().iter().cloned())
                .collect(),
        };

        if to_remove.is_empty() {
            debug!(statement = %similar, "no matched aspects, leaving statement untouched");
            continue;
        }

        if let Some(mut changes) = disassociate(store, &similar, &to_remove, aspect_property)? {
            applied = true;
            delta.append(&mut changes);
        }
    }

    if applied {
        Ok(RemoveOutcome::Successful(delta))
    } else {
        Ok(RemoveOutcome::Unsuccessful)
    }
}

/// Replace `statement` with a copy missing the aspect tags for `ids`.
///
/// Exact set difference by identifier: nothing is re-derived, so regular
/// annotations and non-targeted aspect tags survive unchanged. Returns `None`
/// when the statement was not in the store at replace time.
fn disassociate(
    store: &dyn FactStore,
    statement: &Statement,
    ids: &[AspectId],
    aspect_property: &str,
) -> Result<Option<Delta>, ReconcileError> {
    let removal: BTreeSet<_> = ids
        .iter()
        .map(|id| id.to_annotation(aspect_property))
        .collect();
    let retained = statement
        .annotations
        .difference(&removal)
        .cloned()
        .collect();
    let replacement = statement.annotated(retained);
    debug!(old = %statement, new = %replacement, "disassociating aspect tags");
    Ok(store.replace(statement, replacement)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::Conjunction;
    use crate::statement::{Annotation, DEFAULT_ASPECT_PROPERTY};
    use crate::store::MemoryStore;

    fn fact() -> Statement {
        Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "friend"))
    }

    fn aspect(id: &str) -> Annotation {
        Annotation::new(DEFAULT_ASPECT_PROPERTY, id)
    }

    fn remove(store: &MemoryStore, s: &Statement, expr: &AspectExpr) -> RemoveOutcome {
        remove_under_aspects(store, s, expr, DEFAULT_ASPECT_PROPERTY).unwrap()
    }

    #[test]
    fn conjunctive_removal_strips_exactly_the_target_set() {
        let store = MemoryStore::new();
        store
            .add(fact()
                .with_annotation(aspect("x"))
                .with_annotation(aspect("y"))
                .with_annotation(aspect("w")))
            .unwrap();

        let outcome = remove(&store, &fact(), &AspectExpr::conjunction(["x", "y"]));

        assert!(outcome.is_successful());
        assert_eq!(store.len(), 1);
        // Regular annotation and the non-targeted tag survive.
        assert!(store.contains(&fact().with_annotation(aspect("w"))));
    }

    #[test]
    fn partial_tag_set_does_not_qualify() {
        let store = MemoryStore::new();
        let stored = fact().with_annotation(aspect("x"));
        store.add(stored.clone()).unwrap();

        let outcome = remove(&store, &fact(), &AspectExpr::conjunction(["x", "y"]));

        assert_eq!(outcome, RemoveOutcome::Unsuccessful);
        assert!(outcome.changes().is_empty());
        assert!(store.contains(&stored));
    }

    #[test]
    fn removal_of_last_tag_keeps_the_statement() {
        let store = MemoryStore::new();
        store.add(fact().with_annotation(aspect("public"))).unwrap();

        let outcome = remove(&store, &fact(), &AspectExpr::conjunction(["public"]));

        assert!(outcome.is_successful());
        assert_eq!(store.len(), 1);
        assert!(store.contains(&fact())); // aspectless, regular annotation intact
    }

    #[test]
    fn disjunction_accumulates_matched_branches_only() {
        let store = MemoryStore::new();
        store
            .add(fact()
                .with_annotation(aspect("x"))
                .with_annotation(aspect("y"))
                .with_annotation(aspect("w")))
            .unwrap();

        let expr = AspectExpr::disjunction([
            Conjunction::new(["x", "y"]),
            Conjunction::new(["z"]),
        ]);
        let outcome = remove(&store, &fact(), &expr);

        assert!(outcome.is_successful());
        // {x, y} matched and was removed; the z branch did not match; w stays.
        assert!(store.contains(&fact().with_annotation(aspect("w"))));
    }

    #[test]
    fn disjunction_with_no_fully_matched_branch_is_unsuccessful() {
        let store = MemoryStore::new();
        let stored = fact().with_annotation(aspect("x"));
        store.add(stored.clone()).unwrap();

        let expr = AspectExpr::disjunction([
            Conjunction::new(["x", "y"]),
            Conjunction::new(["z"]),
        ]);
        let outcome = remove(&store, &fact(), &expr);

        assert_eq!(outcome, RemoveOutcome::Unsuccessful);
        assert!(store.contains(&stored));
    }

    #[test]
    fn each_similar_statement_is_evaluated_independently() {
        let store = MemoryStore::new();
        // Two similar statements with different regular annotations.
        let friend = fact().with_annotation(aspect("x"));
        let enemy = Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "enemy"))
            .with_annotation(aspect("x"));
        store.add(friend).unwrap();
        store.add(enemy).unwrap();

        let outcome = remove(&store, &fact(), &AspectExpr::conjunction(["x"]));

        assert!(outcome.is_successful());
        // Both qualified; both were detagged, neither was merged or deleted.
        assert_eq!(store.len(), 2);
        assert_eq!(outcome.changes().len(), 4);
        assert!(store.contains(&fact()));
    }

    #[test]
    fn removal_from_empty_store_is_unsuccessful() {
        let store = MemoryStore::new();
        let outcome = remove(&store, &fact(), &AspectExpr::conjunction(["x"]));
        assert_eq!(outcome, RemoveOutcome::Unsuccessful);
    }
}
