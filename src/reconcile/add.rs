//! Add reconciler: merge target aspect tags into an existing matching
//! statement, or insert a new tagged statement.
//!
//! The scan looks for the *canonical entry*: the store statement sharing the
//! candidate's base form and regular-annotation set. At most one may exist; the
//! reconciler refuses to proceed if the store violates that, rather than
//! overwriting one of the duplicates in scan order.

use tracing::debug;

use crate::aspect::AspectExpr;
use crate::error::ReconcileError;
use crate::statement::Statement;
use crate::store::{Change, Delta, FactStore};

use super::filter::regular_annotations;

/// What an add reconciliation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Target tags were merged into the existing canonical entry. The delta is
    /// empty when the entry already carried every target tag.
    Merged(Delta),
    /// No canonical entry existed; a new tagged statement was inserted.
    Created(Delta),
}

impl AddOutcome {
    /// The changes applied to the store.
    pub fn changes(&self) -> &[Change] {
        match self {
            Self::Merged(delta) | Self::Created(delta) => delta,
        }
    }
}

/// Add `candidate` to the store under the aspects named by `expr`.
///
/// The target tag set is the union of the expression's identifiers: tagging is
/// additive, so a disjunction in the request collapses to all of its branch
/// identifiers rather than a choice between branches.
///
/// # Errors
///
/// [`ReconcileError::StoreInconsistency`] when more than one canonical entry
/// matches the candidate; the caller must repair the store first.
pub fn add_under_aspects(
    store: &dyn FactStore,
    candidate: &Statement,
    expr: &AspectExpr,
    aspect_property: &str,
) -> Result<AddOutcome, ReconcileError> {
    let target_tags: Vec<_> = expr
        .target_ids()
        .iter()
        .map(|id| id.to_annotation(aspect_property))
        .collect();
    let candidate_regular = regular_annotations(candidate, aspect_property);

    let canonical: Vec<Statement> = store
        .find_similar(candidate)?
        .into_iter()
        .filter(|similar| regular_annotations(similar, aspect_property) == candidate_regular)
        .collect();

    match canonical.as_slice() {
        [] => {
            let mut annotations = candidate.annotations.clone();
            annotations.extend(target_tags);
            let tagged = candidate.annotated(annotations);
            debug!(statement = %tagged, "no canonical entry, inserting tagged statement");
            let delta = store.add(tagged)?;
            Ok(AddOutcome::Created(delta))
        }
        [existing] => {
            let mut merged = existing.annotations.clone();
            merged.extend(target_tags);
            if merged == existing.annotations {
                // Re-adding already-present tags is a no-op.
                debug!(statement = %existing, "canonical entry already carries all target tags");
                return Ok(AddOutcome::Merged(vec![]));
            }
            let replacement = existing.annotated(merged);
            debug!(
                old = %existing,
                new = %replacement,
                "merging target tags into canonical entry"
            );
            match store.replace(existing, replacement)? {
                Some(delta) => Ok(AddOutcome::Merged(delta)),
                None => Err(ReconcileError::CanonicalVanished {
                    base_form: candidate.base_form().to_string(),
                }),
            }
        }
        several => Err(ReconcileError::StoreInconsistency {
            base_form: candidate.base_form().to_string(),
            matches: several.len(),
        }),
    }
}
