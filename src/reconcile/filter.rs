//! Regular-annotation filter: partition a statement's annotations into aspect
//! tags and regular (non-aspect) metadata.
//!
//! "Same fact with the same non-aspect metadata" is the comparison both
//! reconcilers run on every similar statement, so these stay pure functions
//! with no store access.

use std::collections::BTreeSet;

use crate::aspect::AspectId;
use crate::statement::{Annotation, Statement};

/// The subset of a statement's annotations that are not aspect tags.
pub fn regular_annotations(statement: &Statement, aspect_property: &str) -> BTreeSet<Annotation> {
    statement
        .annotations
        .iter()
        .filter(|anno| !anno.is_aspect(aspect_property))
        .cloned()
        .collect()
}

/// The aspect identifiers a statement is currently tagged with.
pub fn aspect_ids(statement: &Statement, aspect_property: &str) -> BTreeSet<AspectId> {
    statement
        .annotations
        .iter()
        .filter(|anno| anno.is_aspect(aspect_property))
        .map(|anno| AspectId::new(anno.value.clone()))
        .collect()
}

/// Whether a statement carries every one of the given aspect identifiers.
pub fn has_all_aspects(statement: &Statement, ids: &[AspectId], aspect_property: &str) -> bool {
    let tags = aspect_ids(statement, aspect_property);
    ids.iter().all(|id| tags.contains(id))
}
