//! Aspect expression model: conjunctions and disjunctions over aspect identifiers.
//!
//! An [`AspectExpr`] describes the "current aspects" an operation runs under.
//! The AND/OR structure is fixed at construction as a tagged variant; the
//! reconcilers match on the variant, never on runtime type. Nesting is limited
//! to a disjunction of conjunctions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::statement::Annotation;

/// Opaque identifier naming a cross-cutting concern (a view or variant name).
///
/// Well-formedness is not validated here; the identifier is whatever the
/// expression-construction layer produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AspectId(String);

impl AspectId {
    /// Create an aspect identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The aspect-tag annotation for this identifier under a marker property.
    pub fn to_annotation(&self, aspect_property: &str) -> Annotation {
        Annotation::new(aspect_property, self.0.clone())
    }
}

impl std::fmt::Display for AspectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AspectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AspectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An ordered list of aspect identifiers that must all apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjunction(Vec<AspectId>);

impl Conjunction {
    /// Create a conjunction from identifiers.
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AspectId>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// The identifiers in this conjunction.
    pub fn ids(&self) -> &[AspectId] {
        &self.0
    }
}

/// An aspect expression: a conjunction, or a disjunction of conjunctions.
///
/// The variant is decided when the expression is built (by whatever surface
/// syntax the caller parses) and carries no behavior beyond exposing its
/// branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectExpr {
    /// All listed aspects apply.
    Conjunction(Conjunction),
    /// At least one branch of conjoined aspects applies.
    Disjunction(Vec<Conjunction>),
}

impl AspectExpr {
    /// Build a conjunctive expression from identifiers.
    pub fn conjunction<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AspectId>,
    {
        Self::Conjunction(Conjunction::new(ids))
    }

    /// Build a disjunctive expression from branches.
    pub fn disjunction(branches: impl IntoIterator<Item = Conjunction>) -> Self {
        Self::Disjunction(branches.into_iter().collect())
    }

    /// The set of identifiers an *add* operation tags with.
    ///
    /// Tagging is additive, so a disjunction collapses to the union of all
    /// branch identifiers rather than a choice between branches.
    pub fn target_ids(&self) -> BTreeSet<AspectId> {
        match self {
            Self::Conjunction(conj) => conj.ids().iter().cloned().collect(),
            Self::Disjunction(branches) => branches
                .iter()
                .flat_map(|conj| conj.ids().iter().cloned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_target_ids() {
        let expr = AspectExpr::conjunction(["x", "y"]);
        let ids = expr.target_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&AspectId::new("x")));
        assert!(ids.contains(&AspectId::new("y")));
    }

    #[test]
    fn disjunction_target_ids_union_all_branches() {
        let expr = AspectExpr::disjunction([
            Conjunction::new(["x", "y"]),
            Conjunction::new(["y", "z"]),
        ]);
        let ids = expr.target_ids();
        assert_eq!(ids.len(), 3); // union deduplicates y
    }

    #[test]
    fn aspect_id_to_annotation() {
        let id = AspectId::new("public");
        let anno = id.to_annotation("kb:aspect");
        assert_eq!(anno.property, "kb:aspect");
        assert_eq!(anno.value, "public");
        assert!(anno.is_aspect("kb:aspect"));
    }

    #[test]
    fn empty_conjunction_is_allowed() {
        // The expression layer does not validate; an empty conjunction simply
        // tags with nothing.
        let expr = AspectExpr::conjunction(Vec::<&str>::new());
        assert!(expr.target_ids().is_empty());
    }
}
