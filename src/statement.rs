//! Core statement and annotation types.
//!
//! A [`Statement`] is an immutable logical fact: a (subject, predicate, object)
//! triple plus a set of [`Annotation`]s. Identity is two-level: the *base form*
//! (content with all annotations stripped, see [`BaseForm`]) and the *full form*
//! (base form plus the complete annotation set). Stores compare entries by full
//! form; the reconcilers compare candidates by base form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default annotation property marking aspect tags.
///
/// Stores and reconcilers treat an annotation as an aspect tag iff its property
/// equals the configured marker; everything else is a regular annotation.
pub const DEFAULT_ASPECT_PROPERTY: &str = "kb:aspect";

/// A (property, value) pair attached to a statement.
///
/// `Ord` so annotation sets are `BTreeSet`s with deterministic iteration order,
/// which keeps full-form equality and `Hash` structural.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation property (e.g. `kb:comment`, or the aspect marker).
    pub property: String,
    /// Annotation value.
    pub value: String,
}

impl Annotation {
    /// Create a new annotation.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Whether this annotation is an aspect tag under the given marker property.
    pub fn is_aspect(&self, aspect_property: &str) -> bool {
        self.property == aspect_property
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.property, self.value)
    }
}

/// A statement's content with all annotations stripped.
///
/// Usable as a map key: two statements are *similar* iff their base forms are
/// equal, regardless of annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BaseForm {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl std::fmt::Display for BaseForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// An immutable logical fact held by a fact store.
///
/// Statements are value objects: "mutating" a statement's annotations means
/// removing the old full form from the store and adding a new one. The
/// [`annotated`](Statement::annotated) constructor builds that new form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// The subject of the fact.
    pub subject: String,
    /// The predicate (relation) of the fact.
    pub predicate: String,
    /// The object of the fact.
    pub object: String,
    /// Complete annotation set (aspect tags and regular annotations).
    pub annotations: BTreeSet<Annotation>,
}

impl Statement {
    /// Create a new statement with no annotations.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            annotations: BTreeSet::new(),
        }
    }

    /// Add one annotation (builder style).
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    /// Add several annotations (builder style).
    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    /// The statement's base form (content with annotations stripped).
    pub fn base_form(&self) -> BaseForm {
        BaseForm {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
        }
    }

    /// Whether two statements share a base form, ignoring every annotation.
    pub fn same_base(&self, other: &Statement) -> bool {
        self.subject == other.subject
            && self.predicate == other.predicate
            && self.object == other.object
    }

    /// A copy of this statement carrying exactly the given annotation set.
    pub fn annotated(&self, annotations: BTreeSet<Annotation>) -> Statement {
        Statement {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
            annotations,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if !self.annotations.is_empty() {
            write!(f, " [")?;
            for (i, anno) in self.annotations.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{anno}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_base_ignores_annotations() {
        let plain = Statement::new("Alice", "knows", "Bob");
        let tagged = plain
            .clone()
            .with_annotation(Annotation::new(DEFAULT_ASPECT_PROPERTY, "public"));
        assert!(plain.same_base(&tagged));
        assert_ne!(plain, tagged); // full forms differ
        assert_eq!(plain.base_form(), tagged.base_form());
    }

    #[test]
    fn full_form_equality_includes_annotations() {
        let a = Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "friend"));
        let b = Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "friend"));
        assert_eq!(a, b);
    }

    #[test]
    fn annotation_set_deduplicates() {
        let s = Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "friend"))
            .with_annotation(Annotation::new("kb:comment", "friend"));
        assert_eq!(s.annotations.len(), 1);
    }

    #[test]
    fn annotated_replaces_the_whole_set() {
        let s = Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "friend"));
        let bare = s.annotated(BTreeSet::new());
        assert!(bare.annotations.is_empty());
        assert!(bare.same_base(&s));
    }

    #[test]
    fn is_aspect_checks_marker_property() {
        let tag = Annotation::new(DEFAULT_ASPECT_PROPERTY, "public");
        let comment = Annotation::new("kb:comment", "friend");
        assert!(tag.is_aspect(DEFAULT_ASPECT_PROPERTY));
        assert!(!comment.is_aspect(DEFAULT_ASPECT_PROPERTY));
    }

    #[test]
    fn display_shows_annotations() {
        let s = Statement::new("Alice", "knows", "Bob")
            .with_annotation(Annotation::new("kb:comment", "friend"));
        assert_eq!(s.to_string(), "Alice knows Bob [kb:comment=friend]");
        assert_eq!(s.base_form().to_string(), "Alice knows Bob");
    }
}
