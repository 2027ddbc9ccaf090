//! Rich diagnostic error types for the aspekt core.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly what went wrong
//! and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the aspekt crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum AspektError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors surfaced by [`FactStore`](crate::store::FactStore) implementations.
///
/// The in-memory store is infallible; this type exists so that backends with
/// real failure modes (databases, remote stores) can satisfy the same trait.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("store backend error: {message}")]
    #[diagnostic(
        code(aspekt::store::backend),
        help(
            "The fact-store backend failed while applying an operation. \
             Check the backend's own logs; reconciliation state is unchanged \
             for operations that did not report a delta."
        )
    )]
    Backend { message: String },
}

// ---------------------------------------------------------------------------
// Reconciliation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ReconcileError {
    #[error("store consistency violation: {matches} canonical entries for base form `{base_form}`")]
    #[diagnostic(
        code(aspekt::reconcile::store_inconsistency),
        help(
            "A well-formed store holds at most one entry per (base form, \
             regular-annotation set) pair. The reconciler refuses to pick one \
             arbitrarily. Merge the duplicate entries (union their aspect tags) \
             before retrying the operation."
        )
    )]
    StoreInconsistency { base_form: String, matches: usize },

    #[error("canonical entry for base form `{base_form}` vanished between scan and replace")]
    #[diagnostic(
        code(aspekt::reconcile::canonical_vanished),
        help(
            "Another writer removed the entry after the similarity scan located \
             it. Route all mutations for a base form through one engine so the \
             scan-then-mutate sequence is serialized per key."
        )
    )]
    CanonicalVanished { base_form: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(aspekt::engine::invalid_config),
        help("Check the EngineConfig fields. {message}")
    )]
    InvalidConfig { message: String },
}

/// Convenience alias for functions returning aspekt results.
pub type AspektResult<T> = std::result::Result<T, AspektError>;
