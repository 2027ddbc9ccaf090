//! Engine facade: top-level API for aspect-oriented statement management.
//!
//! The `AspectEngine` owns an explicit fact-store handle and serializes the
//! reconcilers' scan-then-mutate sequence per base-form key, so two concurrent
//! callers can not independently create two canonical entries for one fact.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use crate::aspect::AspectExpr;
use crate::error::{AspektResult, EngineError};
use crate::reconcile::{self, AddOutcome, RemoveOutcome};
use crate::statement::{BaseForm, DEFAULT_ASPECT_PROPERTY, Statement};
use crate::store::{FactStore, MemoryStore};

/// Configuration for the aspect engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Annotation property marking aspect tags (default: `kb:aspect`).
    pub aspect_property: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            aspect_property: DEFAULT_ASPECT_PROPERTY.to_string(),
        }
    }
}

/// Facade over a fact store and the aspect-tag reconcilers.
///
/// Holds a per-base-form lock table: a reconciliation for one fact blocks other
/// reconciliations of the same fact, while unrelated facts proceed in parallel.
pub struct AspectEngine<S: FactStore = MemoryStore> {
    config: EngineConfig,
    store: Arc<S>,
    base_locks: DashMap<BaseForm, Arc<Mutex<()>>>,
}

impl AspectEngine<MemoryStore> {
    /// Create an engine over a fresh in-memory store.
    pub fn in_memory(config: EngineConfig) -> AspektResult<Self> {
        Self::new(config, Arc::new(MemoryStore::new()))
    }
}

impl<S: FactStore> AspectEngine<S> {
    /// Create an engine over an existing store handle.
    pub fn new(config: EngineConfig, store: Arc<S>) -> AspektResult<Self> {
        if config.aspect_property.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "aspect_property must not be empty".into(),
            }
            .into());
        }

        tracing::info!(
            aspect_property = %config.aspect_property,
            "initializing aspect engine"
        );

        Ok(Self {
            config,
            store,
            base_locks: DashMap::new(),
        })
    }

    /// Add a statement under the aspects named by the expression.
    ///
    /// Merges the target tags into the canonical entry when one exists,
    /// inserts a new tagged statement otherwise. See
    /// [`reconcile::add_under_aspects`] for the full contract.
    pub fn add_under_aspects(
        &self,
        candidate: &Statement,
        expr: &AspectExpr,
    ) -> AspektResult<AddOutcome> {
        let lock = self.base_lock(candidate);
        let _guard = lock.lock().expect("base-form lock poisoned");
        Ok(reconcile::add_under_aspects(
            self.store.as_ref(),
            candidate,
            expr,
            &self.config.aspect_property,
        )?)
    }

    /// Remove a statement from visibility under the aspects named by the
    /// expression.
    ///
    /// Strips matched tags only; the fact and its regular annotations stay.
    /// See [`reconcile::remove_under_aspects`] for the full contract.
    pub fn remove_under_aspects(
        &self,
        candidate: &Statement,
        expr: &AspectExpr,
    ) -> AspektResult<RemoveOutcome> {
        let lock = self.base_lock(candidate);
        let _guard = lock.lock().expect("base-form lock poisoned");
        Ok(reconcile::remove_under_aspects(
            self.store.as_ref(),
            candidate,
            expr,
            &self.config.aspect_property,
        )?)
    }

    /// Get the fact-store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The mutex serializing reconciliations of this candidate's base form.
    fn base_lock(&self, candidate: &Statement) -> Arc<Mutex<()>> {
        self.base_locks
            .entry(candidate.base_form())
            .or_default()
            .clone()
    }
}

impl<S: FactStore> std::fmt::Debug for AspectEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AspectEngine")
            .field("config", &self.config)
            .field("statements", &self.store.len())
            .finish()
    }
}
