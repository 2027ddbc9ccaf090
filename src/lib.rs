//! # aspekt
//!
//! Aspect-oriented knowledge base core: reconciliation of cross-cutting
//! "aspect" tags on stored statements.
//!
//! ## Architecture
//!
//! - **Statement model** (`statement`): immutable facts with two-level identity
//!   (base form vs. full form) and typed annotations
//! - **Aspect expressions** (`aspect`): conjunctions and disjunctions over
//!   aspect identifiers, fixed at construction
//! - **Fact store** (`store`): full-form-keyed statement set with an atomic
//!   replace primitive
//! - **Reconcilers** (`reconcile`): merge tags into the canonical entry on add,
//!   strip matched tag sets on remove, never duplicating a fact that differs
//!   only in aspect tags
//! - **Engine facade** (`engine`): explicit store handle plus per-base-form
//!   serialization of scan-then-mutate
//!
//! ## Library usage
//!
//! ```
//! use aspekt::aspect::AspectExpr;
//! use aspekt::engine::{AspectEngine, EngineConfig};
//! use aspekt::statement::{Annotation, Statement};
//! use aspekt::store::FactStore;
//!
//! let engine = AspectEngine::in_memory(EngineConfig::default()).unwrap();
//! let fact = Statement::new("Alice", "knows", "Bob")
//!     .with_annotation(Annotation::new("kb:comment", "friend"));
//!
//! engine
//!     .add_under_aspects(&fact, &AspectExpr::conjunction(["public"]))
//!     .unwrap();
//! assert_eq!(engine.store().len(), 1);
//! ```

pub mod aspect;
pub mod engine;
pub mod error;
pub mod reconcile;
pub mod statement;
pub mod store;
