//! Core types for event-sampler.
//!
//! This crate provides the types shared by the generator and its callers:
//!
//! - [`SemanticType`] and [`Requirement`] - attribute metadata
//! - [`FieldSpec`] and [`RecordDefinition`] - class and object definitions
//! - [`SchemaStore`] - lookup interface onto a definition store
//! - [`Schema`] - in-memory store loaded from YAML or JSON
//! - [`GeneratedValue`] and [`GeneratedRecord`] - generation output
//!
//! # Architecture
//!
//! ```text
//! sampler-core (this crate)
//!    │
//!    └─── sampler-generator  (corpora, synthesizer, record generator)
//!            │
//!            └─── event-sampler  (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sampler_core::{Schema, SchemaStore};
//!
//! let schema = Schema::from_yaml(r#"
//! classes:
//!   - name: base_event
//!     uid: 0
//!     attributes:
//!       - name: message
//!         type: string
//!         requirement: required
//! "#).unwrap();
//!
//! let class = schema.class("base_event").unwrap();
//! assert_eq!(class.required_attributes().count(), 1);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{
    ClassDefinition, FieldSpec, ObjectDefinition, RecordDefinition, Schema, SchemaError,
    SchemaStore,
};
pub use types::{Requirement, SemanticType};
pub use values::{GeneratedRecord, GeneratedValue};
