//! Schema-driven synthetic record generator for event-sampler.
//!
//! This crate turns class and object definitions into populated records. It
//! draws realistic primitive values from read-only corpora loaded once at
//! startup, and randomness from an injected RNG.
//!
//! # Architecture
//!
//! ```text
//! CorpusPaths ──► Corpora ──┐
//!                           ▼
//! SchemaStore ──────► SamplerContext (Arc, read-only)
//!                           │
//!                           ▼
//!                  ┌─────────────────┐
//!                  │ EventGenerator  │
//!                  │  - context      │
//!                  │  - rng (StdRng) │
//!                  └────────┬────────┘
//!                           │  definition walk
//!                           │  ValueSynthesizer per scalar
//!                           ▼
//!                    GeneratedRecord
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use sampler_core::Schema;
//! use sampler_generator::{Corpora, CorpusPaths, EventGenerator, SamplerContext};
//! use std::sync::Arc;
//!
//! let corpora = Corpora::load(&CorpusPaths::from_dir("data")).unwrap();
//! let schema = Schema::from_file("schemas/sample.yaml").unwrap();
//! let context = Arc::new(SamplerContext::new(corpora, schema));
//!
//! let mut generator = EventGenerator::new(context, 42);
//! let event = generator.generate_event_by_name("process_activity").unwrap();
//! println!("{}", event.to_json());
//! ```
//!
//! # Value rules
//!
//! Attribute names with conventional meaning (`version`, `hostname`, `md5`,
//! `raw_data`, ...) are handled by the [`overrides`] table; everything else
//! is generated from its semantic type by [`ValueSynthesizer`]. Definitions
//! typed `location` or `fingerprint` produce fixed-shape records.

pub mod context;
pub mod corpus;
pub mod generator;
pub mod generators;
pub mod overrides;
pub mod synthesizer;

// Re-exports for convenience
pub use context::{GenerationSettings, SamplerContext, OPTIONAL_INCLUSION_PROBABILITY};
pub use corpus::{Corpora, Corpus, CorpusError, CorpusPaths, Country, FileExtension};
pub use generator::{
    generate_event, generate_object, EventGenerator, EventIterator, GeneratorError,
};
pub use generators::{composite_event_id, unique_id, DigestAlgorithm};
pub use synthesizer::ValueSynthesizer;
