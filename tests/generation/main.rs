//! Generation integration tests.
//!
//! These tests run the full startup path against real files:
//! 1. Load corpora from a directory (the bundled `data/` or a temp dir)
//! 2. Load a schema definition file
//! 3. Generate events and objects with a fixed seed
//! 4. Check structural properties of every generated record

mod corpus_startup;
mod identifiers;
mod sample_schema;
mod schema_cycles;
mod shared_context;

use event_sampler::{load_context, CorpusOpts, GenerationOpts};
use sampler_core::Schema;
use sampler_generator::{GenerationSettings, SamplerContext};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SEED: u64 = 42;

pub fn manifest_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

pub fn corpus_opts(dir: &Path) -> CorpusOpts {
    CorpusOpts {
        corpus_dir: dir.to_path_buf(),
        countries: None,
        file_extensions: None,
        names: None,
        words: None,
    }
}

pub fn generation_opts(settings: GenerationSettings) -> GenerationOpts {
    GenerationOpts {
        optional_probability: settings.optional_probability,
        array_min: settings.array_min,
        array_max: settings.array_max,
        seed: Some(SEED),
    }
}

/// Context over the bundled corpora and the given schema file.
pub fn bundled_context(schema: &str) -> Arc<SamplerContext<Schema>> {
    load_context(
        &manifest_path(schema),
        &corpus_opts(&manifest_path("data")),
        &generation_opts(GenerationSettings::default()),
    )
    .expect("Failed to load bundled context")
}
