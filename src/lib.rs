//! event-sampler library
//!
//! Command-line plumbing around the generator crates: option groups shared by
//! the subcommands, startup loading of corpora and schema, and JSON-lines
//! output.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten process events from the bundled schema and corpora
//! event-sampler event --schema schemas/sample.yaml --class process_activity --count 10
//!
//! # One pretty-printed location object, reproducible
//! event-sampler object --schema schemas/sample.yaml --object location --seed 7 --pretty
//! ```

use anyhow::Context;
use clap::Args;
use sampler_core::{GeneratedRecord, Schema};
use sampler_generator::{Corpora, CorpusPaths, GenerationSettings, SamplerContext};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default buffer size for record output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Locations of the sample corpora.
#[derive(Args, Clone, Debug)]
pub struct CorpusOpts {
    /// Directory holding countries.json, file-extensions.tsv, names.txt and words.txt
    #[arg(long, default_value = "data", env = "SAMPLER_CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Country corpus (JSON array), overrides the corpus directory
    #[arg(long, value_name = "PATH", env = "SAMPLER_COUNTRIES")]
    pub countries: Option<PathBuf>,

    /// File-extension corpus (tab-delimited), overrides the corpus directory
    #[arg(long, value_name = "PATH", env = "SAMPLER_FILE_EXTENSIONS")]
    pub file_extensions: Option<PathBuf>,

    /// Person-name corpus (one per line), overrides the corpus directory
    #[arg(long, value_name = "PATH", env = "SAMPLER_NAMES")]
    pub names: Option<PathBuf>,

    /// Word corpus (one per line), overrides the corpus directory
    #[arg(long, value_name = "PATH", env = "SAMPLER_WORDS")]
    pub words: Option<PathBuf>,
}

impl CorpusOpts {
    /// Resolve the four corpus paths.
    pub fn paths(&self) -> CorpusPaths {
        let defaults = CorpusPaths::from_dir(&self.corpus_dir);
        CorpusPaths {
            countries: self.countries.clone().unwrap_or(defaults.countries),
            file_extensions: self
                .file_extensions
                .clone()
                .unwrap_or(defaults.file_extensions),
            names: self.names.clone().unwrap_or(defaults.names),
            words: self.words.clone().unwrap_or(defaults.words),
        }
    }
}

/// Generation tunables.
#[derive(Args, Clone, Debug)]
pub struct GenerationOpts {
    /// Probability of populating each optional attribute
    #[arg(long, default_value_t = sampler_generator::OPTIONAL_INCLUSION_PROBABILITY)]
    pub optional_probability: f64,

    /// Minimum length of generic array attributes (inclusive)
    #[arg(long, default_value_t = sampler_generator::context::DEFAULT_ARRAY_MIN)]
    pub array_min: usize,

    /// Maximum length of generic array attributes (exclusive)
    #[arg(long, default_value_t = sampler_generator::context::DEFAULT_ARRAY_MAX)]
    pub array_max: usize,

    /// Random seed for reproducible output (omit for OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerationOpts {
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            optional_probability: self.optional_probability,
            array_min: self.array_min,
            array_max: self.array_max,
        }
    }
}

/// Where and how to write records.
#[derive(Args, Clone, Debug)]
pub struct OutputOpts {
    /// Output file (one JSON record per line); stdout when omitted
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

/// Load a schema definition file.
pub fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    Schema::from_file(path)
        .with_context(|| format!("Failed to load schema file: {}", path.display()))
}

/// Load corpora and schema and build the shared generation context.
///
/// Any corpus failure aborts here, before a generator exists.
pub fn load_context(
    schema_path: &Path,
    corpus: &CorpusOpts,
    generation: &GenerationOpts,
) -> anyhow::Result<Arc<SamplerContext<Schema>>> {
    let paths = corpus.paths();
    let corpora = Corpora::load(&paths).context("Failed to load sample corpora")?;
    let schema = load_schema(schema_path)?;
    tracing::info!(
        "Loaded schema {}: {} classes, {} objects",
        schema_path.display(),
        schema.classes.len(),
        schema.objects.len()
    );

    let context = SamplerContext::new(corpora, schema)
        .with_settings(generation.settings())
        .context("Invalid generation options")?;
    Ok(Arc::new(context))
}

/// Open the output sink selected by `opts`.
pub fn open_output(opts: &OutputOpts) -> anyhow::Result<Box<dyn Write>> {
    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

/// Write one record as a JSON line (or pretty block).
pub fn write_record<W: Write + ?Sized>(
    writer: &mut W,
    record: &GeneratedRecord,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, record)?;
    } else {
        serde_json::to_writer(&mut *writer, record)?;
    }
    writeln!(writer)?;
    Ok(())
}
