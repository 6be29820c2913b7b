//! Command-line interface for event-sampler
//!
//! # Usage Examples
//!
//! ## Events
//! ```bash
//! # One event of a class, as a JSON line on stdout
//! event-sampler event --schema schemas/sample.yaml --class file_activity
//!
//! # 1000 reproducible events into a file
//! event-sampler event --schema schemas/sample.yaml --class process_activity \
//!   --count 1000 --seed 42 --output events.jsonl
//! ```
//!
//! ## Objects
//! ```bash
//! event-sampler object --schema schemas/sample.yaml --object location --pretty
//! ```
//!
//! ## Corpora
//! Corpora are read from `--corpus-dir` (default `data`, env `SAMPLER_CORPUS_DIR`);
//! each file can be overridden with `--countries`, `--file-extensions`,
//! `--names` and `--words`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use event_sampler::{
    load_context, load_schema, open_output, write_record, CorpusOpts, GenerationOpts, OutputOpts,
};
use sampler_core::Schema;
use sampler_generator::{EventGenerator, SamplerContext};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "event-sampler")]
#[command(about = "Generate schema-conformant synthetic event records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate events of a class
    Event {
        /// Schema definition file (YAML or JSON)
        #[arg(long, short = 's', value_name = "PATH")]
        schema: PathBuf,

        /// Class name
        #[arg(long)]
        class: String,

        /// Number of events to generate
        #[arg(long, default_value = "1")]
        count: u64,

        #[command(flatten)]
        corpus: CorpusOpts,

        #[command(flatten)]
        generation: GenerationOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Generate instances of an object
    Object {
        /// Schema definition file (YAML or JSON)
        #[arg(long, short = 's', value_name = "PATH")]
        schema: PathBuf,

        /// Object name
        #[arg(long)]
        object: String,

        /// Number of objects to generate
        #[arg(long, default_value = "1")]
        count: u64,

        #[command(flatten)]
        corpus: CorpusOpts,

        #[command(flatten)]
        generation: GenerationOpts,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// List the classes defined in a schema file
    Classes {
        /// Schema definition file (YAML or JSON)
        #[arg(long, short = 's', value_name = "PATH")]
        schema: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Event {
            schema,
            class,
            count,
            corpus,
            generation,
            output,
        } => {
            let context = load_context(&schema, &corpus, &generation)?;
            let mut generator = new_generator(context, generation.seed);
            let mut writer = open_output(&output)?;

            for event in generator.events(&class, count)? {
                let event = event.with_context(|| format!("Failed to generate '{class}' event"))?;
                write_record(&mut writer, &event, output.pretty)?;
            }
            writer.flush()?;
            tracing::info!("Generated {count} '{class}' events");
        }
        Commands::Object {
            schema,
            object,
            count,
            corpus,
            generation,
            output,
        } => {
            let context = load_context(&schema, &corpus, &generation)?;
            let mut generator = new_generator(context, generation.seed);
            let mut writer = open_output(&output)?;

            for _ in 0..count {
                let record = generator
                    .generate_object_by_name(&object)
                    .with_context(|| format!("Failed to generate '{object}' object"))?;
                write_record(&mut writer, &record, output.pretty)?;
            }
            writer.flush()?;
            tracing::info!("Generated {count} '{object}' objects");
        }
        Commands::Classes { schema } => {
            let schema = load_schema(&schema)?;
            let mut stdout = std::io::stdout().lock();
            for class in &schema.classes {
                writeln!(stdout, "{}\t{}", class.uid, class.name)?;
            }
        }
    }

    Ok(())
}

fn new_generator(context: Arc<SamplerContext<Schema>>, seed: Option<u64>) -> EventGenerator<Schema> {
    match seed {
        Some(seed) => EventGenerator::new(context, seed),
        None => EventGenerator::from_entropy(context),
    }
}
