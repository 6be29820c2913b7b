//! Corpus failures abort startup before any generator exists.

use super::{corpus_opts, generation_opts, manifest_path};
use event_sampler::load_context;
use sampler_generator::corpus::{COUNTRIES_FILE, FILE_EXTENSIONS_FILE, NAMES_FILE, WORDS_FILE};
use sampler_generator::{Corpora, CorpusError, CorpusPaths, GenerationSettings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = "schemas/sample.yaml";

/// Copy the bundled corpora into a temp dir so single files can be broken.
fn copy_bundled_corpora() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in [COUNTRIES_FILE, FILE_EXTENSIONS_FILE, NAMES_FILE, WORDS_FILE] {
        fs::copy(manifest_path("data").join(name), dir.path().join(name)).unwrap();
    }
    dir
}

fn startup_error(dir: &Path) -> String {
    let err = load_context(
        &manifest_path(SCHEMA),
        &corpus_opts(dir),
        &generation_opts(GenerationSettings::default()),
    )
    .err()
    .expect("Startup should fail");
    format!("{err:#}")
}

#[test]
fn test_bundled_corpora_load() {
    let corpora = Corpora::load(&CorpusPaths::from_dir(manifest_path("data"))).unwrap();
    assert!(corpora.countries.len() > 10);
    assert!(corpora.file_extensions.len() > 10);
    assert!(corpora.names.len() > 10);
    assert!(corpora.words.len() > 10);
    assert!(corpora
        .file_extensions
        .iter()
        .all(|entry| entry.extension == entry.extension.to_lowercase()));
}

#[test]
fn test_missing_corpus_directory() {
    let dir = TempDir::new().unwrap();
    let message = startup_error(&dir.path().join("absent"));
    assert!(message.contains("Failed to load sample corpora"), "{message}");
    assert!(message.contains(COUNTRIES_FILE), "{message}");
}

#[test]
fn test_empty_word_corpus() {
    let dir = copy_bundled_corpora();
    fs::write(dir.path().join(WORDS_FILE), "\n\n").unwrap();

    match Corpora::load(&CorpusPaths::from_dir(dir.path())) {
        Err(CorpusError::Empty { path }) => assert_eq!(path, dir.path().join(WORDS_FILE)),
        other => panic!("Expected Empty error, got {other:?}"),
    }
    assert!(startup_error(dir.path()).contains("is empty"));
}

#[test]
fn test_malformed_extension_row() {
    let dir = copy_bundled_corpora();
    fs::write(
        dir.path().join(FILE_EXTENSIONS_FILE),
        "txt\tPlain text\nbroken-row\n",
    )
    .unwrap();

    let message = startup_error(dir.path());
    assert!(message.contains("line 2"), "{message}");
}

#[test]
fn test_country_corpus_must_be_an_array() {
    let dir = copy_bundled_corpora();
    fs::write(dir.path().join(COUNTRIES_FILE), r#"{"Country_Name": "Nowhere"}"#).unwrap();

    assert!(matches!(
        Corpora::load(&CorpusPaths::from_dir(dir.path())),
        Err(CorpusError::Json { .. })
    ));
}

#[test]
fn test_invalid_settings_rejected_at_startup() {
    let settings = GenerationSettings {
        array_min: 4,
        array_max: 4,
        ..Default::default()
    };
    let err = load_context(
        &manifest_path(SCHEMA),
        &corpus_opts(&manifest_path("data")),
        &generation_opts(settings),
    )
    .err()
    .expect("Empty array range should be rejected");
    assert!(format!("{err:#}").contains("Invalid generation"));
}
