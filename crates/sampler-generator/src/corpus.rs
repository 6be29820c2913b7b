//! Read-only sample corpora loaded once at startup.
//!
//! Four corpora feed the synthesizer: country records (JSON array), file
//! extensions (tab-delimited `extension<TAB>description`), person names and
//! generic words (one entry per line). A corpus is never empty, so sampling
//! always draws an index in `[0, len)`.

use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default file name of the country corpus inside a corpus directory.
pub const COUNTRIES_FILE: &str = "countries.json";
/// Default file name of the file-extension corpus.
pub const FILE_EXTENSIONS_FILE: &str = "file-extensions.tsv";
/// Default file name of the person-name corpus.
pub const NAMES_FILE: &str = "names.txt";
/// Default file name of the word corpus.
pub const WORDS_FILE: &str = "words.txt";

/// Errors that abort corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Source could not be read.
    #[error("Failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON source could not be decoded.
    #[error("Failed to parse corpus {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A row of a delimited source has the wrong shape.
    #[error("Malformed corpus {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Source holds no entries.
    #[error("Corpus {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// A non-empty, immutable table of sample values.
#[derive(Debug, Clone)]
pub struct Corpus<T> {
    entries: Vec<T>,
}

impl<T> Corpus<T> {
    /// Wrap entries, rejecting an empty table.
    pub fn new(entries: Vec<T>, source: impl AsRef<Path>) -> Result<Self, CorpusError> {
        if entries.is_empty() {
            return Err(CorpusError::Empty {
                path: source.as_ref().to_path_buf(),
            });
        }
        Ok(Self { entries })
    }

    /// Number of entries; the exclusive upper bound for sampling.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Pick one entry uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.entries[rng.random_range(0..self.entries.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

/// One row of the country corpus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    #[serde(rename = "Continent_Name")]
    pub continent_name: String,

    #[serde(rename = "Two_Letter_Country_Code")]
    pub country_code: String,

    #[serde(rename = "Country_Name")]
    pub country_name: String,
}

/// One row of the file-extension corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtension {
    /// Lower-cased extension without the dot
    pub extension: String,
    pub description: String,
}

/// Parse a line-oriented corpus. Trailing whitespace is trimmed and blank
/// rows are skipped.
pub fn parse_lines(text: &str, source: &Path) -> Result<Corpus<String>, CorpusError> {
    let entries = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Corpus::new(entries, source)
}

/// Parse a tab-delimited `extension<TAB>description` corpus.
pub fn parse_file_extensions(
    text: &str,
    source: &Path,
) -> Result<Corpus<FileExtension>, CorpusError> {
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [extension, description] => entries.push(FileExtension {
                extension: extension.to_lowercase(),
                description: description.to_string(),
            }),
            _ => {
                return Err(CorpusError::Malformed {
                    path: source.to_path_buf(),
                    line: idx + 1,
                    reason: format!("expected 2 tab-separated fields, found {}", fields.len()),
                })
            }
        }
    }
    Corpus::new(entries, source)
}

/// Parse a JSON array of country records.
pub fn parse_countries(text: &str, source: &Path) -> Result<Corpus<Country>, CorpusError> {
    let entries: Vec<Country> = serde_json::from_str(text).map_err(|e| CorpusError::Json {
        path: source.to_path_buf(),
        source: e,
    })?;
    Corpus::new(entries, source)
}

fn read_source(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a line-oriented corpus from a file.
pub fn load_lines(path: &Path) -> Result<Corpus<String>, CorpusError> {
    parse_lines(&read_source(path)?, path)
}

/// Load the file-extension corpus from a file.
pub fn load_file_extensions(path: &Path) -> Result<Corpus<FileExtension>, CorpusError> {
    parse_file_extensions(&read_source(path)?, path)
}

/// Load the country corpus from a file.
pub fn load_countries(path: &Path) -> Result<Corpus<Country>, CorpusError> {
    parse_countries(&read_source(path)?, path)
}

/// Locations of the four corpus sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub countries: PathBuf,
    pub file_extensions: PathBuf,
    pub names: PathBuf,
    pub words: PathBuf,
}

impl CorpusPaths {
    /// Resolve the default file names inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            countries: dir.join(COUNTRIES_FILE),
            file_extensions: dir.join(FILE_EXTENSIONS_FILE),
            names: dir.join(NAMES_FILE),
            words: dir.join(WORDS_FILE),
        }
    }
}

/// All corpora used by the synthesizer.
#[derive(Debug, Clone)]
pub struct Corpora {
    pub countries: Corpus<Country>,
    pub file_extensions: Corpus<FileExtension>,
    pub names: Corpus<String>,
    pub words: Corpus<String>,
}

impl Corpora {
    /// Load every corpus, failing on the first unreadable or malformed source.
    pub fn load(paths: &CorpusPaths) -> Result<Self, CorpusError> {
        let corpora = Self {
            countries: load_countries(&paths.countries)?,
            file_extensions: load_file_extensions(&paths.file_extensions)?,
            names: load_lines(&paths.names)?,
            words: load_lines(&paths.words)?,
        };
        info!(
            "Loaded corpora: {} countries, {} file extensions, {} names, {} words",
            corpora.countries.len(),
            corpora.file_extensions.len(),
            corpora.names.len(),
            corpora.words.len()
        );
        Ok(corpora)
    }
}
