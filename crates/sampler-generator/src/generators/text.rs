//! Corpus-backed text generators: words, names, paths, and addresses.

use crate::corpus::Corpora;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Top-level domains used for synthesized domains and emails.
pub const TLDS: &[&str] = &["com", "net", "org", "io", "edu", "gov", "info"];

/// Shells picked for `shell` attributes.
pub const SHELLS: &[&str] = &["bash", "zsh", "fish", "sh"];

/// Maximum number of directory components in a generated path.
pub const MAX_PATH_DEPTH: usize = 6;

/// One sampled word.
pub fn word<'a, R: Rng + ?Sized>(corpora: &'a Corpora, rng: &mut R) -> &'a str {
    corpora.words.sample(rng)
}

/// `count` sampled words.
pub fn words<'a, R: Rng + ?Sized>(corpora: &'a Corpora, rng: &mut R, count: usize) -> Vec<&'a str> {
    (0..count).map(|_| word(corpora, rng)).collect()
}

/// `count` sampled words joined by spaces.
pub fn sentence<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R, count: usize) -> String {
    words(corpora, rng, count).join(" ")
}

/// Upper-case the first character.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A capitalized single word.
pub fn name<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    capitalize(word(corpora, rng))
}

/// Two sampled person names joined by a space.
pub fn full_name<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    let first = corpora.names.sample(rng);
    let last = corpora.names.sample(rng);
    format!("{first} {last}")
}

/// Two capitalized words, used for city names.
pub fn city<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    format!("{} {}", name(corpora, rng), name(corpora, rng))
}

pub fn tld<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TLDS.choose(rng).copied().unwrap_or("com")
}

/// `word.tld`
pub fn domain<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    let host = word(corpora, rng);
    format!("{host}.{}", tld(rng))
}

/// `word@word.tld`
pub fn email<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    let user = word(corpora, rng);
    format!("{user}@{}", domain(corpora, rng))
}

pub fn shell<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SHELLS.choose(rng).copied().unwrap_or("sh")
}

/// `/` followed by 1 to [`MAX_PATH_DEPTH`] sampled words joined by `/`.
pub fn directory<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    let depth = rng.random_range(1..=MAX_PATH_DEPTH);
    format!("/{}", words(corpora, rng, depth).join("/"))
}

/// Directory path plus `.` and a sampled file extension.
pub fn file_path<R: Rng + ?Sized>(corpora: &Corpora, rng: &mut R) -> String {
    let dir = directory(corpora, rng);
    let extension = &corpora.file_extensions.sample(rng).extension;
    format!("{dir}.{extension}")
}
