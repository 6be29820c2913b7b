//! Content hash generators.

use crate::corpus::Corpora;
use md5::Md5;
use rand::seq::IndexedRandom;
use rand::Rng;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hash algorithms used for digest attributes and fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    /// Lower-case algorithm name, matching the attribute name it overrides.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.name() == name)
    }

    /// Length of the hex rendering.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }

    /// Uppercase hex digest of `data`.
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            Self::Md5 => hex::encode_upper(Md5::digest(data)),
            Self::Sha1 => hex::encode_upper(Sha1::digest(data)),
            Self::Sha256 => hex::encode_upper(Sha256::digest(data)),
        }
    }

    /// Pick an algorithm uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Self::Sha256)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digest of a freshly sampled word.
pub fn digest_of_word<R: Rng + ?Sized>(
    algorithm: DigestAlgorithm,
    corpora: &Corpora,
    rng: &mut R,
) -> String {
    algorithm.hex_digest(corpora.words.sample(rng).as_bytes())
}
