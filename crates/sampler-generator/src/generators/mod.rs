//! Primitive value generators.
//!
//! Each function draws from the injected RNG and, where realistic values are
//! needed, from the preloaded [`Corpora`](crate::corpus::Corpora). None of them
//! keep state between calls.

pub mod digest;
pub mod identifier;
pub mod network;
pub mod numeric;
pub mod text;
pub mod timestamp;

pub use digest::DigestAlgorithm;
pub use identifier::{composite_event_id, unique_id};
