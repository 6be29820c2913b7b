//! Network address generators.

use rand::Rng;
use std::net::Ipv4Addr;

/// Four random octets joined by `.`.
pub fn ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    Ipv4Addr::from(rng.random::<[u8; 4]>()).to_string()
}

/// Eight random 16-bit groups, each zero-padded to 4 hex digits, joined by `:`.
///
/// Groups are never compressed (`0000` stays `0000`).
pub fn ipv6<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..8)
        .map(|_| format!("{:04X}", rng.random::<u16>()))
        .collect::<Vec<_>>()
        .join(":")
}

/// Eight random bytes in hex without leading-zero padding, joined by `:`.
pub fn mac<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..8)
        .map(|_| format!("{:X}", rng.random::<u8>()))
        .collect::<Vec<_>>()
        .join(":")
}

/// Random port in `[0, 65536)`.
pub fn port<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(0..65_536)
}
