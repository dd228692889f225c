//! SHA-512 address hashing.
//!
//! The registry's address scheme (see `ledger-core::address`) is specified
//! in terms of lowercase hex of SHA-512 digests, sliced by hex character
//! count rather than by byte. All address derivation goes through
//! [`sha512_hex`] so there is exactly one place that picks the digest
//! algorithm.

use sha2::{Digest, Sha512};

/// Lowercase hex of the SHA-512 digest of `input`.
///
/// Always 128 hex characters (64 bytes). Address derivation slices this
/// string by hex-character count, not by byte, so callers should treat the
/// return value as a string, never reinterpret it as raw bytes.
#[must_use]
pub fn sha512_hex(input: &str) -> String {
    let digest = Sha512::digest(input.as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_output_is_128_chars() {
        assert_eq!(sha512_hex("da").len(), 128);
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(sha512_hex("hello"), sha512_hex("hello"));
    }

    #[test]
    fn distinct_inputs_distinct_digests() {
        assert_ne!(sha512_hex("a"), sha512_hex("b"));
    }
}
