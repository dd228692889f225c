//! # Ledger Crypto
//!
//! SHA-512 hashing used to derive state-store addresses for the asset
//! registry. The full signing/verification stack is an external
//! collaborator (see `ledger-core`'s crate docs); this crate only covers
//! the one cryptographic primitive the core itself depends on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

pub use hashing::sha512_hex;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
