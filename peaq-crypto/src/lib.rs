//! Hashing primitives used by the peaq DID resolver.
//!
//! Storage keys on the peaq ledger are BLAKE2b digests, and SS58 address
//! checksums are BLAKE2b-512 digests. This crate keeps both behind the
//! [`Hasher`] trait so that callers obtain them from a single
//! [`CryptoProvider`] created once per process.

use std::sync::Arc;

use thiserror::Error;

pub mod imp;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CryptoProviderError {
    #[error("Missing hasher: `{0}`")]
    MissingHasher(String),
}

/// Provides hashing.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Hasher: Send + Sync {
    /// Raw digest bytes.
    fn hash(&self, input: &[u8]) -> Vec<u8>;
}

/// Returns hasher instances by name.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CryptoProvider: Send + Sync {
    /// Returns hasher instance.
    fn get_hasher(&self, hasher: &str) -> Result<Arc<dyn Hasher>, CryptoProviderError>;
}
