//! Tools for DID method operations and metadata.
//!
//! A peaq DID is an attribute record in the ledger's DID pallet, addressed by
//! the owner's wallet address and a human-chosen name. Resolving it means
//! deriving the storage key, reading the record and decoding its document.

use async_trait::async_trait;

use crate::did::{
    error::DidMethodError,
    model::{DidRecord, ResolveOptions},
};

pub mod error;
pub mod imp;
pub mod model;

/// Resolves DIDs of a DID method.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DidMethod: Send + Sync {
    /// Resolves a DID to its attribute metadata and document.
    ///
    /// Returns `Ok(None)` when no record exists for the address and name.
    async fn resolve(&self, options: &ResolveOptions) -> Result<Option<DidRecord>, DidMethodError>;
}
