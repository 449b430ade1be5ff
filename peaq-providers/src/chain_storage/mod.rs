//! Reading DID attribute records from ledger storage.
//!
//! The peaq DID pallet keeps one attribute record per storage key. A
//! [`ChainStorage`] implementation fetches the record for a key from a node;
//! it owns connection handling, timeouts and the wire encoding of the request.

use async_trait::async_trait;
use thiserror::Error;

use crate::{common_models::storage_key::StorageKey, http_client};

pub mod imp;

/// Raw attribute record as stored by the DID pallet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
    /// Last block number at which the attribute is valid.
    pub validity: u32,
    /// Creation time, milliseconds since the Unix epoch.
    pub created: u64,
    /// Set when the node returned the storage default because no entry exists.
    pub is_storage_fallback: bool,
}

impl AttributeRecord {
    pub fn storage_fallback() -> Self {
        Self {
            is_storage_fallback: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ChainStorageError {
    #[error("Invalid node url: `{0}`")]
    InvalidEndpoint(String),
    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("Node returned RPC error {code}: `{message}`")]
    Rpc { code: i64, message: String },
    #[error("Invalid storage response: `{0}`")]
    InvalidResponse(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ChainStorage: Send + Sync {
    /// Reads the `item_name` map entry of `pallet_name` under `key`.
    ///
    /// Returns `None` when the node reports nothing for the key. Nodes that
    /// answer with the map's default value return a record flagged with
    /// `is_storage_fallback` instead.
    async fn read_storage(
        &self,
        base_url: &str,
        pallet_name: &str,
        item_name: &str,
        key: &StorageKey,
    ) -> Result<Option<AttributeRecord>, ChainStorageError>;
}
