//! Storage reads through the Substrate JSON-RPC `state_getStorage` call.
//!
//! Nodes are usually advertised with a websocket address. The same RPC
//! surface is served over HTTP on the same host and port, so `ws`/`wss`
//! endpoints are rewritten to `http`/`https` and queried with a single POST.

use std::sync::Arc;

use async_trait::async_trait;
use codec::DecodeAll;
use sp_crypto_hashing::{blake2_128, twox_128};
use url::Url;

use crate::{
    chain_storage::{AttributeRecord, ChainStorage, ChainStorageError},
    common_models::storage_key::StorageKey,
    http_client::HttpClient,
};

use dto::{JsonRpcRequestDTO, JsonRpcResponseDTO, OnChainAttributeDTO};

mod dto;


const GET_STORAGE_METHOD: &str = "state_getStorage";

pub struct SubstrateRpcStorage {
    client: Arc<dyn HttpClient>,
}

impl SubstrateRpcStorage {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChainStorage for SubstrateRpcStorage {
    async fn read_storage(
        &self,
        base_url: &str,
        pallet_name: &str,
        item_name: &str,
        key: &StorageKey,
    ) -> Result<Option<AttributeRecord>, ChainStorageError> {
        let url = rpc_http_url(base_url)?;
        let storage_key = map_storage_key(pallet_name, item_name, key);

        tracing::debug!(%url, %storage_key, "Querying node storage");

        let response: JsonRpcResponseDTO = self
            .client
            .post(url.as_str())
            .json(JsonRpcRequestDTO {
                jsonrpc: "2.0",
                id: 1,
                method: GET_STORAGE_METHOD,
                params: vec![storage_key],
            })?
            .send()
            .await?
            .error_for_status()?
            .json()?;

        if let Some(error) = response.error {
            return Err(ChainStorageError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        // The attribute map is declared with a default value, absent entries
        // come back as `null`.
        let Some(encoded) = response.result else {
            return Ok(Some(AttributeRecord::storage_fallback()));
        };

        let bytes = hex::decode(encoded.trim_start_matches("0x"))
            .map_err(|e| ChainStorageError::InvalidResponse(e.to_string()))?;
        let attribute = OnChainAttributeDTO::decode_all(&mut bytes.as_slice())
            .map_err(|e| ChainStorageError::InvalidResponse(e.to_string()))?;

        Ok(Some(attribute.into()))
    }
}

/// Maps a node address onto the HTTP endpoint serving the same RPC surface.
pub fn rpc_http_url(base_url: &str) -> Result<Url, ChainStorageError> {
    let mut url =
        Url::parse(base_url).map_err(|e| ChainStorageError::InvalidEndpoint(e.to_string()))?;

    let scheme = match url.scheme() {
        "ws" | "http" => "http",
        "wss" | "https" => "https",
        other => {
            return Err(ChainStorageError::InvalidEndpoint(format!(
                "unsupported scheme `{other}`"
            )))
        }
    };

    url.set_scheme(scheme)
        .map_err(|_| ChainStorageError::InvalidEndpoint(base_url.to_owned()))?;

    Ok(url)
}

/// Full key of a `Blake2_128Concat` map entry, hex encoded with `0x`.
pub fn map_storage_key(pallet_name: &str, item_name: &str, key: &StorageKey) -> String {
    let mut storage_key = Vec::with_capacity(32 + 16 + StorageKey::LENGTH);
    storage_key.extend_from_slice(&twox_128(pallet_name.as_bytes()));
    storage_key.extend_from_slice(&twox_128(item_name.as_bytes()));
    storage_key.extend_from_slice(&blake2_128(key.as_bytes()));
    storage_key.extend_from_slice(key.as_bytes());

    format!("0x{}", hex::encode(storage_key))
}
