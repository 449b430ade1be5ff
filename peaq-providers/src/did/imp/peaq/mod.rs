//! Implementation of the peaq DID method.
//!
//! A DID document is stored by the `PeaqDid` pallet as an attribute value
//! under `blake2_256(account ++ name)`. Resolution validates the input,
//! derives that key, reads the attribute and decodes its value.

use std::sync::Arc;

use async_trait::async_trait;
use peaq_crypto::CryptoProvider;
use tracing::debug;

use crate::chain_storage::ChainStorage;
use crate::did::error::DidMethodError;
use crate::did::model::{DidRecord, ResolutionStage, ResolveOptions};
use crate::did::DidMethod;

use self::address::classify;
use self::storage_key::{StorageKeyComponent, StorageKeyDeriver};

pub mod address;
pub mod attribute;
pub mod codec;
pub mod error;
pub mod storage_key;

mod ss58;


pub const DEFAULT_PALLET_NAME: &str = "PeaqDid";
pub const DEFAULT_STORAGE_ITEM: &str = "AttributeStore";
/// Generic Substrate network prefix used by peaq addresses.
pub const DEFAULT_SS58_PREFIX: u16 = 42;

#[derive(Debug, Clone)]
pub struct Params {
    pub pallet_name: String,
    pub storage_item: String,
    pub ss58_prefix: u16,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pallet_name: DEFAULT_PALLET_NAME.to_owned(),
            storage_item: DEFAULT_STORAGE_ITEM.to_owned(),
            ss58_prefix: DEFAULT_SS58_PREFIX,
        }
    }
}

pub struct PeaqDidMethod {
    chain_storage: Arc<dyn ChainStorage>,
    key_deriver: StorageKeyDeriver,
    params: Params,
}

impl PeaqDidMethod {
    pub fn new(
        chain_storage: Arc<dyn ChainStorage>,
        crypto: Arc<dyn CryptoProvider>,
        params: Params,
    ) -> Self {
        Self {
            chain_storage,
            key_deriver: StorageKeyDeriver::new(crypto, params.ss58_prefix),
            params,
        }
    }
}

#[async_trait]
impl DidMethod for PeaqDidMethod {
    async fn resolve(&self, options: &ResolveOptions) -> Result<Option<DidRecord>, DidMethodError> {
        debug!(
            stage = %ResolutionStage::Validating,
            name = %options.name,
            address = %options.address,
            "Resolving DID"
        );
        validate_present(options)?;
        let address = classify(&options.address)?;

        debug!(
            stage = %ResolutionStage::KeyDeriving,
            family = %address.family(),
            "Deriving storage key"
        );
        let key = self.key_deriver.derive(&[
            StorageKeyComponent::Address(&address),
            StorageKeyComponent::RawBytes(options.name.as_bytes()),
        ])?;

        debug!(stage = %ResolutionStage::Fetching, %key, "Reading attribute");
        let record = self
            .chain_storage
            .read_storage(
                &options.base_url,
                &self.params.pallet_name,
                &self.params.storage_item,
                &key,
            )
            .await?;

        debug!(
            stage = %ResolutionStage::Interpreting,
            found = record.is_some(),
            "Interpreting attribute"
        );
        let Some(attribute) = attribute::interpret(record) else {
            debug!(stage = %ResolutionStage::NotFound, %key, "No DID attribute stored");
            return Ok(None);
        };

        debug!(
            stage = %ResolutionStage::Decoding,
            length = attribute.value.len(),
            "Decoding document"
        );
        let document = codec::decode_document(&attribute.value)?;

        debug!(stage = %ResolutionStage::Done, id = %document.id, "DID resolved");
        Ok(Some(DidRecord::new(attribute, document)))
    }
}

fn validate_present(options: &ResolveOptions) -> Result<(), DidMethodError> {
    let missing = |message: &str| Err(DidMethodError::MissingParameter(message.to_owned()));

    if options.base_url.is_empty() {
        return missing("Node baseUrl is required when resolving a DID.");
    }
    if options.name.is_empty() {
        return missing("Name is required when resolving a DID.");
    }
    if options.address.is_empty() {
        return missing("Address is required when resolving a DID.");
    }
    Ok(())
}
