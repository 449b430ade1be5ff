//! Storage key derivation for DID attributes.
//!
//! The DID pallet stores an attribute under `blake2_256(account ++ name)`.
//! Components are concatenated in the given order without separators.

use std::sync::Arc;

use peaq_crypto::imp::hasher::blake2::{BLAKE2B_256, BLAKE2B_512};
use peaq_crypto::CryptoProvider;

use super::address::{AccountAddress, AddressFamily};
use super::error::KeyDerivationError;
use super::ss58;
use crate::common_models::storage_key::StorageKey;

#[derive(Clone, Copy, Debug)]
pub enum StorageKeyComponent<'a> {
    Address(&'a AccountAddress),
    RawBytes(&'a [u8]),
}

pub struct StorageKeyDeriver {
    crypto: Arc<dyn CryptoProvider>,
    ss58_prefix: u16,
}

impl StorageKeyDeriver {
    pub fn new(crypto: Arc<dyn CryptoProvider>, ss58_prefix: u16) -> Self {
        Self {
            crypto,
            ss58_prefix,
        }
    }

    pub fn derive(
        &self,
        components: &[StorageKeyComponent<'_>],
    ) -> Result<StorageKey, KeyDerivationError> {
        let mut input = Vec::new();
        for component in components {
            match component {
                StorageKeyComponent::Address(address) => {
                    input.extend(self.account_bytes(address)?)
                }
                StorageKeyComponent::RawBytes(bytes) => input.extend_from_slice(bytes),
            }
        }

        let digest = self.crypto.get_hasher(BLAKE2B_256)?.hash(&input);

        StorageKey::try_from(digest.as_slice())
            .map_err(|_| KeyDerivationError::InvalidDigestLength(digest.len()))
    }

    fn account_bytes(&self, address: &AccountAddress) -> Result<Vec<u8>, KeyDerivationError> {
        match address.family() {
            AddressFamily::LedgerNative => {
                let hasher = self.crypto.get_hasher(BLAKE2B_512)?;
                ss58::decode(address.as_str(), self.ss58_prefix, hasher.as_ref())
            }
            // hex addresses are taken as already decoded account bytes
            AddressFamily::EvmStyle => hex::decode(address.as_str().trim_start_matches("0x"))
                .map_err(|e| KeyDerivationError::InvalidHex(e.to_string())),
        }
    }
}
