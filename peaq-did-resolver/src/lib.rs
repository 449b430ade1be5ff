//! Resolver for DIDs anchored on the peaq ledger.
//!
//! A peaq DID is identified by its owner's wallet address and a
//! human-chosen name. Its document lives in the `PeaqDid` pallet as the value
//! of an attribute keyed by `blake2_256(account ++ name)`.
//!
//! ## Repository structure
//!
//! * **Crypto**: BLAKE2b hashers behind the `Hasher` trait
//! * **Providers**
//!   * Address validation, storage key derivation and the document codec
//!   * Chain storage access over Substrate JSON-RPC
//!   * HTTP client
//!   * peaq DID method
//! * **Core**: the DID service, returning results of the providers
//!
//! ## Getting started
//!
//! Initialize the resolver once and share it:
//!
//! ```ignore rust
//! /// `None` initializes the resolver with the default configuration
//! let resolver = PeaqDidResolver::default();
//!
//! let document = resolver
//!     .did_service
//!     .resolve_document(&ResolveOptions {
//!         base_url: "wss://wsspc1-qa.agung.peaq.network".to_string(),
//!         name: "myDID_123".to_string(),
//!         address: "5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg".to_string(),
//!     })
//!     .await?;
//! ```

use std::{collections::HashMap, sync::Arc};

use config::ResolverConfig;
use peaq_crypto::imp::{
    hasher::blake2::{Blake2b256, Blake2b512, BLAKE2B_256, BLAKE2B_512},
    CryptoProviderImpl,
};
use peaq_providers::chain_storage::imp::substrate_rpc::SubstrateRpcStorage;
use peaq_providers::chain_storage::ChainStorage;
use peaq_providers::did::imp::peaq::{Params as PeaqDidMethodParams, PeaqDidMethod};
use peaq_providers::http_client::imp::reqwest_client::ReqwestClient;
use peaq_providers::http_client::HttpClient;
use service::did_service::DidService;

pub mod config;
pub mod service;


pub struct PeaqDidResolver {
    pub did_service: DidService,
}

impl Default for PeaqDidResolver {
    fn default() -> Self {
        Self::new(None, Arc::new(ReqwestClient::default()))
    }
}

impl PeaqDidResolver {
    pub fn new(config: Option<ResolverConfig>, client: Arc<dyn HttpClient>) -> Self {
        Self::with_chain_storage(config, Arc::new(SubstrateRpcStorage::new(client)))
    }

    /// Builds the resolver on top of a custom chain storage transport.
    pub fn with_chain_storage(
        config: Option<ResolverConfig>,
        chain_storage: Arc<dyn ChainStorage>,
    ) -> Self {
        let config = config.unwrap_or_default();

        // initialize crypto provider
        let crypto_provider = Arc::new(CryptoProviderImpl::new(HashMap::from_iter(vec![
            (BLAKE2B_256.to_string(), Arc::new(Blake2b256 {}) as _),
            (BLAKE2B_512.to_string(), Arc::new(Blake2b512 {}) as _),
        ])));

        // initialize did method
        let did_method = Arc::new(PeaqDidMethod::new(
            chain_storage,
            crypto_provider,
            PeaqDidMethodParams {
                pallet_name: config.did_method_config.pallet_name,
                storage_item: config.did_method_config.storage_item,
                ss58_prefix: config.did_method_config.ss58_prefix,
            },
        ));

        Self {
            did_service: DidService::new(did_method),
        }
    }
}
