//! Providers for resolving DIDs anchored on the peaq ledger.
//!
//! A peaq DID is stored as an attribute record in chain storage, keyed by a
//! BLAKE2b digest of the owner's account bytes followed by the DID name. The
//! record value holds a protocol-buffer encoded DID document.
//!
//! - [`did`] validates input, derives the storage key, interprets the record
//!   and decodes the document.
//! - [`chain_storage`] reads attribute records from a node.
//! - [`http_client`] abstracts the HTTP transport used by the node client.

pub mod chain_storage;
pub mod common_models;
pub mod did;
pub mod http_client;
