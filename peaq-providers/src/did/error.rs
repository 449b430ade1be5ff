//! Enumerates errors related to DID method provider.

use thiserror::Error;

use crate::chain_storage::ChainStorageError;
use crate::did::imp::peaq::error::{AddressError, DecodeError, KeyDerivationError};
use crate::did::model::ResolutionStage;

#[derive(Debug, Error)]
pub enum DidMethodError {
    #[error("{0}")]
    MissingParameter(String),
    #[error("Invalid address: `{0}`")]
    InvalidAddressFormat(#[from] AddressError),
    #[error("Key derivation failed: `{0}`")]
    KeyDerivation(#[from] KeyDerivationError),
    #[error("Could not read chain storage: `{0}`")]
    Transport(#[from] ChainStorageError),
    #[error("Could not decode document: `{0}`")]
    Decode(#[from] DecodeError),
}

impl DidMethodError {
    /// Stage at which the resolution stopped.
    pub fn stage(&self) -> ResolutionStage {
        match self {
            Self::MissingParameter(_) | Self::InvalidAddressFormat(_) => {
                ResolutionStage::Validating
            }
            Self::KeyDerivation(_) => ResolutionStage::KeyDeriving,
            Self::Transport(_) => ResolutionStage::Fetching,
            Self::Decode(_) => ResolutionStage::Decoding,
        }
    }
}
