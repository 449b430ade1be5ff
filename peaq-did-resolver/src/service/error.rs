use peaq_providers::did::error::DidMethodError;
use peaq_providers::did::imp::peaq::error::AddressError;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResolutionErrorKind {
    #[strum(serialize = "MISSING_PARAMETER")]
    MissingParameter,
    #[strum(serialize = "INVALID_ADDRESS_FORMAT")]
    InvalidAddressFormat,
    #[strum(serialize = "KEY_DERIVATION")]
    KeyDerivation,
    #[strum(serialize = "TRANSPORT")]
    Transport,
    #[strum(serialize = "DECODE")]
    Decode,
}

/// Failure of a resolve operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ResolutionError {
    pub kind: ResolutionErrorKind,
    pub message: String,
}

impl From<DidMethodError> for ResolutionError {
    fn from(error: DidMethodError) -> Self {
        let kind = match &error {
            DidMethodError::MissingParameter(_)
            | DidMethodError::InvalidAddressFormat(AddressError::Missing) => {
                ResolutionErrorKind::MissingParameter
            }
            DidMethodError::InvalidAddressFormat(_) => ResolutionErrorKind::InvalidAddressFormat,
            DidMethodError::KeyDerivation(_) => ResolutionErrorKind::KeyDerivation,
            DidMethodError::Transport(_) => ResolutionErrorKind::Transport,
            DidMethodError::Decode(_) => ResolutionErrorKind::Decode,
        };

        Self {
            kind,
            message: error.to_string(),
        }
    }
}
