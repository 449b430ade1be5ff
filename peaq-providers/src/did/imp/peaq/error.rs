use peaq_crypto::CryptoProviderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address is required when resolving a DID.")]
    Missing,
    #[error(
        "Invalid address `{0}`: expected an SS58 address (48 base-58 characters, without 0, O, I, l) \
         or an EVM address (`0x` followed by 40 hex characters)"
    )]
    InvalidFormat(String),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyDerivationError {
    #[error("Invalid base-58 encoding: `{0}`")]
    InvalidBase58(String),
    #[error("Invalid hex encoding: `{0}`")]
    InvalidHex(String),
    #[error("Invalid SS58 address length: {0}")]
    InvalidLength(usize),
    #[error("Invalid SS58 address prefix byte: {0}")]
    InvalidPrefixByte(u8),
    #[error("Invalid SS58 checksum")]
    InvalidChecksum,
    #[error("Address network prefix {found} does not match expected {expected}")]
    PrefixMismatch { expected: u16, found: u16 },
    #[error("Unexpected digest length: {0}")]
    InvalidDigestLength(usize),
    #[error("Crypto provider error: `{0}`")]
    CryptoProvider(#[from] CryptoProviderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("invalid field key")]
    InvalidKey,
    #[error("truncated varint")]
    TruncatedVarint,
    #[error("length exceeds remaining input")]
    LengthOutOfBounds,
    #[error("field {tag} has wire type {found}, expected {expected}")]
    WireTypeMismatch { tag: u32, expected: u8, found: u8 },
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,
    #[error("group wire type is not supported")]
    GroupWireType,
}

/// Document decoding failure at a byte offset of the encoded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct DecodeError {
    pub offset: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(offset: usize, kind: DecodeErrorKind) -> Self {
        Self { offset, kind }
    }
}
