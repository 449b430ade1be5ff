use std::{collections::HashMap, sync::Arc};

use super::{
    hasher::blake2::{Blake2b256, Blake2b512, BLAKE2B_256, BLAKE2B_512},
    CryptoProviderImpl,
};
use crate::{CryptoProvider, CryptoProviderError, Hasher};

fn provider() -> CryptoProviderImpl {
    CryptoProviderImpl::new(HashMap::from_iter(vec![
        (BLAKE2B_256.to_string(), Arc::new(Blake2b256 {}) as _),
        (BLAKE2B_512.to_string(), Arc::new(Blake2b512 {}) as _),
    ]))
}

#[test]
fn test_blake2b_256_empty_input() {
    let result = Blake2b256 {}.hash(b"");

    assert_eq!(
        hex::encode(result),
        "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
    );
}

#[test]
fn test_blake2b_256_digest_length() {
    let result = Blake2b256 {}.hash(b"myDID_123");

    assert_eq!(result.len(), 32);
}

#[test]
fn test_blake2b_512_abc() {
    let result = Blake2b512 {}.hash(b"abc");

    assert_eq!(
        hex::encode(result),
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
         7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
    );
}

#[test]
fn test_provider_returns_registered_hasher() {
    let hasher = provider().get_hasher(BLAKE2B_256).unwrap();

    assert_eq!(
        hasher.hash(b"myDID_123"),
        Blake2b256 {}.hash(b"myDID_123")
    );
}

#[test]
fn test_provider_missing_hasher() {
    let result = provider().get_hasher("sha-256");

    assert!(matches!(
        result,
        Err(CryptoProviderError::MissingHasher(name)) if name == "sha-256"
    ));
}
