use blake2::{digest::consts::U32, Blake2b, Blake2b512 as Blake2b512Digest, Digest};

use crate::Hasher;

/// Name under which [`Blake2b256`] is registered in the crypto provider.
pub const BLAKE2B_256: &str = "blake2b-256";
/// Name under which [`Blake2b512`] is registered in the crypto provider.
pub const BLAKE2B_512: &str = "blake2b-512";

type Blake2b256Digest = Blake2b<U32>;

/// Unkeyed BLAKE2b with a 32-byte digest, `blake2_256` on Substrate chains.
pub struct Blake2b256 {}

impl Hasher for Blake2b256 {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        let mut hasher = Blake2b256Digest::new();
        hasher.update(input);
        hasher.finalize().to_vec()
    }
}

/// Unkeyed BLAKE2b with a 64-byte digest, used for SS58 checksums.
pub struct Blake2b512 {}

impl Hasher for Blake2b512 {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        let mut hasher = Blake2b512Digest::new();
        hasher.update(input);
        hasher.finalize().to_vec()
    }
}
