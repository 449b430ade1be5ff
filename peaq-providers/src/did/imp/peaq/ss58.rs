//! SS58 address decoding.

use peaq_crypto::Hasher;

use super::error::KeyDerivationError;

const CHECKSUM_PREFIX: &[u8] = b"SS58PRE";
const ALLOWED_DECODED_LENGTHS: [usize; 8] = [3, 4, 6, 10, 35, 36, 37, 38];
const RESERVED_PREFIX_BYTES: [u8; 2] = [46, 47];

/// Decodes an SS58 address to its account bytes.
///
/// `checksum_hasher` must be BLAKE2b-512. The address has to carry
/// `expected_prefix` as its network prefix.
pub(super) fn decode(
    address: &str,
    expected_prefix: u16,
    checksum_hasher: &dyn Hasher,
) -> Result<Vec<u8>, KeyDerivationError> {
    let data = bs58::decode(address)
        .into_vec()
        .map_err(|e| KeyDerivationError::InvalidBase58(e.to_string()))?;

    if !ALLOWED_DECODED_LENGTHS.contains(&data.len()) {
        return Err(KeyDerivationError::InvalidLength(data.len()));
    }

    let first = data[0];
    if first & 0b1000_0000 != 0 || RESERVED_PREFIX_BYTES.contains(&first) {
        return Err(KeyDerivationError::InvalidPrefixByte(first));
    }

    let (prefix_length, prefix) = if first & 0b0100_0000 == 0 {
        (1, u16::from(first))
    } else {
        let second = data[1];
        let prefix = (u16::from(first & 0b0011_1111) << 2)
            | u16::from(second >> 6)
            | (u16::from(second & 0b0011_1111) << 8);
        (2, prefix)
    };

    // 32 byte public keys carry a two byte checksum, shorter account indices one.
    let is_public_key = [34 + prefix_length, 35 + prefix_length].contains(&data.len());
    let checksum_length = if is_public_key { 2 } else { 1 };
    let payload_end = data.len() - checksum_length;

    let checksum = checksum_hasher.hash(&[CHECKSUM_PREFIX, &data[..payload_end]].concat());
    if checksum.get(..checksum_length) != Some(&data[payload_end..]) {
        return Err(KeyDerivationError::InvalidChecksum);
    }

    if prefix != expected_prefix {
        return Err(KeyDerivationError::PrefixMismatch {
            expected: expected_prefix,
            found: prefix,
        });
    }

    Ok(data[prefix_length..payload_end].to_vec())
}
