use std::{fmt, str::FromStr};

/// 256-bit digest identifying a DID attribute in chain storage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct StorageKey([u8; KEY_LENGTH]);

const KEY_LENGTH: usize = 32;

impl StorageKey {
    pub const LENGTH: usize = KEY_LENGTH;

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// `0x` followed by the lowercase hex digest.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for StorageKey {
    type Error = std::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; KEY_LENGTH]>::try_from(value).map(Self)
    }
}

impl FromStr for StorageKey {
    type Err = hex::FromHexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; KEY_LENGTH];
        hex::decode_to_slice(value.strip_prefix("0x").unwrap_or(value), &mut bytes)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "0x506fc0828dfafc9af7d8e5b8d7c767c336f809244156c2d27d6f17222a60d217";

    #[test]
    fn test_hex_round_trip() {
        let key = StorageKey::from_str(KEY_HEX).unwrap();

        assert_eq!(key.to_hex(), KEY_HEX);
        assert_eq!(key.to_string(), KEY_HEX);
        assert_eq!(key.as_bytes()[0], 0x50);
    }

    #[test]
    fn test_parse_without_prefix() {
        let key = StorageKey::from_str(KEY_HEX.trim_start_matches("0x")).unwrap();

        assert_eq!(key.to_hex(), KEY_HEX);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(StorageKey::from_str("0x506f").is_err());
    }

    #[test]
    fn test_try_from_slice() {
        assert!(StorageKey::try_from([7u8; 32].as_slice()).is_ok());
        assert!(StorageKey::try_from([7u8; 31].as_slice()).is_err());
    }
}
