//! Wallet address classification.

use strum::Display;

use super::error::AddressError;

const SS58_ADDRESS_LENGTH: usize = 48;
const EVM_ADDRESS_HEX_LENGTH: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum AddressFamily {
    /// SS58 encoded ledger account.
    LedgerNative,
    /// `0x`-prefixed 20 byte account.
    EvmStyle,
}

/// Address string that passed format validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountAddress {
    family: AddressFamily,
    value: String,
}

impl AccountAddress {
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

pub fn classify(raw: &str) -> Result<AccountAddress, AddressError> {
    if raw.is_empty() {
        return Err(AddressError::Missing);
    }

    let family = if is_ss58_shaped(raw) {
        AddressFamily::LedgerNative
    } else if is_evm_shaped(raw) {
        AddressFamily::EvmStyle
    } else {
        return Err(AddressError::InvalidFormat(raw.to_owned()));
    };

    Ok(AccountAddress {
        family,
        value: raw.to_owned(),
    })
}

fn is_ss58_shaped(raw: &str) -> bool {
    raw.len() == SS58_ADDRESS_LENGTH
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l'))
}

fn is_evm_shaped(raw: &str) -> bool {
    raw.strip_prefix("0x").is_some_and(|body| {
        body.len() == EVM_ADDRESS_HEX_LENGTH && body.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ss58_address() {
        let address = classify("5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg").unwrap();

        assert_eq!(address.family(), AddressFamily::LedgerNative);
        assert_eq!(
            address.as_str(),
            "5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg"
        );
    }

    #[test]
    fn test_classify_evm_address_any_case() {
        for raw in [
            "0x9621dde636de098b43efb0fa9b61facfe328f99d",
            "0x9621DDE636DE098B43EFB0FA9B61FACFE328F99D",
        ] {
            assert_eq!(classify(raw).unwrap().family(), AddressFamily::EvmStyle);
        }
    }

    #[test]
    fn test_classify_empty_address() {
        assert_eq!(classify(""), Err(AddressError::Missing));
    }

    #[test]
    fn test_classify_invalid_addresses() {
        for raw in [
            // 47 characters
            "5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12P",
            // 49 characters
            "5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pgg",
            // `0` is not part of the base-58 alphabet
            "0Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg",
            "lDf42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg",
            "0x9621dde636de098b43efb0fa9b61facfe328f99",
            "0x9621dde636de098b43efb0fa9b61facfe328f99dd",
            "0x9621dde636de098b43efb0fa9b61facfe328f99g",
            "9621dde636de098b43efb0fa9b61facfe328f99d",
            " 5Df42mkztLtkksgQuLy4YV6hmhzdjYvDknoxHv1QBkaY12Pg",
        ] {
            assert_eq!(
                classify(raw),
                Err(AddressError::InvalidFormat(raw.to_owned())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_invalid_format_message_names_both_formats() {
        let message = classify("abc").unwrap_err().to_string();

        assert!(message.contains("SS58"));
        assert!(message.contains("EVM"));
    }
}
