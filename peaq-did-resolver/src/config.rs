use serde::Deserialize;

use peaq_providers::did::imp::peaq::{
    DEFAULT_PALLET_NAME, DEFAULT_SS58_PREFIX, DEFAULT_STORAGE_ITEM,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    pub did_method_config: DidMethodConfig,
}

/// Location of DID attributes in chain storage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DidMethodConfig {
    pub pallet_name: String,
    pub storage_item: String,
    /// Network prefix SS58 addresses must carry.
    pub ss58_prefix: u16,
}

impl Default for DidMethodConfig {
    fn default() -> Self {
        Self {
            pallet_name: DEFAULT_PALLET_NAME.to_string(),
            storage_item: DEFAULT_STORAGE_ITEM.to_string(),
            ss58_prefix: DEFAULT_SS58_PREFIX,
        }
    }
}
