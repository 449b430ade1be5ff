use codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::chain_storage::AttributeRecord;

#[derive(Debug, Serialize)]
pub(super) struct JsonRpcRequestDTO<'a> {
    pub jsonrpc: &'a str,
    pub id: u32,
    pub method: &'a str,
    pub params: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JsonRpcResponseDTO {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorDTO>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JsonRpcErrorDTO {
    pub code: i64,
    pub message: String,
}

/// SCALE layout of the pallet's `Attribute<BlockNumber, Moment>`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub(super) struct OnChainAttributeDTO {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
    pub validity: u32,
    pub created: u64,
}

impl From<OnChainAttributeDTO> for AttributeRecord {
    fn from(value: OnChainAttributeDTO) -> Self {
        Self {
            name: value.name,
            value: value.value,
            validity: value.validity,
            created: value.created,
            is_storage_fallback: false,
        }
    }
}
