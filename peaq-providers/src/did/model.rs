//! `struct`s and `enum`s for DID method provider.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Node endpoint, `ws(s)://` or `http(s)://`.
    pub base_url: String,
    /// Human-chosen DID name.
    pub name: String,
    /// Owner wallet address, SS58 or `0x`-prefixed EVM form.
    pub address: String,
}

/// Pipeline stages of a single resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ResolutionStage {
    Validating,
    KeyDeriving,
    Fetching,
    Interpreting,
    Decoding,
    Done,
    NotFound,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub controller: String,
    pub verification_methods: Vec<VerificationMethod>,
    pub signature: Option<Signature>,
    pub services: Vec<Service>,
    pub authentications: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,
    pub r#type: VerificationType,
    pub controller: String,
    pub public_key_multibase: String,
}

/// Key type of a verification method. Unrecognised values are kept verbatim.
///
/// A method without a type on the wire is `Other("")`. Equality compares the
/// string form, so `Other` holding a known name equals the named variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationType {
    Ed25519VerificationKey2020,
    Sr25519VerificationKey2020,
    Other(String),
}

impl VerificationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ed25519VerificationKey2020 => "Ed25519VerificationKey2020",
            Self::Sr25519VerificationKey2020 => "Sr25519VerificationKey2020",
            Self::Other(value) => value,
        }
    }
}

impl Default for VerificationType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl PartialEq for VerificationType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for VerificationType {}

impl From<String> for VerificationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ed25519VerificationKey2020" => Self::Ed25519VerificationKey2020,
            "Sr25519VerificationKey2020" => Self::Sr25519VerificationKey2020,
            _ => Self::Other(value),
        }
    }
}

impl From<VerificationType> for String {
    fn from(value: VerificationType) -> Self {
        match value {
            VerificationType::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub r#type: String,
    pub service_endpoint: String,
    pub data: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub r#type: String,
    pub issuer: String,
    pub hash: String,
}

/// An existing on-chain attribute with its raw value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidAttribute {
    pub name: String,
    pub value: Vec<u8>,
    pub validity: u32,
    pub created: u64,
}

/// Attribute metadata together with the decoded document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidRecord {
    pub name: String,
    #[serde(with = "hex::serde")]
    pub value: Vec<u8>,
    pub validity: u32,
    pub created: u64,
    pub document: Document,
}

impl DidRecord {
    pub fn new(attribute: DidAttribute, document: Document) -> Self {
        Self {
            name: attribute.name,
            value: attribute.value,
            validity: attribute.validity,
            created: attribute.created,
            document,
        }
    }
}
