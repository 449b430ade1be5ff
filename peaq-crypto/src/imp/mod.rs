use std::{collections::HashMap, sync::Arc};

use super::{CryptoProvider, CryptoProviderError, Hasher};

pub mod hasher;

#[cfg(test)]
mod test;

#[derive(Clone)]
pub struct CryptoProviderImpl {
    hashers: HashMap<String, Arc<dyn Hasher>>,
}

impl CryptoProviderImpl {
    pub fn new(hashers: HashMap<String, Arc<dyn Hasher>>) -> Self {
        Self { hashers }
    }
}

impl CryptoProvider for CryptoProviderImpl {
    fn get_hasher(&self, hasher: &str) -> Result<Arc<dyn Hasher>, CryptoProviderError> {
        Ok(self
            .hashers
            .get(hasher)
            .ok_or(CryptoProviderError::MissingHasher(hasher.to_owned()))?
            .clone())
    }
}
