//! A service for resolving peaq DIDs to their documents.
//!
//! Every operation performs one full resolution. `Ok(None)` means no DID is
//! stored for the given address and name.

use std::sync::Arc;

use peaq_providers::did::model::{
    DidRecord, Document, ResolveOptions, Service, Signature, VerificationMethod,
};
use peaq_providers::did::DidMethod;
use tracing::warn;

use super::error::ResolutionError;

pub struct DidService {
    pub did_method: Arc<dyn DidMethod>,
}

impl DidService {
    pub fn new(did_method: Arc<dyn DidMethod>) -> Self {
        Self { did_method }
    }

    /// Resolves the attribute metadata together with the decoded document.
    pub async fn resolve(
        &self,
        options: &ResolveOptions,
    ) -> Result<Option<DidRecord>, ResolutionError> {
        self.did_method.resolve(options).await.map_err(|error| {
            warn!(
                stage = %error.stage(),
                name = %options.name,
                address = %options.address,
                "DID resolution failed: {error}"
            );
            error.into()
        })
    }

    pub async fn resolve_document(
        &self,
        options: &ResolveOptions,
    ) -> Result<Option<Document>, ResolutionError> {
        Ok(self.resolve(options).await?.map(|record| record.document))
    }

    pub async fn resolve_services(
        &self,
        options: &ResolveOptions,
    ) -> Result<Option<Vec<Service>>, ResolutionError> {
        Ok(self
            .resolve_document(options)
            .await?
            .map(|document| document.services))
    }

    pub async fn resolve_verifications(
        &self,
        options: &ResolveOptions,
    ) -> Result<Option<Vec<VerificationMethod>>, ResolutionError> {
        Ok(self
            .resolve_document(options)
            .await?
            .map(|document| document.verification_methods))
    }

    pub async fn resolve_authentications(
        &self,
        options: &ResolveOptions,
    ) -> Result<Option<Vec<String>>, ResolutionError> {
        Ok(self
            .resolve_document(options)
            .await?
            .map(|document| document.authentications))
    }

    /// `None` also when the document carries no signature.
    pub async fn resolve_signature(
        &self,
        options: &ResolveOptions,
    ) -> Result<Option<Signature>, ResolutionError> {
        Ok(self
            .resolve_document(options)
            .await?
            .and_then(|document| document.signature))
    }
}
