//! Minimal HTTP abstraction used to talk to ledger nodes.

pub mod imp;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn post(&self, url: &str) -> RequestBuilder;

    async fn send(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<Headers>,
    ) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Debug)]
pub struct StatusCode(pub u16);

#[derive(Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub status: StatusCode,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other HTTP client error: {0}")]
    Other(String),
    #[error("HTTP status code is error: {0}")]
    StatusCodeIsError(StatusCode),
}

impl Response {
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_client_error() || self.status.is_server_error() {
            Err(Error::StatusCodeIsError(self.status))
        } else {
            Ok(self)
        }
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::JsonError)
    }
}

impl StatusCode {
    pub fn is_client_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    pub fn is_server_error(&self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    body: Option<Vec<u8>>,
    headers: Headers,
    url: String,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, url: &str) -> Self {
        Self {
            client,
            body: None,
            headers: Headers::default(),
            url: url.to_string(),
        }
    }

    pub fn json<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_owned());
        self.body = Some(serde_json::to_vec(&value).map_err(Error::JsonError)?);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, Error> {
        let headers = if self.headers.is_empty() {
            None
        } else {
            Some(self.headers)
        };

        self.client.send(&self.url, self.body, headers).await
    }
}
