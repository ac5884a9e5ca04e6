//! The one outbound HTTP call, behind a trait so the translation logic can
//! run against stubs.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::fmt::Debug;

use crate::error::BoxError;

/// Status line and body of an upstream reply.
///
/// The body is kept as a `Result` so callers decide whether a failed read
/// matters for the given status.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Result<String, BoxError>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: Ok(body.into()) }
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    /// Perform a single GET. `Err` means the request never produced a response.
    async fn get(&self, url: Url) -> Result<RawResponse, BoxError>;
}

/// [`Fetcher`] backed by a shared `reqwest::Client` with default settings.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    http: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn get(&self, url: Url) -> Result<RawResponse, BoxError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await.map_err(BoxError::from);

        Ok(RawResponse { status, body })
    }
}
