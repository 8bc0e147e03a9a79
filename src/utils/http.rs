// src/utils/http.rs

//! HTTP client utilities.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::Result;
use crate::models::ProberConfig;

/// Status code and (for 200 responses) body of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport used by the prober: one GET, no retries.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Perform a GET request.
    ///
    /// Transport failures (timeout, DNS, refused connection) are returned as
    /// errors; any HTTP status is a successful fetch.
    async fn get(&self, url: &str) -> Result<FetchResponse>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ProberConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout())
        .build()?;
    Ok(client)
}

/// reqwest-backed fetcher.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with a client configured from prober settings.
    pub fn from_config(config: &ProberConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Only a 200 body is ever inspected
        let body = if status == StatusCode::OK {
            response.text().await?
        } else {
            String::new()
        };

        Ok(FetchResponse {
            status: status.as_u16(),
            body,
        })
    }
}
