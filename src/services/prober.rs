// src/services/prober.rs

//! Existence prober service.
//!
//! Decides whether a profile URL points at an existing account by looking at
//! the HTTP status and, for 200 responses, scanning the body for the
//! platform's "not found" signatures.

use std::sync::Arc;
use std::time::Duration;

use crate::models::{Catalog, ProberConfig, Status};
use crate::utils::http::{FetchResponse, HttpFetcher};

/// Upper bound on HTTP attempts per probe (first try plus one retry).
pub const MAX_ATTEMPTS: usize = 2;

/// What a single HTTP attempt told us.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attempt {
    /// 200 or 404: a definite answer
    Conclusive(Status),
    /// Any other status code
    UnexpectedStatus(u16),
    /// Transport failure (timeout, DNS, refused connection)
    TransportError(String),
}

/// Service for probing profile URLs.
pub struct ExistenceProber {
    fetcher: Arc<dyn HttpFetcher>,
    catalog: Arc<Catalog>,
    retry_delay: Duration,
}

impl ExistenceProber {
    /// Create a new prober over the given transport and catalog.
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        catalog: Arc<Catalog>,
        config: &ProberConfig,
    ) -> Self {
        Self {
            fetcher,
            catalog,
            retry_delay: config.retry_delay(),
        }
    }

    /// Override the pause before the retry.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Probe a URL on behalf of a platform.
    ///
    /// Never fails: anything that is not a clear 200/404 after the retry is
    /// reported as [`Status::NotFound`].
    pub async fn probe(&self, url: &str, platform: &str) -> Status {
        let signatures = self.catalog.signatures(platform);

        for attempt_no in 1..=MAX_ATTEMPTS {
            let attempt = match self.fetcher.get(url).await {
                Ok(response) => classify(&response, signatures),
                Err(e) => Attempt::TransportError(e.to_string()),
            };

            match attempt {
                Attempt::Conclusive(status) => {
                    log::debug!("{platform}: {url} -> {status} (attempt {attempt_no})");
                    return status;
                }
                Attempt::UnexpectedStatus(code) => {
                    log::debug!("{platform}: {url} returned HTTP {code} (attempt {attempt_no})");
                }
                Attempt::TransportError(reason) => {
                    log::debug!("{platform}: {url} failed: {reason} (attempt {attempt_no})");
                }
            }

            if attempt_no < MAX_ATTEMPTS && !self.retry_delay.is_zero() {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        log::warn!("{platform}: inconclusive after {MAX_ATTEMPTS} attempts, treating as Not Found");
        Status::NotFound
    }
}

/// Classify one response against a platform's signatures.
fn classify(response: &FetchResponse, signatures: &[String]) -> Attempt {
    match response.status {
        200 => {
            let missing = signatures
                .iter()
                .any(|signature| response.body.contains(signature.as_str()));
            if missing {
                Attempt::Conclusive(Status::NotFound)
            } else {
                Attempt::Conclusive(Status::Found)
            }
        }
        404 => Attempt::Conclusive(Status::NotFound),
        code => Attempt::UnexpectedStatus(code),
    }
}
