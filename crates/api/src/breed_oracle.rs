//! HTTP client for the external breed catalogue.
//!
//! Issues one `GET` per lookup against an endpoint returning a JSON array
//! of breed records, each carrying at least a `name` string. Every failure
//! mode (transport, timeout, non-2xx, undecodable body) surfaces as a
//! [`BreedLookupError`]; nothing is cached or retried.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use spycat_core::breed::{BreedLookupError, BreedOracle};

/// One entry of the breed catalogue. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct BreedRecord {
    name: String,
}

/// [`BreedOracle`] backed by a remote HTTP endpoint.
pub struct HttpBreedOracle {
    client: reqwest::Client,
    url: String,
}

impl HttpBreedOracle {
    /// Create a client for `url` with a per-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl BreedOracle for HttpBreedOracle {
    async fn breed_names(&self) -> Result<Vec<String>, BreedLookupError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BreedLookupError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreedLookupError::Status(status.as_u16()));
        }

        let records: Vec<BreedRecord> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                BreedLookupError::Unreachable(e.to_string())
            } else {
                BreedLookupError::Malformed(e.to_string())
            }
        })?;

        tracing::debug!(count = records.len(), "Fetched breed catalogue");
        Ok(records.into_iter().map(|r| r.name).collect())
    }
}
