//! HTTP client for the remote breed list.
//!
//! Fetches the catalogue from a TheCatAPI-compatible endpoint, which answers
//! `GET /v1/breeds` with a JSON array of objects carrying at least a `name`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use spycat_core::breeds::{BreedSource, BreedSourceError};

/// One entry of the remote breed list. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct BreedEntry {
    name: String,
}

/// [`BreedSource`] backed by an HTTP endpoint.
pub struct CatApiBreedSource {
    client: reqwest::Client,
    url: String,
}

impl CatApiBreedSource {
    /// Create a source for `url` whose requests fail after `timeout`.
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl BreedSource for CatApiBreedSource {
    async fn fetch_breeds(&self) -> Result<Vec<String>, BreedSourceError> {
        tracing::debug!(url = %self.url, "Fetching breed list");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BreedSourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(BreedSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let entries: Vec<BreedEntry> = response
            .json()
            .await
            .map_err(|e| BreedSourceError::Decode(e.to_string()))?;

        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}
