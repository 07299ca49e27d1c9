//! Breed catalog backed by a remote reference list.
//!
//! The full list of recognised breed names is fetched from a [`BreedSource`]
//! the first time a breed is validated and kept for the remainder of the
//! process. There is no refresh, no expiry and no local fallback list.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::error::CoreError;

/// Message returned when a breed name is not in the catalog.
pub const UNKNOWN_BREED: &str = "Unknown cat breed";

/// Errors raised while fetching the remote breed list.
#[derive(Debug, thiserror::Error)]
pub enum BreedSourceError {
    /// The request could not be sent or timed out.
    #[error("breed source request failed: {0}")]
    Request(String),

    /// The remote source answered with a non-2xx status.
    #[error("breed source error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the expected shape.
    #[error("breed source returned an unreadable payload: {0}")]
    Decode(String),
}

/// A provider of the authoritative breed name list.
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Fetch every recognised breed name. Case is not significant.
    async fn fetch_breeds(&self) -> Result<Vec<String>, BreedSourceError>;
}

/// Process-wide cache of recognised breed names.
///
/// Concurrent first callers serialize on the cache; a failed fetch is not
/// stored, so the next validation queries the source again. Once a fetch
/// succeeds its result is kept for the lifetime of the catalog.
pub struct BreedCatalog {
    source: Arc<dyn BreedSource>,
    names: OnceCell<HashSet<String>>,
}

impl BreedCatalog {
    pub fn new(source: Arc<dyn BreedSource>) -> Self {
        Self {
            source,
            names: OnceCell::new(),
        }
    }

    /// Whether `breed` matches a recognised breed, ignoring case. Surrounding
    /// whitespace is significant.
    pub async fn contains(&self, breed: &str) -> Result<bool, BreedSourceError> {
        let names = self
            .names
            .get_or_try_init(|| async {
                let fetched = self.source.fetch_breeds().await?;
                tracing::info!(count = fetched.len(), "Breed catalog loaded");
                Ok::<_, BreedSourceError>(
                    fetched
                        .into_iter()
                        .map(|name| name.to_lowercase())
                        .collect(),
                )
            })
            .await?;
        Ok(names.contains(&breed.to_lowercase()))
    }

    /// Validate a breed name for a new cat.
    ///
    /// Unknown names are a [`CoreError::Validation`]; an unreachable source is
    /// a [`CoreError::Unavailable`] so callers can tell the two apart.
    pub async fn validate(&self, breed: &str) -> Result<(), CoreError> {
        match self.contains(breed).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(CoreError::Validation(UNKNOWN_BREED.to_string())),
            Err(e) => {
                tracing::warn!(error = %e, "Breed source unavailable");
                Err(CoreError::Unavailable(e.to_string()))
            }
        }
    }

    /// Whether the breed list has been fetched already.
    pub fn is_loaded(&self) -> bool {
        self.names.initialized()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
