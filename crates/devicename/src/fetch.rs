//! Remote mapping-document retrieval.

use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Identifier→commercial-name lookup data decoded from one remote document.
///
/// Populated transiently per fetch and discarded after a resolution
/// completes; the remote document stays the source of truth.
pub type MappingTable = HashMap<String, String>;

/// Stateless downloader for the per-family mapping documents.
#[derive(Debug, Clone)]
pub struct MappingFetcher {
    client: reqwest::Client,
}

impl Default for MappingFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingFetcher {
    /// Create a fetcher with a dedicated HTTP client.
    ///
    /// # Panics
    ///
    /// Only if the TLS backend cannot be initialized; with default client
    /// settings this indicates a broken host environment.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("devicename/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("HTTP client construction failed - TLS backend unavailable"),
        }
    }

    /// Download and decode the flat identifier→name document at `url`.
    ///
    /// One GET, no retries, no conditional-request headers. Transport and
    /// HTTP-status failures surface as [`Error::Transport`]; a body that is
    /// not a flat string→string object surfaces as [`Error::Decode`].
    pub async fn fetch(&self, url: &str) -> Result<MappingTable> {
        debug!(%url, "fetching mapping document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| Error::Transport {
                url: url.to_owned(),
                source,
            })?;

        let body = response.text().await.map_err(|source| Error::Transport {
            url: url.to_owned(),
            source,
        })?;

        let table: MappingTable =
            serde_json::from_str(&body).map_err(|source| Error::Decode {
                url: url.to_owned(),
                source,
            })?;

        debug!(entries = table.len(), "mapping document decoded");
        Ok(table)
    }
}
