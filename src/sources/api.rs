//! Transport layer: the two raw PokeAPI endpoints behind a trait, plus the reqwest implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::CatalogError;
use super::schema::{IndexPage, RawPokemon};
use crate::util::percent_encode;

/// Raw access to the catalog endpoints.
///
/// Implementations do no caching and no retries; every call is a fresh request.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// What: Fetch one page of index entries.
    ///
    /// Inputs:
    /// - `limit`: Number of entries requested
    /// - `offset`: Index of the first entry
    ///
    /// # Errors
    /// - Transport failure or any non-2xx status (including 404, the listing always exists).
    async fn index(&self, limit: usize, offset: usize) -> Result<IndexPage, CatalogError>;

    /// What: Fetch one raw record by id or name.
    ///
    /// Output:
    /// - `Ok(None)` when the catalog answers 404.
    ///
    /// # Errors
    /// - Transport failure, non-2xx/non-404 status, or an unparseable body.
    async fn record(&self, key: &str) -> Result<Option<RawPokemon>, CatalogError>;
}

/// reqwest-backed [`CatalogApi`] talking to a PokeAPI-compatible base URL.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// What: Build the shared HTTP client for a base URL.
    ///
    /// Inputs:
    /// - `base_url`: e.g. `https://pokeapi.co/api/v2` (a trailing slash is tolerated)
    /// - `connect_timeout`: TCP/TLS connect deadline
    /// - `timeout`: Whole-request deadline
    ///
    /// # Errors
    /// - `CatalogError::Transport` when the TLS backend cannot be initialized.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(format!("dexterm/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: GET a URL and decode its JSON body.
    ///
    /// Output:
    /// - `Ok(Some(T))` on 2xx, `Ok(None)` on 404.
    ///
    /// Details:
    /// - Any other status becomes `CatalogError::Status`; body decode failures become `Malformed`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, CatalogError> {
        let started = Instant::now();
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "catalog request failed");
            CatalogError::from(e)
        })?;
        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "catalog response"
        );
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.json::<T>().await.map_err(|e| {
            warn!(url = %url, error = %e, "catalog body could not be decoded");
            CatalogError::from(e)
        })?;
        Ok(Some(body))
    }
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn index(&self, limit: usize, offset: usize) -> Result<IndexPage, CatalogError> {
        let url = format!("{}/pokemon/?limit={limit}&offset={offset}", self.base_url);
        self.get_json(&url)
            .await?
            .ok_or(CatalogError::Status { status: 404, url })
    }

    async fn record(&self, key: &str) -> Result<Option<RawPokemon>, CatalogError> {
        let url = format!("{}/pokemon/{}", self.base_url, percent_encode(key));
        self.get_json(&url).await
    }
}
