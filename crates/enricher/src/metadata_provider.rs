//! Clients for the third-party API that supplies extra fields for each movie.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use top10movies_common::models::MovieMetadata;
use tracing::{info, warn};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Looks up supplementary metadata for a movie by its IMDb identifier.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn get_movie_metadata(&self, movie_id: &str) -> Result<MovieMetadata>;
}

/// [MetadataProvider] backed by the OMDb API.
pub struct OmdbProvider {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbProvider {
    pub fn new(base_url: Url, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        OmdbProvider {
            client,
            base_url,
            api_key: String::from(api_key),
        }
    }
}

#[async_trait]
impl MetadataProvider for OmdbProvider {
    async fn get_movie_metadata(&self, movie_id: &str) -> Result<MovieMetadata> {
        info!("Fetching IMDb data for movie ID: {}", movie_id);
        // The request URL carries the API key, so it is stripped from any error.
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str()), ("i", movie_id)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Request to OMDb failed.")?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .context("OMDb returned an error status.")?;

        response
            .json::<MovieMetadata>()
            .await
            .context("OMDb response is not a JSON object.")
    }
}
