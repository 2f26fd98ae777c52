//! Retrieval of the top movies list from its public JSON document.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use top10movies_common::models::{Movie, MovieList};
use tracing::{debug, info, warn};
use url::Url;

/// How many movies are taken from the head of the list.
pub const TOP_MOVIE_COUNT: usize = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce the current top movies, best first.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Return at most [TOP_MOVIE_COUNT] movies in rank order. Fewer are returned when the source
    /// has fewer.
    async fn fetch_top_movies(&self) -> Result<Vec<Movie>>;
}

/// Reads the top movies from a JSON document of the form `{"items": [Movie, ...]}`.
pub struct HttpMovieSource {
    client: Client,
    url: Url,
}

impl HttpMovieSource {
    pub fn new(url: Url) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        HttpMovieSource { client, url }
    }
}

#[async_trait]
impl MovieSource for HttpMovieSource {
    async fn fetch_top_movies(&self) -> Result<Vec<Movie>> {
        debug!(url = %self.url, "Requesting the top movies list.");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed.", self.url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status.", self.url))?;
        let list: MovieList = response
            .json()
            .await
            .context("Top movies list is not a JSON document with an items array.")?;

        let movies = list
            .top(TOP_MOVIE_COUNT)
            .context("One of the top movies is not an object with a string id.")?;
        info!(count = movies.len(), "Successfully fetched list of movies.");
        Ok(movies)
    }
}
