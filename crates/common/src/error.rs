//! Failures that end an invocation of either function.

use thiserror::Error;

/// Every way an invocation can fail. None of these are recovered in-process; they are logged where
/// they happen and handed back to the Lambda runtime, which owns retries and redrive.
#[derive(Debug, Error)]
pub enum Top10Error {
    #[error("Environment variable '{name}' is not set or is empty.")]
    Configuration { name: String },

    #[error("Environment variable '{name}' holds an invalid URL: \"{value}\".")]
    InvalidUrl {
        name: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to fetch the list of top movies.")]
    Fetch(#[source] anyhow::Error),

    #[error("Queue message is malformed: {0}")]
    InvalidMessage(String),

    #[error("Failed to enrich movie {movie_id}.")]
    Enrichment {
        movie_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to publish the top movies to queue {queue}.")]
    Publish {
        queue: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to store the enriched movies at s3://{bucket}/{key}.")]
    Store {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
