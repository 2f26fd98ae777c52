//! The single slot holding the latest enriched top 10.

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use top10movies_common::models::EnrichedPayload;
use tracing::info;

const CONTENT_TYPE: &str = "application/json";

/// Holds exactly one [EnrichedPayload]. Every call to [EnrichedMovieStore::store] replaces
/// whatever was there; concurrent writers race and the last one wins.
#[async_trait]
pub trait EnrichedMovieStore: Send + Sync {
    fn bucket(&self) -> &str;

    fn key(&self) -> &str;

    async fn store(&self, payload: &EnrichedPayload) -> Result<()>;
}

/// [EnrichedMovieStore] writing a JSON object to a fixed S3 bucket and key.
pub struct S3MovieStore {
    client: Client,
    bucket: String,
    key: String,
}

impl S3MovieStore {
    pub fn new(client: Client, bucket: &str, key: &str) -> Self {
        S3MovieStore {
            client,
            bucket: String::from(bucket),
            key: String::from(key),
        }
    }
}

#[async_trait]
impl EnrichedMovieStore for S3MovieStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn key(&self) -> &str {
        &self.key
    }

    async fn store(&self, payload: &EnrichedPayload) -> Result<()> {
        let body = serde_json::to_vec(payload).context("Could not serialize enriched movies.")?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .body(ByteStream::from(body))
            .content_type(CONTENT_TYPE)
            .send()
            .await
            .context("Error storing JSON data in S3.")?;

        info!(
            "Successfully stored enriched movies in S3 bucket {} under key {}",
            self.bucket, self.key
        );
        Ok(())
    }
}
