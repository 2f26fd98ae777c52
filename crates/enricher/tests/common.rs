#![allow(dead_code)]

use async_trait::async_trait;
use aws_lambda_events::event::sqs::SqsEvent;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Once};
use tokio::sync::RwLock;
use top10movies_common::models::{EnrichedPayload, MovieMetadata};
use top10movies_enricher::{EnrichedMovieStore, MetadataProvider};

static INIT: Once = Once::new();

pub const SENT_TIMESTAMP: &str = "1700000000123";

pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Build an SQS event with a single record carrying `body`.
pub fn sqs_event(body: &str) -> SqsEvent {
    sqs_event_with_attributes(
        body,
        json!({
            "ApproximateReceiveCount": "1",
            "SentTimestamp": SENT_TIMESTAMP,
            "SenderId": "123456789012",
            "ApproximateFirstReceiveTimestamp": "1700000000130",
            "MessageGroupId": "top10-movies",
            "MessageDeduplicationId": "top10-movies-batch"
        }),
    )
}

/// Build an SQS event with a single record carrying `body` and the given system attributes.
pub fn sqs_event_with_attributes(body: &str, attributes: Value) -> SqsEvent {
    serde_json::from_value(json!({
        "Records": [
            {
                "messageId": "19dd0b57-b21e-4ac1-bd88-01bbb068cb78",
                "receiptHandle": "MessageReceiptHandle",
                "body": body,
                "attributes": attributes,
                "messageAttributes": {},
                "md5OfBody": "7b270e59b47ff90a553787216d55d91d",
                "eventSource": "aws:sqs",
                "eventSourceARN": "arn:aws:sqs:eu-central-1:123456789012:top10-queue.fifo",
                "awsRegion": "eu-central-1"
            }
        ]
    }))
    .unwrap()
}

/// Fake implementation of [MetadataProvider] that answers from a fixed table, failing for any
/// identifier it has no answer for, and captures every identifier it is asked about.
#[derive(Clone)]
pub struct SpyProvider {
    responses: HashMap<String, Value>,
    pub calls: Arc<RwLock<Vec<String>>>,
}

impl SpyProvider {
    pub fn new(responses: &[(&str, Value)]) -> Self {
        SpyProvider {
            responses: responses
                .iter()
                .map(|(id, value)| (id.to_string(), value.clone()))
                .collect(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl MetadataProvider for SpyProvider {
    async fn get_movie_metadata(&self, movie_id: &str) -> anyhow::Result<MovieMetadata> {
        self.calls.write().await.push(String::from(movie_id));
        match self.responses.get(movie_id) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => anyhow::bail!("500 Internal Server Error for {}", movie_id),
        }
    }
}

/// Fake implementation of [EnrichedMovieStore] that captures every payload written to it.
#[derive(Clone)]
pub struct SpyStore {
    pub payloads: Arc<RwLock<Vec<EnrichedPayload>>>,
    fail: bool,
}

impl SpyStore {
    pub fn new() -> Self {
        SpyStore {
            payloads: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        SpyStore {
            fail: true,
            ..SpyStore::new()
        }
    }
}

#[async_trait]
impl EnrichedMovieStore for SpyStore {
    fn bucket(&self) -> &str {
        "top10-movies-storage"
    }

    fn key(&self) -> &str {
        "enriched_top10_movies.json"
    }

    async fn store(&self, payload: &EnrichedPayload) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("Access Denied");
        }
        self.payloads.write().await.push(payload.clone());
        Ok(())
    }
}
