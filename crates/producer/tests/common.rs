#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Once};
use tokio::sync::RwLock;
use top10movies_common::models::Movie;
use top10movies_producer::{MoviePublisher, MovieSource, ProducerSettings, QueueMessage};
use url::Url;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

pub fn settings() -> ProducerSettings {
    ProducerSettings {
        queue_name: String::from("top10-movies-queue.fifo"),
        source_url: Url::parse("https://example.com/Top250Movies.json").unwrap(),
        message_group_id: String::from("top10-movies"),
        deduplication_id: None,
    }
}

/// Fake implementation of [MoviePublisher] that captures the [QueueMessage]s given to it.
#[derive(Clone)]
pub struct SpyPublisher {
    pub messages: Arc<RwLock<Vec<QueueMessage>>>,
    fail: bool,
}

impl SpyPublisher {
    pub fn new() -> Self {
        SpyPublisher {
            messages: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        SpyPublisher {
            fail: true,
            ..SpyPublisher::new()
        }
    }
}

#[async_trait]
impl MoviePublisher for SpyPublisher {
    async fn publish(&self, message: &QueueMessage) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("Queue is unavailable.");
        }
        let mut messages = self.messages.write().await;
        messages.push(message.clone());

        Ok(format!("message-{}", messages.len()))
    }
}

/// Fake implementation of [MovieSource] returning a fixed list, or failing.
pub struct StubMovieSource(pub Option<Vec<Movie>>);

#[async_trait]
impl MovieSource for StubMovieSource {
    async fn fetch_top_movies(&self) -> anyhow::Result<Vec<Movie>> {
        match &self.0 {
            Some(movies) => Ok(movies.clone()),
            None => anyhow::bail!("Source is unavailable."),
        }
    }
}
