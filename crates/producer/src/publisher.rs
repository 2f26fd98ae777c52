//! Publishing of the top movies to the FIFO queue read by the enricher.

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_sqs::Client;
use tracing::debug;

/// A message ready to be sent to a FIFO queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueMessage {
    pub body: String,
    pub group_id: String,
    pub deduplication_id: String,
}

/// Sends a [QueueMessage] somewhere the enricher will pick it up.
#[async_trait]
pub trait MoviePublisher: Send + Sync {
    /// Send the message, returning the ID the queue assigned to it.
    async fn publish(&self, message: &QueueMessage) -> Result<String>;
}

/// Publishes to an SQS FIFO queue looked up by name.
pub struct SqsMoviePublisher {
    client: Client,
    queue_name: String,
}

impl SqsMoviePublisher {
    pub fn new(client: Client, queue_name: &str) -> Self {
        SqsMoviePublisher {
            client,
            queue_name: String::from(queue_name),
        }
    }

    async fn get_queue_url(&self) -> Result<String> {
        let output = self
            .client
            .get_queue_url()
            .queue_name(&self.queue_name)
            .send()
            .await
            .with_context(|| format!("Could not look up queue {}.", self.queue_name))?;
        let url = output
            .queue_url()
            .with_context(|| format!("SQS returned no URL for queue {}.", self.queue_name))?;
        debug!(queue_url = url, "Resolved queue URL.");
        Ok(String::from(url))
    }
}

#[async_trait]
impl MoviePublisher for SqsMoviePublisher {
    async fn publish(&self, message: &QueueMessage) -> Result<String> {
        let queue_url = self.get_queue_url().await?;
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(&message.body)
            .message_group_id(&message.group_id)
            .message_deduplication_id(&message.deduplication_id)
            .send()
            .await
            .context("Error when sending message to SQS.")?;

        let message_id = output
            .message_id()
            .context("SQS accepted the message but returned no message ID.")?;
        Ok(String::from(message_id))
    }
}
