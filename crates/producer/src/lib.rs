//! Fetches the current top 10 movies and publishes them as a single message to the FIFO queue
//! consumed by the enricher.

use anyhow::Context;
use top10movies_common::models::Top10Payload;
use top10movies_common::Top10Error;
use tracing::{error, info, Span};

mod deduplication;
mod movie_source;
mod publisher;
mod settings;

pub use deduplication::deduplication_id;
pub use movie_source::{HttpMovieSource, MovieSource, TOP_MOVIE_COUNT};
pub use publisher::{MoviePublisher, QueueMessage, SqsMoviePublisher};
pub use settings::{ProducerSettings, DEFAULT_MOVIES_SOURCE_URL, MESSAGE_GROUP_ID};

/// Fetch the top movies from `source` and send them to the queue through `publisher`.
///
/// Nothing is published when fetching fails. Returns the ID of the sent message.
pub async fn run_producer<S, P>(
    source: &S,
    publisher: &P,
    settings: &ProducerSettings,
) -> Result<String, Top10Error>
where
    S: MovieSource + ?Sized,
    P: MoviePublisher + ?Sized,
{
    info!("Fetching list of top movies...");
    let movies = source.fetch_top_movies().await.map_err(|e| {
        error!("Error fetching Top Movies list: {:?}", e);
        Top10Error::Fetch(e)
    })?;
    Span::current().record("movie_count", movies.len());

    let payload = Top10Payload { top10: movies };
    let message = build_message(&payload, settings).map_err(|e| publish_error(settings, e))?;
    info!(
        deduplication_id = %message.deduplication_id,
        "Sending top movies data to SQS: {}",
        message.body
    );

    let message_id = publisher
        .publish(&message)
        .await
        .map_err(|e| publish_error(settings, e))?;
    Span::current().record("message_id", message_id.as_str());
    info!(message_id = %message_id, "Message sent to SQS.");

    Ok(message_id)
}

fn build_message(
    payload: &Top10Payload,
    settings: &ProducerSettings,
) -> anyhow::Result<QueueMessage> {
    let body = serde_json::to_string(payload).context("Could not serialize the top movies.")?;
    Ok(QueueMessage {
        deduplication_id: deduplication_id(&body, settings.deduplication_id.as_deref()),
        group_id: settings.message_group_id.clone(),
        body,
    })
}

fn publish_error(settings: &ProducerSettings, source: anyhow::Error) -> Top10Error {
    error!("Error when sending message to SQS: {:?}", source);
    Top10Error::Publish {
        queue: settings.queue_name.clone(),
        source,
    }
}
