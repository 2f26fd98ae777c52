//! Reading the movies out of the SQS event that triggered the enricher.

use aws_lambda_events::event::sqs::SqsEvent;
use top10movies_common::models::{Movie, Top10Payload};
use top10movies_common::Top10Error;
use tracing::{debug, error, info};

const SENT_TIMESTAMP: &str = "SentTimestamp";

/// The movies carried by one queue message, along with when the message was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieBatch {
    pub message_id: Option<String>,
    pub movies: Vec<Movie>,
    /// `SentTimestamp` attribute of the message, unmodified. Only needed once there is something
    /// to store.
    pub sent_timestamp: Option<String>,
}

/// Parse the first record of `event` into a [MovieBatch]. Any further records are ignored.
pub fn parse_event(event: &SqsEvent) -> Result<MovieBatch, Top10Error> {
    let record = event
        .records
        .first()
        .ok_or_else(|| invalid("The event contains no records."))?;
    if event.records.len() > 1 {
        debug!(
            record_count = event.records.len(),
            "Only the first record of the event will be processed."
        );
    }

    let body = record
        .body
        .as_deref()
        .ok_or_else(|| invalid("The record has no body."))?;
    info!("Processing body: {}", body);

    let payload: Top10Payload = serde_json::from_str(body)
        .map_err(|e| invalid(&format!("The body is not a top 10 payload: {}", e)))?;

    Ok(MovieBatch {
        message_id: record.message_id.clone(),
        movies: payload.top10,
        sent_timestamp: record.attributes.get(SENT_TIMESTAMP).cloned(),
    })
}

pub(crate) fn invalid(message: &str) -> Top10Error {
    error!("{}", message);
    Top10Error::InvalidMessage(String::from(message))
}
