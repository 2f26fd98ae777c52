//! Consumes a queue message holding the top 10 movies, enriches each movie with metadata from
//! OMDb and stores the result as the single current snapshot in S3.

use aws_lambda_events::event::sqs::SqsEvent;
use top10movies_common::models::EnrichedPayload;
use top10movies_common::Top10Error;
use tracing::{debug, error, info, warn, Span};

mod enrichment;
mod message;
mod metadata_provider;
mod settings;
mod store;

pub use enrichment::enrich_movie_list;
pub use message::{parse_event, MovieBatch};
pub use metadata_provider::{MetadataProvider, OmdbProvider};
pub use settings::{EnricherSettings, DEFAULT_OBJECT_KEY, DEFAULT_OMDB_BASE_URL};
pub use store::{EnrichedMovieStore, S3MovieStore};

/// What a successful invocation did.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome {
    /// The message carried no movies; nothing was fetched or stored.
    NoMovies,
    /// The payload that was written to the store.
    Stored(EnrichedPayload),
}

/// Runs the parse, enrich and store steps for one SQS event.
pub struct Enricher<P, S> {
    provider: P,
    store: S,
}

impl<P, S> Enricher<P, S>
where
    P: MetadataProvider,
    S: EnrichedMovieStore,
{
    pub fn new(provider: P, store: S) -> Self {
        Enricher { provider, store }
    }

    /// Handle one event. Any failure ends the invocation before the store is written, so the
    /// store only ever receives a fully enriched list.
    pub async fn handle(&self, event: &SqsEvent) -> Result<EnrichmentOutcome, Top10Error> {
        let batch = parse_event(event)?;
        let span = Span::current();
        if let Some(message_id) = &batch.message_id {
            span.record("message_id", message_id.as_str());
        }
        span.record("movie_count", batch.movies.len());

        if batch.movies.is_empty() {
            warn!("No movies found in the message body.");
            return Ok(EnrichmentOutcome::NoMovies);
        }

        let date = batch
            .sent_timestamp
            .ok_or_else(|| message::invalid("The record has no SentTimestamp attribute."))?;

        let enriched = enrich_movie_list(&self.provider, &batch.movies).await?;
        debug!("Enriched movies: {:?}", enriched);

        let payload = EnrichedPayload {
            top10: enriched,
            date,
        };
        info!("Storing enriched movies in S3...");
        self.store.store(&payload).await.map_err(|e| {
            error!("Error storing enriched movies in S3: {:?}", e);
            Top10Error::Store {
                bucket: self.store.bucket().to_string(),
                key: self.store.key().to_string(),
                source: e,
            }
        })?;

        Ok(EnrichmentOutcome::Stored(payload))
    }
}
