mod initialization;

use crate::initialization::{initialize, load_aws_config};
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use top10movies_common::invocation_span;
use top10movies_enricher::{Enricher, EnricherSettings, OmdbProvider, S3MovieStore};
use tracing::{debug, info, Instrument};

const FUNCTION_NAME: &str = "enrich_top10_movies";

type MovieEnricher = Enricher<OmdbProvider, S3MovieStore>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    initialize();
    info!("Initializing the top 10 movies enricher...");

    let settings = EnricherSettings::from_env()?;
    debug!("Loaded settings: {:?}", settings);
    let aws_config = load_aws_config().await;
    let provider = OmdbProvider::new(settings.omdb_base_url.clone(), &settings.omdb_api_key);
    let store = S3MovieStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        &settings.bucket_name,
        &settings.object_key,
    );
    let enricher = Enricher::new(provider, store);

    let enricher = &enricher;
    info!("Top 10 movies enricher started!");
    run(service_fn(move |event: LambdaEvent<SqsEvent>| async move {
        handler(event, enricher).await
    }))
    .await
}

/// Enrich the movies of the first queue record and store them.
async fn handler(event: LambdaEvent<SqsEvent>, enricher: &MovieEnricher) -> Result<(), Error> {
    let (sqs_event, context) = event.into_parts();
    let span = invocation_span(FUNCTION_NAME, &context.request_id);
    enricher.handle(&sqs_event).instrument(span).await?;

    Ok(())
}
