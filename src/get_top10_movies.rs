mod initialization;

use crate::initialization::{initialize, load_aws_config};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use top10movies_common::invocation_span;
use top10movies_producer::{run_producer, HttpMovieSource, ProducerSettings, SqsMoviePublisher};
use tracing::{info, Instrument};

const FUNCTION_NAME: &str = "get_top10_movies";

#[tokio::main]
async fn main() -> Result<(), Error> {
    initialize();
    info!("Initializing the top 10 movies producer...");

    let settings = ProducerSettings::from_env()?;
    let aws_config = load_aws_config().await;
    let source = HttpMovieSource::new(settings.source_url.clone());
    let publisher = SqsMoviePublisher::new(
        aws_sdk_sqs::Client::new(&aws_config),
        &settings.queue_name,
    );

    let settings = &settings;
    let source = &source;
    let publisher = &publisher;
    info!("Top 10 movies producer started!");
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(event, source, publisher, settings).await
    }))
    .await
}

/// Fetch the top movies and send them to the queue. The triggering event carries nothing of use.
async fn handler(
    event: LambdaEvent<Value>,
    source: &HttpMovieSource,
    publisher: &SqsMoviePublisher,
    settings: &ProducerSettings,
) -> Result<(), Error> {
    let span = invocation_span(FUNCTION_NAME, &event.context.request_id);
    run_producer(source, publisher, settings)
        .instrument(span)
        .await?;

    Ok(())
}
