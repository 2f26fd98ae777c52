use aws_config::{BehaviorVersion, SdkConfig};
use dotenv::dotenv;
use top10movies_common::environment::variables::LOG_FILTER;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Load any local `.env` file and set up the logging framework. Must run once, before anything
/// logs.
pub fn initialize() {
    dotenv().ok();

    // Read the filter configuration from the environment variable or default to info logs and
    // above. CloudWatch stamps each line itself, so no timestamps here.
    let filter = EnvFilter::try_from_env(LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Load the AWS configuration (region, credentials) from the Lambda environment.
pub async fn load_aws_config() -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest()).load().await
}
