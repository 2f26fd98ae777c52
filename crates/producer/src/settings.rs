use top10movies_common::environment::variables::{
    MOVIES_SOURCE_URL, QUEUE_DEDUPLICATION_ID, QUEUE_NAME,
};
use top10movies_common::environment::{get_env_var, get_optional_env_var, get_url_or_default};
use top10movies_common::Top10Error;
use tracing::info;
use url::Url;

/// Where the top movies list is published when no source is configured.
pub const DEFAULT_MOVIES_SOURCE_URL: &str =
    "https://top-movies.s3.eu-central-1.amazonaws.com/Top250Movies.json";
pub const MESSAGE_GROUP_ID: &str = "top10-movies";

/// Settings to configure the producer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerSettings {
    pub queue_name: String,
    pub source_url: Url,
    pub message_group_id: String,
    /// Pins every message to the same deduplication ID. When `None`, the ID is derived from the
    /// message body.
    pub deduplication_id: Option<String>,
}

impl ProducerSettings {
    /// Create a [ProducerSettings] by retrieving the values from the environment variables
    /// available to the function.
    pub fn from_env() -> Result<Self, Top10Error> {
        Ok(ProducerSettings {
            queue_name: get_env_var(QUEUE_NAME)?,
            source_url: get_source_url()?,
            message_group_id: String::from(MESSAGE_GROUP_ID),
            deduplication_id: get_deduplication_id(),
        })
    }
}

fn get_source_url() -> Result<Url, Top10Error> {
    let url = get_url_or_default(MOVIES_SOURCE_URL, DEFAULT_MOVIES_SOURCE_URL)?;
    info!(source_url = %url, "Found top movies source URL.");
    Ok(url)
}

fn get_deduplication_id() -> Option<String> {
    let id = get_optional_env_var(QUEUE_DEDUPLICATION_ID);
    if id.is_none() {
        info!(
            "No value found for {}, deduplication IDs will be derived from message content.",
            QUEUE_DEDUPLICATION_ID
        );
    }
    id
}
