use top10movies_common::environment::variables::{
    OMDB_API_KEY, OMDB_BASE_URL, STORAGE_BUCKET_NAME, STORAGE_OBJECT_KEY,
};
use top10movies_common::environment::{get_env_var, get_optional_env_var, get_url_or_default};
use top10movies_common::Top10Error;
use tracing::info;
use url::Url;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_OBJECT_KEY: &str = "enriched_top10_movies.json";

/// Settings to configure the enricher. Read once at cold start.
#[derive(Clone, PartialEq)]
pub struct EnricherSettings {
    pub omdb_api_key: String,
    pub omdb_base_url: Url,
    pub bucket_name: String,
    pub object_key: String,
}

impl EnricherSettings {
    /// Create an [EnricherSettings] by retrieving the values from the environment variables
    /// available to the function.
    pub fn from_env() -> Result<Self, Top10Error> {
        Ok(EnricherSettings {
            omdb_api_key: get_env_var(OMDB_API_KEY)?,
            omdb_base_url: get_url_or_default(OMDB_BASE_URL, DEFAULT_OMDB_BASE_URL)?,
            bucket_name: get_env_var(STORAGE_BUCKET_NAME)?,
            object_key: get_object_key(),
        })
    }
}

// The API key stays out of the logs.
impl std::fmt::Debug for EnricherSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnricherSettings")
            .field("omdb_api_key", &"<redacted>")
            .field("omdb_base_url", &self.omdb_base_url.as_str())
            .field("bucket_name", &self.bucket_name)
            .field("object_key", &self.object_key)
            .finish()
    }
}

fn get_object_key() -> String {
    match get_optional_env_var(STORAGE_OBJECT_KEY) {
        Some(key) => key,
        None => {
            info!(
                "No value found for {}, using the default value {}.",
                STORAGE_OBJECT_KEY, DEFAULT_OBJECT_KEY
            );
            String::from(DEFAULT_OBJECT_KEY)
        }
    }
}
