use crate::models::{Movie, MovieMetadata};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A [Movie] merged with the [MovieMetadata] fetched for it, stored as one flat JSON object.
///
/// # Precedence
///
/// Metadata fields overwrite movie fields of the same name. Fields only present on the movie are
/// kept as they were, and keys keep the movie's order followed by any new metadata keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct EnrichedMovie(Map<String, Value>);

impl EnrichedMovie {
    pub fn merge(movie: &Movie, metadata: &MovieMetadata) -> Result<Self, serde_json::Error> {
        let mut fields: Map<String, Value> = serde_json::from_value(serde_json::to_value(movie)?)?;
        for (key, value) in metadata.fields() {
            fields.insert(key.clone(), value.clone());
        }

        Ok(EnrichedMovie(fields))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
