use crate::models::{EnrichedMovie, Movie};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of the queue message sent by the producer. A missing or `null` `top10` reads as an empty
/// list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Top10Payload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub top10: Vec<Movie>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the object written to the bucket by the enricher. `date` is the `SentTimestamp`
/// attribute of the queue message that triggered the run, copied as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnrichedPayload {
    pub top10: Vec<EnrichedMovie>,
    pub date: String,
}
