//! Models shared by both functions: the movies fetched from the top movie source, the metadata
//! returned by the provider, and the JSON documents exchanged through the queue and the bucket.

mod enriched_movie;
mod movie;
mod movie_metadata;
mod payload;

pub use enriched_movie::EnrichedMovie;
pub use movie::{Movie, MovieList};
pub use movie_metadata::MovieMetadata;
pub use payload::{EnrichedPayload, Top10Payload};
