use crate::metadata_provider::MetadataProvider;
use anyhow::anyhow;
use top10movies_common::models::{EnrichedMovie, Movie};
use top10movies_common::Top10Error;
use tracing::{debug, error, info};

/// Enrich every movie with the metadata `provider` returns for it, one call at a time and in
/// input order.
///
/// The first failure ends the whole batch: the movies enriched so far are dropped and no further
/// calls are made. A metadata payload that reports a provider error counts as a failure.
pub async fn enrich_movie_list<P>(
    provider: &P,
    movies: &[Movie],
) -> Result<Vec<EnrichedMovie>, Top10Error>
where
    P: MetadataProvider + ?Sized,
{
    info!("Enriching top {} movies with IMDb data...", movies.len());
    let mut enriched_movies = Vec::with_capacity(movies.len());
    for movie in movies {
        let enriched = enrich_movie(provider, movie).await.map_err(|e| {
            error!(
                movie_id = %movie.id,
                "Error fetching IMDb data for movie ID {}: {:?}", movie.id, e
            );
            Top10Error::Enrichment {
                movie_id: movie.id.clone(),
                source: e,
            }
        })?;
        enriched_movies.push(enriched);
    }

    Ok(enriched_movies)
}

async fn enrich_movie<P>(provider: &P, movie: &Movie) -> anyhow::Result<EnrichedMovie>
where
    P: MetadataProvider + ?Sized,
{
    let metadata = provider.get_movie_metadata(&movie.id).await?;
    if let Some(message) = metadata.provider_error() {
        return Err(anyhow!("Metadata provider returned an error: {}", message));
    }

    let enriched = EnrichedMovie::merge(movie, &metadata)?;
    debug!(movie_id = %movie.id, "Enriched movie.");
    Ok(enriched)
}
