use reqwest::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    moods::SeedProfile,
    types::RecommendationsResponse,
};

/// Fixed number of tracks requested per recommendation query.
pub const RECOMMENDATION_LIMIT: u8 = 10;

/// Builds the recommendations request URL for a seed profile. Genres and
/// artist ids are comma-joined.
pub fn recommendations_url(config: &Config, seeds: SeedProfile) -> String {
    format!(
        "{uri}/recommendations?seed_genres={genres}&seed_artists={artists}&limit={limit}",
        uri = &config.api_url,
        genres = seeds.genres.join(","),
        artists = seeds.artists.join(","),
        limit = RECOMMENDATION_LIMIT,
    )
}

/// Fetches recommendations biased by the given seed profile, authenticated
/// with the caller-supplied access token.
pub async fn get_recommendations(
    config: &Config,
    token: &str,
    seeds: SeedProfile,
) -> Result<RecommendationsResponse> {
    let client = Client::new();
    let res = client
        .get(recommendations_url(config, seeds))
        .bearer_auth(token)
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::UpstreamStatus(res.status()));
    }

    let body = res.text().await?;
    let recommendations: RecommendationsResponse = serde_json::from_str(&body)?;
    Ok(recommendations)
}
