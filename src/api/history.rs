use std::sync::Arc;

use axum::{Extension, Json, extract::Query};

use crate::{
    api::CurrentUser,
    config::Config,
    error::ApiError,
    info,
    spotify::SpotifyClient,
    types::{HistoryQuery, TrackRecord},
};

pub async fn history(
    Extension(config): Extension<Arc<Config>>,
    user: CurrentUser,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<TrackRecord>>, ApiError> {
    let client = SpotifyClient::new(&config.spotify, user.access_token);
    let tracks = client
        .get_listening_history(&query.start_date, &query.end_date)
        .await?;

    info!(
        "Collected {} tracks played between {} and {}",
        tracks.len(),
        query.start_date,
        query.end_date
    );
    Ok(Json(tracks))
}
