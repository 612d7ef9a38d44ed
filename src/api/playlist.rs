use std::sync::Arc;

use axum::{Extension, Json};
use serde_json::Value;

use crate::{
    api::CurrentUser, config::Config, error::ApiError, spotify::SpotifyClient, success,
    types::PlaylistCreate,
};

pub async fn playlist(
    Extension(config): Extension<Arc<Config>>,
    user: CurrentUser,
    Json(request): Json<PlaylistCreate>,
) -> Result<Json<Value>, ApiError> {
    let client = SpotifyClient::new(&config.spotify, user.access_token);
    let playlist = client
        .create_playlist(&request.name, &request.track_uris)
        .await?;

    success!(
        "Playlist '{}' created with {} tracks",
        request.name,
        request.track_uris.len()
    );
    Ok(Json(playlist))
}
