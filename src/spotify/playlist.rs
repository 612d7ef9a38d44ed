use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    error::ApiError,
    info,
    spotify::SpotifyClient,
    types::{AddTrackToPlaylistRequest, CreatePlaylistRequest, UserProfile},
    utils,
};

/// Maximum number of URIs Spotify accepts per add-tracks call.
pub const PLAYLIST_BATCH_SIZE: usize = 100;

pub const PLAYLIST_DESCRIPTION: &str = "Created with Rewindify";

impl SpotifyClient {
    /// Resolves the Spotify user id of the token's owner.
    pub async fn current_user_id(&self) -> Result<String, ApiError> {
        let response = self.get(&self.endpoint("me")).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::Upstream("Failed to get user profile".to_string()));
        }

        let profile = response.json::<UserProfile>().await?;
        Ok(profile.id)
    }

    /// Creates a playlist for the current user and fills it with `track_uris`.
    ///
    /// The URIs are added in order, in batches of [`PLAYLIST_BATCH_SIZE`], with
    /// the rate-limit delay between batches. Duplicates are kept.
    ///
    /// # Arguments
    ///
    /// * `name` - Playlist name
    /// * `track_uris` - Spotify track URIs, e.g. `spotify:track:4uLU6hMCjMI75M1A2tKUQC`
    ///
    /// # Returns
    ///
    /// The playlist object from the create call. Responses of the add-tracks
    /// calls are not merged in.
    ///
    /// # Errors
    ///
    /// [`ApiError::Upstream`] when the profile lookup, the creation or any batch
    /// does not succeed. A failing batch stops the operation; the playlist and
    /// the batches added before it remain on the account.
    pub async fn create_playlist(
        &self,
        name: &str,
        track_uris: &[String],
    ) -> Result<Value, ApiError> {
        let user_id = self.current_user_id().await?;

        let response = self
            .post(&self.endpoint(&format!("users/{}/playlists", user_id)))
            .json(&CreatePlaylistRequest {
                name: name.to_string(),
                description: PLAYLIST_DESCRIPTION.to_string(),
            })
            .send()
            .await?;
        if response.status() != StatusCode::CREATED {
            return Err(ApiError::Upstream("Failed to create playlist".to_string()));
        }

        let playlist = response.json::<Value>().await?;
        let playlist_id = playlist
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Upstream("Failed to create playlist".to_string()))?
            .to_string();

        info!(
            "Adding {} tracks to playlist {} in {} batches",
            track_uris.len(),
            playlist_id,
            utils::batch_count(track_uris.len(), PLAYLIST_BATCH_SIZE)
        );

        for (index, batch) in track_uris.chunks(PLAYLIST_BATCH_SIZE).enumerate() {
            if index > 0 {
                sleep(self.rate_limit_delay()).await;
            }
            self.add_tracks(&playlist_id, batch).await?;
        }

        Ok(playlist)
    }

    /// Appends up to [`PLAYLIST_BATCH_SIZE`] URIs to a playlist.
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError> {
        let response = self
            .post(&self.endpoint(&format!("playlists/{}/tracks", playlist_id)))
            .json(&AddTrackToPlaylistRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(ApiError::Upstream(
                "Failed to add tracks to playlist".to_string(),
            ));
        }

        Ok(())
    }
}
