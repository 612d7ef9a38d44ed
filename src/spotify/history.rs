use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    error::ApiError,
    spotify::SpotifyClient,
    types::{RecentlyPlayedResponse, TrackRecord},
    utils::{self, TimeWindow},
    warning,
};

/// Items requested per recently-played page (Spotify's maximum).
pub const HISTORY_PAGE_LIMIT: u32 = 50;

/// Upper bound on the number of tracks returned for one request.
pub const HISTORY_MAX_TRACKS: usize = 100;

impl SpotifyClient {
    /// Retrieves the tracks the user played between `start_date` and `end_date`.
    ///
    /// Both bounds are ISO-8601 timestamps (a trailing `Z` is accepted) and both
    /// are inclusive. See [`SpotifyClient::collect_history`] for how pages are
    /// walked.
    ///
    /// # Arguments
    ///
    /// * `start_date` - Oldest play to include, e.g. `2024-01-01T00:00:00Z`
    /// * `end_date` - Newest play to include, e.g. `2024-01-02T00:00:00Z`
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<TrackRecord>)` - Up to [`HISTORY_MAX_TRACKS`] tracks, most recent
    ///   first, each carrying the `played_at` of its play
    /// - `Err(ApiError::InvalidDate)` - One of the bounds could not be parsed
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(&config.spotify, token);
    /// let tracks = client
    ///     .get_listening_history("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z")
    ///     .await?;
    /// ```
    pub async fn get_listening_history(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<TrackRecord>, ApiError> {
        let start_ms = utils::parse_timestamp_ms(start_date).map_err(|e| {
            ApiError::InvalidDate(format!("Invalid start_date '{}': {}", start_date, e))
        })?;
        let end_ms = utils::parse_timestamp_ms(end_date).map_err(|e| {
            ApiError::InvalidDate(format!("Invalid end_date '{}': {}", end_date, e))
        })?;

        Ok(self.collect_history(TimeWindow::new(start_ms, end_ms)).await)
    }

    /// Walks the recently-played pages backwards from the end of `window`.
    ///
    /// Spotify returns plays newest first, so the first page is anchored with
    /// `before=<window end>` and each following page is taken from the `next`
    /// link of the previous one. Plays inside the window are collected; the
    /// first play older than the window start ends the walk, including any
    /// remaining pages.
    ///
    /// The walk also stops when:
    /// - [`HISTORY_MAX_TRACKS`] tracks have been collected (checked before each
    ///   page, the result is truncated to the cap afterwards)
    /// - a page is empty or has no `next` link
    /// - a page cannot be fetched; the tracks collected so far are returned
    ///
    /// Pages after the first are preceded by the configured rate-limit delay.
    /// An empty window (start after end) returns nothing without calling
    /// Spotify.
    pub async fn collect_history(&self, window: TimeWindow) -> Vec<TrackRecord> {
        let mut tracks: Vec<TrackRecord> = Vec::new();
        if window.is_empty() {
            return tracks;
        }

        let mut next_url = Some(self.endpoint(&format!(
            "me/player/recently-played?limit={limit}&before={before}",
            limit = HISTORY_PAGE_LIMIT,
            before = window.end_ms
        )));
        let mut first_page = true;

        'pages: while let Some(url) = next_url.take() {
            if tracks.len() >= HISTORY_MAX_TRACKS {
                break;
            }

            if !first_page {
                sleep(self.rate_limit_delay()).await;
            }
            first_page = false;

            let Some(page) = self.fetch_history_page(&url).await else {
                break;
            };

            if page.items.is_empty() {
                break;
            }

            for item in page.items {
                let played_at = match utils::parse_timestamp_ms(&item.played_at) {
                    Ok(ts) => ts,
                    Err(e) => {
                        warning!("Skipping play with unreadable played_at '{}': {}", item.played_at, e);
                        continue;
                    }
                };

                if window.contains(played_at) {
                    let mut track = item.track;
                    track.insert("played_at".to_string(), Value::String(item.played_at));
                    tracks.push(track);
                } else if window.is_before_start(played_at) {
                    // pages are newest first, nothing older can match
                    break 'pages;
                }
            }

            next_url = page.next;
        }

        tracks.truncate(HISTORY_MAX_TRACKS);
        tracks
    }

    /// Fetches one recently-played page, `None` if it could not be fetched.
    async fn fetch_history_page(&self, url: &str) -> Option<RecentlyPlayedResponse> {
        let response = match self.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warning!("Recently played request failed, returning partial history: {}", e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warning!(
                "Recently played responded with {}, returning partial history",
                response.status()
            );
            return None;
        }

        match response.json::<RecentlyPlayedResponse>().await {
            Ok(page) => Some(page),
            Err(e) => {
                warning!("Unreadable recently played page, returning partial history: {}", e);
                None
            }
        }
    }
}
