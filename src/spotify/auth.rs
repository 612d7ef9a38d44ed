use reqwest::Client;
use serde_json::Value;

use crate::{config::SpotifyConfig, error::ApiError};

/// Permissions requested from the user.
pub const SPOTIFY_SCOPES: &str =
    "user-read-recently-played playlist-modify-public playlist-modify-private";

/// Builds the URL the browser is sent to for the authorization-code flow.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config.spotify);
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(config: &SpotifyConfig) -> String {
    let mut url = config.auth_url.clone();
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", SPOTIFY_SCOPES);
    url.into()
}

/// Exchanges an authorization code for tokens.
///
/// The accounts service response is returned verbatim on success.
///
/// # Errors
///
/// Any failure becomes [`ApiError::TokenExchange`]: a non-success status
/// carries the body Spotify sent back (for example
/// `{"error":"invalid_grant","error_description":"Invalid authorization code"}`),
/// transport and decoding errors carry their own message.
pub async fn exchange_code(config: &SpotifyConfig, code: &str) -> Result<Value, ApiError> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::TokenExchange(e.to_string()))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| ApiError::TokenExchange(e.to_string()))?;

    if !status.is_success() {
        if body.trim().is_empty() {
            return Err(ApiError::TokenExchange(format!(
                "Token endpoint responded with {}",
                status
            )));
        }
        return Err(ApiError::TokenExchange(body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::TokenExchange(e.to_string()))
}
