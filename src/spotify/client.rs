use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::config::SpotifyConfig;

/// Per-request client for the Spotify Web API.
///
/// Built from the access token of the inbound request. Each instance owns its
/// own connection pool, nothing is shared between requests.
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    access_token: String,
    rate_limit_delay: Duration,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            access_token: access_token.into(),
            rate_limit_delay: config.rate_limit_delay,
        }
    }

    /// Joins `path` onto the configured Web API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    pub fn rate_limit_delay(&self) -> Duration {
        self.rate_limit_delay
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url).bearer_auth(&self.access_token)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url).bearer_auth(&self.access_token)
    }
}
