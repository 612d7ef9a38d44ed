//! Configuration management for the Rewindify backend.
//!
//! Configuration is read once at startup from environment variables (optionally
//! seeded from a `.env` file) into a [`Config`] value that is then shared with
//! every request handler. Nothing in here is consulted again per request.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, or in the working directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

use reqwest::Url;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{} must be set", var),
            ConfigError::Invalid(var, reason) => write!(f, "{} is invalid: {}", var, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for talking to the Spotify Web API and accounts service.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    pub auth_url: Url,
    pub token_url: String,
    /// Fixed pause inserted between sequential upstream calls.
    pub rate_limit_delay: Duration,
}

/// Application configuration, built once by [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// The single browser origin allowed by CORS.
    pub frontend_origin: String,
    pub spotify: SpotifyConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `SPOTIFY_API_AUTH_CLIENT_ID`, `SPOTIFY_API_AUTH_CLIENT_SECRET` and
    /// `SPOTIFY_API_REDIRECT_URI` are required; everything else falls back to
    /// the defaults above.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for an unset required variable and
    /// [`ConfigError::Invalid`] when `SPOTIFY_API_AUTH_URL` is not a URL or
    /// `SPOTIFY_API_RATE_LIMIT_MS` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rate_limit_ms = match optional("SPOTIFY_API_RATE_LIMIT_MS") {
            Some(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::Invalid("SPOTIFY_API_RATE_LIMIT_MS", e.to_string())
            })?,
            None => DEFAULT_RATE_LIMIT_MS,
        };

        Ok(Config {
            server_address: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            frontend_origin: optional("FRONTEND_ORIGIN")
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string()),
            spotify: SpotifyConfig {
                client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
                client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
                redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
                api_url: optional("SPOTIFY_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
                auth_url: Url::parse(
                    &optional("SPOTIFY_API_AUTH_URL")
                        .unwrap_or_else(|| DEFAULT_SPOTIFY_AUTH_URL.to_string()),
                )
                .map_err(|e| ConfigError::Invalid("SPOTIFY_API_AUTH_URL", e.to_string()))?,
                token_url: optional("SPOTIFY_API_TOKEN_URL")
                    .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string()),
                rate_limit_delay: Duration::from_millis(rate_limit_ms),
            },
        })
    }
}

/// Loads environment variables from a `.env` file.
///
/// Looks for `rewindify/.env` in the platform-specific local data directory
/// first, creating the directory if needed:
/// - Linux: `~/.local/share/rewindify/.env`
/// - macOS: `~/Library/Application Support/rewindify/.env`
/// - Windows: `%LOCALAPPDATA%/rewindify/.env`
///
/// If no file exists there, a `.env` in the working directory is tried.
/// Finding no file at all is fine; the environment may already be complete.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rewindify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
        return Ok(());
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::Missing(var))
}

fn optional(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}
