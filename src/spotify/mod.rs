//! # Spotify Integration Module
//!
//! This module is the only place that talks to Spotify. It covers the two
//! services the backend depends on:
//!
//! - the **accounts service**, for building the authorization URL and
//!   exchanging an authorization code for tokens ([`auth`])
//! - the **Web API**, for reading recently played tracks ([`history`]) and
//!   creating playlists ([`playlist`])
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (crate::api)
//!          ↓
//! SpotifyClient (one per request, bearer token + config)
//!     ├── Listening history (paginated, windowed, rate limited)
//!     └── Playlist creation (profile → create → batched track upload)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! The access token a client presents is forwarded to Spotify as-is. This
//! backend never stores, refreshes, or inspects tokens; Spotify is the only
//! party that decides whether a token is valid.
//!
//! ## Rate Limiting
//!
//! Sequential calls (history pages, playlist batches) are spaced by the fixed
//! [`SpotifyConfig::rate_limit_delay`](crate::config::SpotifyConfig). There is
//! no retry or adaptive backoff.
//!
//! ## Error Behaviour
//!
//! - History collection never fails because of Spotify: a failed page ends
//!   pagination and whatever was collected so far is returned.
//! - Playlist creation fails on the first non-success status. Batches that were
//!   already added stay on the playlist.
//! - Token exchange failures carry Spotify's error text back to the caller.
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user profile
//! - `GET /me/player/recently-played` - Play history, cursor paginated
//! - `POST /users/{user_id}/playlists` - Create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add up to 100 tracks
//! - `POST /api/token` - Authorization code exchange

pub mod auth;
pub mod client;
pub mod history;
pub mod playlist;

pub use client::SpotifyClient;
