//! # API Module
//!
//! HTTP endpoints of the Rewindify backend. The handlers are thin: they pull
//! the configuration, the caller's credential and the request payload out of
//! the request and hand them to [`crate::spotify`].
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`auth_url`] - `GET /api/auth/url`, the Spotify authorization URL
//! - [`token`] - `POST /api/auth/token`, exchanges an authorization code
//!
//! ### Listening history
//!
//! - [`history`] - `GET /api/history?start_date=&end_date=`, bearer auth
//!
//! ### Playlists
//!
//! - [`playlist`] - `POST /api/playlist`, bearer auth
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`, status and version
//!
//! ## Credentials
//!
//! Protected endpoints take a [`CurrentUser`], extracted from the
//! `Authorization` header. The token is passed through to Spotify without
//! any local verification.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use rewindify::api;
//!
//! let app = Router::new()
//!     .route("/api/history", get(api::history))
//!     .route("/api/playlist", post(api::playlist));
//! ```

mod auth;
mod credentials;
mod health;
mod history;
mod playlist;

pub use auth::{auth_url, token};
pub use credentials::CurrentUser;
pub use health::health;
pub use history::history;
pub use playlist::playlist;
