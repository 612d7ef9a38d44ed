use std::fmt;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::warning;

/// Errors surfaced to clients of the HTTP API.
///
/// Each variant maps to one status code; the body is always
/// `{"detail": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed bearer credential.
    Unauthorized(String),
    /// A `start_date` or `end_date` that is not an ISO-8601 timestamp.
    InvalidDate(String),
    /// The accounts service refused or failed the code exchange. Carries the
    /// raw upstream error text.
    TokenExchange(String),
    /// A non-success status from the Web API while creating a playlist.
    Upstream(String),
    /// Transport failure talking to the Web API.
    Http(reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidDate(_) | ApiError::TokenExchange(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::InvalidDate(msg)
            | ApiError::TokenExchange(msg)
            | ApiError::Upstream(msg) => f.write_str(msg),
            ApiError::Http(err) => write!(f, "Request to Spotify failed: {}", err),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        warning!("{} {}", status.as_u16(), detail);

        let mut response = (status, Json(json!({ "detail": detail }))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
