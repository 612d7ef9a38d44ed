use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;

use crate::error::ApiError;

/// The caller's Spotify access token, taken from `Authorization: Bearer <token>`.
///
/// No validation happens here: any non-empty bearer string is accepted and
/// forwarded to Spotify unchanged. Spotify decides whether it is valid.
///
/// Serializes as `{"access_token": "<token>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub access_token: String,
}

impl CurrentUser {
    /// Parses the value of an `Authorization` header.
    ///
    /// The scheme is matched case-insensitively. Everything after the first
    /// space is the token, kept byte for byte. A different scheme or a blank
    /// credential is rejected.
    pub fn from_authorization(value: &str) -> Result<Self, ApiError> {
        let Some((scheme, credentials)) = value.split_once(' ') else {
            return Err(invalid_credentials());
        };

        if !scheme.eq_ignore_ascii_case("bearer") || credentials.trim().is_empty() {
            return Err(invalid_credentials());
        }

        Ok(CurrentUser {
            access_token: credentials.to_string(),
        })
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

        let value = header.to_str().map_err(|_| invalid_credentials())?;
        CurrentUser::from_authorization(value)
    }
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Could not validate credentials".to_string())
}
