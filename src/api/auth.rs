use std::sync::Arc;

use axum::{Extension, Json};
use serde_json::Value;

use crate::{
    config::Config,
    error::ApiError,
    spotify, success,
    types::{AuthUrlResponse, TokenRequest},
};

pub async fn auth_url(Extension(config): Extension<Arc<Config>>) -> Json<AuthUrlResponse> {
    Json(AuthUrlResponse {
        url: spotify::auth::authorize_url(&config.spotify),
    })
}

pub async fn token(
    Extension(config): Extension<Arc<Config>>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<Value>, ApiError> {
    let token = spotify::auth::exchange_code(&config.spotify, &request.code).await?;
    success!("Authorization code exchanged");
    Ok(Json(token))
}
