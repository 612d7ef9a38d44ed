use std::sync::Arc;

use axum::{
    Extension, Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{Res, api, config::Config, info};

/// Builds the application router with CORS and the shared configuration.
pub fn router(config: Arc<Config>) -> Res<Router> {
    let cors_layer = cors_layer(&config.frontend_origin)?;

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/api/auth/url", get(api::auth_url))
        .route("/api/auth/token", post(api::token))
        .route("/api/history", get(api::history))
        .route("/api/playlist", post(api::playlist))
        .layer(Extension(config))
        .layer(cors_layer);

    Ok(app)
}

/// Only `origin` may call the API from a browser, other origins get no CORS
/// headers. Credentials are allowed, so methods and headers are mirrored from
/// the preflight instead of `*`.
fn cors_layer(origin: &str) -> Res<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| format!("Invalid FRONTEND_ORIGIN '{}': {}", origin, e))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = config.server_address.clone();
    let app = router(Arc::new(config))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
