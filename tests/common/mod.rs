#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::get,
};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use reqwest::Url;
use rewindify::config::{Config, SpotifyConfig};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const REDIRECT_URI: &str = "http://localhost:3000/callback";
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

pub async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

pub fn serve(listener: TcpListener, app: Router) {
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
}

/// Config pointing every Spotify endpoint at `upstream`, without rate limiting.
pub fn test_config(upstream: &str) -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        frontend_origin: FRONTEND_ORIGIN.to_string(),
        spotify: SpotifyConfig {
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
            redirect_uri: REDIRECT_URI.to_string(),
            api_url: upstream.to_string(),
            auth_url: Url::parse("https://accounts.spotify.com/authorize").unwrap(),
            token_url: format!("{}/api/token", upstream),
            rate_limit_delay: Duration::ZERO,
        },
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

pub fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One play-history item as Spotify returns it.
pub fn play(id: &str, played_at: DateTime<Utc>) -> Value {
    json!({
        "track": {
            "id": id,
            "name": format!("Track {}", id),
            "uri": format!("spotify:track:{}", id),
            "duration_ms": 180000
        },
        "played_at": iso(played_at)
    })
}

/// `count` plays, newest first, one minute apart, the newest at `newest`.
pub fn plays_from(prefix: &str, newest: DateTime<Utc>, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            play(
                &format!("{}{}", prefix, i),
                newest - chrono::Duration::minutes(i as i64),
            )
        })
        .collect()
}

pub fn page(items: Vec<Value>, next: Option<String>) -> Value {
    json!({ "items": items, "next": next, "limit": 50 })
}

pub fn next_page_url(base: &str, index: usize) -> String {
    format!("{}/me/player/recently-played?page={}", base, index)
}

#[derive(Debug, Clone)]
pub struct StubPage {
    pub status: StatusCode,
    pub body: Value,
}

impl StubPage {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "error": { "status": status.as_u16(), "message": "stub failure" } }),
        }
    }
}

/// Requests received by the recently-played stub.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct HistoryStub {
    pages: Arc<Vec<StubPage>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Recently-played route serving `pages` by their `page` query index (the first
/// request, which carries no `page`, gets index 0).
pub fn history_routes(pages: Vec<StubPage>) -> (Router, Arc<Mutex<Vec<RecordedCall>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let stub = HistoryStub {
        pages: Arc::new(pages),
        calls: Arc::clone(&calls),
    };

    let router = Router::new()
        .route("/me/player/recently-played", get(recently_played))
        .with_state(stub);
    (router, calls)
}

/// Spawns a stub serving recently-played pages. `build` receives the stub base
/// URL so pages can link to each other.
pub async fn spawn_history_stub(
    build: impl FnOnce(&str) -> Vec<StubPage>,
) -> (String, Arc<Mutex<Vec<RecordedCall>>>) {
    let (listener, base) = bind().await;
    let (router, calls) = history_routes(build(&base));
    serve(listener, router);
    (base, calls)
}

async fn recently_played(
    State(stub): State<HistoryStub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let index = query
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(0);

    stub.calls.lock().unwrap().push(RecordedCall {
        query,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match stub.pages.get(index) {
        Some(page) => (page.status, Json(page.body.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "no such page" }))),
    }
}
