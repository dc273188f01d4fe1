use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Per-route request counters, readable through `GET /hits`.
pub type Hits = Arc<RwLock<HashMap<String, u64>>>;

pub fn app() -> Router {
    let hits: Hits = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/document", get(document))
        .route("/echo", any(echo))
        .route("/missing", get(missing))
        .route("/broken", get(broken))
        .route("/blank", get(blank))
        .route("/resource", delete(remove_resource))
        .route("/hits", get(hits_snapshot))
        .with_state(hits)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn bump(hits: &Hits, route: &str) {
    *hits.write().await.entry(route.to_string()).or_insert(0) += 1;
}

/// Fixed, well-formed JSON document.
async fn document(State(hits): State<Hits>) -> Json<Value> {
    bump(&hits, "document").await;
    Json(json!({
        "id": "doc-1",
        "title": "Fixture document",
        "revision": 4,
        "tags": ["alpha", "beta"],
    }))
}

/// Reflects the method, the content-type header, and the JSON body back to
/// the caller. The body comes back as `null` when absent or unparseable.
async fn echo(
    State(hits): State<Hits>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    bump(&hits, "echo").await;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    Json(json!({
        "method": method.as_str(),
        "content_type": content_type,
        "body": body,
    }))
}

/// 404 with the conventional `message` error body.
async fn missing(State(hits): State<Hits>) -> (StatusCode, Json<Value>) {
    bump(&hits, "missing").await;
    (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" })))
}

/// 500 whose body is not valid JSON.
async fn broken(State(hits): State<Hits>) -> (StatusCode, &'static str) {
    bump(&hits, "broken").await;
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

/// 200 with an empty body.
async fn blank(State(hits): State<Hits>) -> &'static str {
    bump(&hits, "blank").await;
    ""
}

async fn remove_resource(State(hits): State<Hits>) -> Json<Value> {
    bump(&hits, "resource").await;
    Json(json!({ "deleted": true }))
}

/// Snapshot of the per-route counters. Reading it is not itself counted.
async fn hits_snapshot(State(hits): State<Hits>) -> Json<HashMap<String, u64>> {
    Json(hits.read().await.clone())
}
