use std::net::SocketAddr;

use axum::{
    Json,
    extract::ConnectInfo,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{info, instrument, warn};

#[instrument(name = "root_handler", skip_all)]
pub async fn root_handler(
    cargo_pkg_name: &'static str,
    cargo_pkg_version: &'static str,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    info!(%addr, "client connected");
    Json(json!({
        "service": cargo_pkg_name,
        "version": cargo_pkg_version,
        "status": "ok"
    }))
}

#[instrument(name = "health_handler", skip_all)]
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

#[instrument(name = "ready_handler", skip_all)]
pub async fn ready_handler() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}

#[instrument(name = "not_found_handler", skip_all, fields(uri = %uri))]
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    warn!("unmatched route");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("no route for {uri}") })),
    )
}
