use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
};
use http_common::router::base_routes;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::features;

pub fn app(cargo_pkg_name: &'static str, cargo_pkg_version: &'static str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
            HeaderValue::from_static("http://localhost:5173"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ]);

    let tracing_layer = TraceLayer::new_for_http();

    axum::Router::new()
        .merge(features::get_routes())
        .merge(base_routes(cargo_pkg_name, cargo_pkg_version))
        .layer(tracing_layer)
        .layer(cors)
}
