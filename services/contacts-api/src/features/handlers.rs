use axum::{body::Bytes, extract::Path, http::StatusCode, response::IntoResponse};
use http_contracts::message::MessageResponse;
use tracing::debug;

pub async fn get_contacts() -> impl IntoResponse {
    MessageResponse::new("Get all contacts")
}

pub async fn create_contact(body: Bytes) -> impl IntoResponse {
    // Payload is accepted as-is until contacts are actually persisted.
    debug!(body = %String::from_utf8_lossy(&body), "received contact payload");
    (StatusCode::CREATED, MessageResponse::new("Create contacts"))
}

pub async fn get_contact(Path(id): Path<String>) -> impl IntoResponse {
    MessageResponse::new(format!("Get contact for {id}"))
}

pub async fn update_contact(Path(id): Path<String>) -> impl IntoResponse {
    MessageResponse::new(format!("Update contact for {id}"))
}

pub async fn delete_contact(Path(id): Path<String>) -> impl IntoResponse {
    MessageResponse::new(format!("Delete contact for {id}"))
}
