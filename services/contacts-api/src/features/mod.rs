pub mod handlers;

use axum::{Router, routing::get};

pub fn get_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/contacts",
            get(handlers::get_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/v1/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
}
