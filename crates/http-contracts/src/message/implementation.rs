use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::message::MessageResponse;

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use super::MessageResponse;

    #[test]
    fn serializes_to_single_message_field() {
        let response = MessageResponse::new("Get all contacts");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "message": "Get all contacts" }));
    }

    #[test]
    fn responds_with_ok_by_default() {
        let response = MessageResponse::new("Get all contacts").into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn status_override_wins_over_default() {
        let response =
            (StatusCode::CREATED, MessageResponse::new("Create contacts")).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
