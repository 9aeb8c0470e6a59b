use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use trailhead_booking::{SubmissionError, ValidationErrors};
use trailhead_catalog::CatalogError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(ValidationErrors),
    Upstream(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn from_catalog(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => AppError::NotFound(format!("Trip not found: {id}")),
            CatalogError::InvalidRecord(msg) => AppError::BadRequest(msg),
            CatalogError::Network(msg) | CatalogError::Server(msg) => AppError::Upstream(msg),
        }
    }

    pub fn from_submission(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation(msg) => AppError::BadRequest(msg),
            SubmissionError::Payment(msg) | SubmissionError::Network(msg) => {
                AppError::Upstream(msg)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "validation failed", "details": errors }),
            ),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, json!({ "error": msg }))
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
