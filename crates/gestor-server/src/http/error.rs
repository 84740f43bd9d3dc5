use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gestor_core::responses::ErrorResponse;
use gestor_db::StoreError;
use thiserror::Error;
use tracing::error;

/// Request failures other than validation, which is answered with the form.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path id, unreadable body, or conflicting ids.
    #[error("{0}")]
    BadRequest(String),

    #[error("Subject {0} was not found")]
    NotFound(i64),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Store(_) => "store_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Store(err) => {
                // Store details stay in the log.
                error!(error = %err, "subject store failure");
                "The subject store could not complete the request.".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}
