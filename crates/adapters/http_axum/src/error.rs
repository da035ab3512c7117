//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use instock_domain::error::{InstockError, NotFoundError};

/// JSON body returned by every failing endpoint.
#[derive(Serialize)]
pub(crate) struct MessageBody {
    pub(crate) message: String,
}

impl MessageBody {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps [`InstockError`] and request body rejections to an HTTP response.
pub enum ApiError {
    Domain(InstockError),
    Body(JsonRejection),
}

impl ApiError {
    /// Error for a path id that does not name any record.
    ///
    /// Ids that are not integers cannot exist, so they are reported the same
    /// way as well-formed ids with no row behind them.
    pub(crate) fn unknown_id(entity: &'static str, raw: &str) -> Self {
        Self::Domain(
            NotFoundError {
                entity,
                id: raw.to_string(),
            }
            .into(),
        )
    }
}

impl From<InstockError> for ApiError {
    fn from(err: InstockError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(InstockError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(InstockError::Referential(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(InstockError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(InstockError::Storage(err)) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Body(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}
