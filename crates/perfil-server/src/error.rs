use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use perfil_instruments::error::InstrumentError;
use perfil_instruments::scoring::IncompleteAnswers;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unprocessable(IncompleteAnswers),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct IncompleteBody {
    error: String,
    #[serde(flatten)]
    detail: IncompleteAnswers,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unprocessable(detail) => {
                let body = IncompleteBody {
                    error: detail.to_string(),
                    detail,
                };
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::Incomplete(detail) => ApiError::Unprocessable(detail),
            InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("assessment not found: {id}"))
            }
            other @ (InstrumentError::UnknownQuestion { .. }
            | InstrumentError::UnknownOption { .. }) => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<perfil_export::error::ExportError> for ApiError {
    fn from(e: perfil_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
