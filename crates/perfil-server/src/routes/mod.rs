pub mod assessments;
pub mod export;
pub mod health;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use perfil_export::document::Artifact;

/// Offer an artifact as a file download.
pub(crate) fn attachment(artifact: Artifact) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
    (
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response()
}
