use axum::Json;
use axum::response::Response;
use perfil_export::document::{ExportFormat, ExportSection, export};
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::attachment;

#[derive(Deserialize)]
pub struct ExportRequest {
    pub title: String,
    pub sections: Vec<ExportSection>,
    pub format: ExportFormat,
}

pub async fn export_document(Json(req): Json<ExportRequest>) -> Result<Response, ApiError> {
    let artifact = export(&req.title, &req.sections, req.format)?;
    Ok(attachment(artifact))
}
