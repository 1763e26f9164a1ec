use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use perfil_core::models::answer::AnswerSet;
use perfil_core::models::report::AssessmentReport;
use perfil_export::document::{Artifact, ExportFormat, export_filename};
use perfil_export::docx::generate_docx;
use perfil_export::render::render_report;
use perfil_export::styles::DocumentStyles;
use perfil_instruments::scoring::Axis;
use perfil_instruments::{all_instruments, require_instrument};
use perfil_relay::submission::Submission;

use crate::error::ApiError;
use crate::routes::attachment;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AssessmentSummary {
    id: String,
    name: String,
    question_count: usize,
    max_score: u32,
}

#[derive(Serialize)]
pub struct AssessmentDetail {
    id: String,
    name: String,
    max_score: u32,
    axes: Vec<Axis>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Markdown,
    Docx,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    pub answers: AnswerSet,
    pub format: ReportFormat,
}

pub async fn list_assessments() -> Json<Vec<AssessmentSummary>> {
    let assessments = all_instruments()
        .iter()
        .map(|i| AssessmentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            question_count: i.question_count(),
            max_score: i.max_score(),
        })
        .collect();
    Json(assessments)
}

pub async fn get_assessment(
    Path(variant): Path<String>,
) -> Result<Json<AssessmentDetail>, ApiError> {
    let instrument = require_instrument(&variant)?;

    Ok(Json(AssessmentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_score: instrument.max_score(),
        axes: instrument.axes().to_vec(),
    }))
}

/// Score a submitted answer set and forward the result to the relay.
///
/// The response does not wait on the relay.
pub async fn evaluate_assessment(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let instrument = require_instrument(&variant)?;
    let report = instrument.evaluate(&answers)?;

    tracing::info!(
        variant = %report.variant,
        total = report.total,
        band = ?report.band,
        "assessment evaluated"
    );
    state.relay.dispatch(Submission::from_report(&report));

    Ok(Json(report))
}

pub async fn export_report(
    Path(variant): Path<String>,
    Json(req): Json<ReportRequest>,
) -> Result<Response, ApiError> {
    let instrument = require_instrument(&variant)?;
    let report = instrument.evaluate(&req.answers)?;
    let rendered = render_report(&report)?;

    let format = match req.format {
        ReportFormat::Markdown => ExportFormat::Markdown,
        ReportFormat::Docx => ExportFormat::Docx,
    };
    let bytes = match format {
        ExportFormat::Docx => generate_docx(&rendered, &DocumentStyles::default())?,
        _ => rendered.into_bytes(),
    };

    Ok(attachment(Artifact {
        filename: export_filename(&format!("informe {}", report.variant), format),
        content_type: format.content_type(),
        bytes,
    }))
}
