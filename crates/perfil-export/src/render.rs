use perfil_core::models::report::AssessmentReport;
use tera::{Context, Tera};

use crate::error::ExportError;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render an assessment report with the built-in markdown template.
pub fn render_report(report: &AssessmentReport) -> Result<String, ExportError> {
    render_template("report.md", REPORT_TEMPLATE, report)
}

/// Render a Tera template with an assessment report as its context.
///
/// Every report field is addressable by name (`total`, `scores`,
/// `breakdown.strengths`, `recommendations`, ...). Templates are rendered
/// without HTML autoescaping unless `template_name` ends in `.html`.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &AssessmentReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}
