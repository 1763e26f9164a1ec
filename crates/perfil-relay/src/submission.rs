use perfil_core::models::report::AssessmentReport;
use serde::{Deserialize, Serialize};

/// JSON body accepted by the form relay.
///
/// Underscore-prefixed fields are relay directives rather than data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "_subject")]
    pub subject: String,
    pub message: String,
    pub score: u32,
    pub scores: Vec<u32>,
    pub status: String,
    #[serde(rename = "type")]
    pub variant: String,
    #[serde(rename = "_template")]
    pub template: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
}

impl Submission {
    pub fn from_report(report: &AssessmentReport) -> Self {
        let tag = report.variant.as_str().to_uppercase();
        let status = report.band.short_label();

        let mut message = format!(
            "Se ha completado un nuevo assessment literario.\n\n\
             TIPO: {tag}\n\
             PUNTUACIÓN: {}\n\
             ESTADO: {status}\n\n\
             Puntuaciones por Ejes:\n",
            report.total
        );
        for axis in &report.scores {
            message.push_str(&format!(
                "{}. {}: {}\n",
                axis.index + 1,
                axis.short_title,
                axis.score
            ));
        }
        message.push_str("\nEste envío es automático desde la web pública.");

        Self {
            subject: format!("NUEVO ASSESSMENT COMPLETADO: {tag}"),
            message,
            score: report.total,
            scores: report.score_vector().as_slice().to_vec(),
            status: status.to_string(),
            variant: report.variant.as_str().to_string(),
            template: "table".to_string(),
            captcha: "false".to_string(),
        }
    }
}
