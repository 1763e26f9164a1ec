use perfil_core::models::report::{Breakdown, ScoreVector};

use crate::scoring::Axis;

const FALLBACK_STRENGTH: &str = "Tu voluntad de mejorar es tu base actual.";
const FALLBACK_WEAKNESS: &str = "Cuidado con el exceso de confianza.";

/// Sort every axis into exactly one of strengths/weaknesses and at most one
/// of opportunities/threats.
///
/// The cut points here are ordered differently from
/// [`classify_axis_score`](crate::scoring::classify_axis_score): the critical
/// band is tested before the weakness band. Strengths and weaknesses are
/// never returned empty.
pub fn build_qualitative_breakdown(scores: &ScoreVector, axes: &[Axis]) -> Breakdown {
    let mut breakdown = Breakdown::default();

    for (score, axis) in scores.iter().zip(axes) {
        let name = axis.display_name();
        if score >= 80 {
            breakdown
                .strengths
                .push(format!("Alto rendimiento en **{name}** ({score} pts)"));
            breakdown.opportunities.push(format!(
                "Monetizar la fortaleza en **{name}** creando productos premium."
            ));
        } else if score < 40 {
            breakdown
                .weaknesses
                .push(format!("Estado crítico en **{name}** (solo {score} pts)"));
            breakdown.threats.push(format!(
                "Tu irrelevancia en **{name}** amenaza la viabilidad del proyecto."
            ));
        } else if score < 60 {
            breakdown.weaknesses.push(format!("Debilidad en **{name}**"));
            breakdown
                .opportunities
                .push(format!("Mejoras rápidas en **{name}** tendrán alto impacto."));
        } else {
            breakdown
                .strengths
                .push(format!("Competencia sólida en **{name}**"));
            breakdown
                .opportunities
                .push(format!("Refinar **{name}** para alcanzar nivel experto."));
        }
    }

    if breakdown.strengths.is_empty() {
        breakdown.strengths.push(FALLBACK_STRENGTH.to_string());
    }
    if breakdown.weaknesses.is_empty() {
        breakdown.weaknesses.push(FALLBACK_WEAKNESS.to_string());
    }

    breakdown
}
