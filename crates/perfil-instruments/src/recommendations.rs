use perfil_core::models::band::AxisBand;
use perfil_core::models::report::{Recommendation, ScoreVector};

use crate::scoring::{Axis, classify_axis_score};

/// One canned (rationale, action) pair per axis band, applied to every axis.
pub fn build_recommendations(scores: &ScoreVector, axes: &[Axis]) -> Vec<Recommendation> {
    scores
        .iter()
        .zip(axes)
        .enumerate()
        .map(|(axis_index, (score, axis))| {
            let band = classify_axis_score(score);
            let (rationale, action) = advice(band);
            Recommendation {
                axis_index,
                axis_title: axis.title.clone(),
                score,
                band,
                rationale: rationale.to_string(),
                action: action.to_string(),
            }
        })
        .collect()
}

fn advice(band: AxisBand) -> (&'static str, &'static str) {
    match band {
        AxisBand::Strength => (
            "Posicionamiento de Liderazgo. Tienes una ventaja competitiva clara aquí.",
            "Escalar: Crea productos high-ticket, busca partnerships exclusivos y delega lo operativo.",
        ),
        AxisBand::Competent => (
            "Posicionamiento Competente. Funciona, pero no destaca masivamente.",
            "Optimizar: Aumenta la frecuencia de publicación y refina la calidad visual/narrativa.",
        ),
        AxisBand::Weakness => (
            "En Desarrollo. Es un punto de fricción actual.",
            "Foco: Dedica los próximos 30 días a mejorar exclusivamente este eje.",
        ),
        AxisBand::CriticalWeakness => (
            "Estado Crítico. Esto está impidiendo tu crecimiento.",
            "Fundamentos: Vuelve a lo básico. Define quién eres y a quién sirves antes de seguir.",
        ),
    }
}
