use perfil_core::models::answer::{AnswerEntry, AnswerSet, QuestionId};
use perfil_core::models::band::{AxisBand, TotalBand};
use perfil_core::models::report::ScoreVector;
use perfil_core::models::variant::Variant;
use perfil_instruments::breakdown::build_qualitative_breakdown;
use perfil_instruments::error::InstrumentError;
use perfil_instruments::instruments::fiction::Fiction;
use perfil_instruments::recommendations::build_recommendations;
use perfil_instruments::scoring::{Axis, classify_axis_score, classify_total, compute_scores};
use perfil_instruments::{Instrument, instrument_for};

/// Answer every question, choosing points with `pick`.
fn answer_all(instrument: &dyn Instrument, pick: impl Fn(&[u32]) -> u32) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (axis_index, axis) in instrument.axes().iter().enumerate() {
        for (question_index, question) in axis.questions.iter().enumerate() {
            let points: Vec<u32> = question.options.iter().map(|o| o.points).collect();
            answers.record(
                QuestionId::new(axis_index, question_index),
                AnswerEntry::new(pick(&points), axis_index),
            );
        }
    }
    answers
}

/// A complete answer set whose axis totals are exactly `targets`.
fn answers_with_axis_totals(instrument: &dyn Instrument, targets: [u32; 4]) -> AnswerSet {
    let mut answers = answer_all(instrument, |_| 0);
    for (axis_index, target) in targets.into_iter().enumerate() {
        answers.record(
            QuestionId::new(axis_index, 0),
            AnswerEntry::new(target, axis_index),
        );
    }
    answers
}

static FICTION: Fiction = Fiction;

fn axes() -> &'static [Axis] {
    FICTION.axes()
}

#[test]
fn compute_scores_is_deterministic() {
    let instrument = instrument_for(Variant::Nonfiction);
    let answers = answer_all(instrument.as_ref(), |points| points[points.len() / 2]);

    let first = compute_scores(instrument.axes(), &answers);
    let second = compute_scores(instrument.axes(), &answers.clone());
    assert_eq!(first, second);
}

#[test]
fn total_is_sum_of_vector() {
    let instrument = instrument_for(Variant::Fiction);
    let answers = answer_all(instrument.as_ref(), |points| points[1]);

    let (vector, total) = compute_scores(instrument.axes(), &answers);
    assert_eq!(vector.len(), 4);
    assert_eq!(total, vector.iter().sum::<u32>());
}

#[test]
fn maximum_answers_reach_axis_and_definition_maxima() {
    for variant in Variant::ALL {
        let instrument = instrument_for(variant);
        let answers = answer_all(instrument.as_ref(), |points| {
            points.iter().copied().max().unwrap()
        });

        let (vector, total) = compute_scores(instrument.axes(), &answers);
        for (score, axis) in vector.iter().zip(instrument.axes()) {
            assert_eq!(score, axis.max_score());
        }
        assert_eq!(total, instrument.max_score());
        assert_eq!(total, 400);
    }
}

#[test]
fn zero_answers_score_zero_everywhere() {
    let instrument = instrument_for(Variant::Fiction);
    let answers = answer_all(instrument.as_ref(), |_| 0);

    let (vector, total) = compute_scores(instrument.axes(), &answers);
    assert!(vector.iter().all(|s| s == 0));
    assert_eq!(total, 0);
    assert_eq!(classify_total(total), TotalBand::Undefined);
    assert!(
        vector
            .iter()
            .all(|s| classify_axis_score(s) == AxisBand::CriticalWeakness)
    );
}

#[test]
fn out_of_range_and_missing_axis_indices_are_ignored() {
    let mut answers = AnswerSet::new();
    answers.record(QuestionId::new(0, 0), AnswerEntry::new(10, 0));
    answers.record(QuestionId::new(9, 0), AnswerEntry::new(50, 9));
    answers.record(
        QuestionId::new(1, 0),
        AnswerEntry {
            selected_points: 7,
            axis_index: None,
        },
    );

    let (vector, total) = compute_scores(axes(), &answers);
    assert_eq!(vector.as_slice(), &[10, 0, 0, 0]);
    assert_eq!(total, 10);
}

#[test]
fn total_band_boundaries() {
    let cases = [
        (0, TotalBand::Undefined),
        (159, TotalBand::Undefined),
        (160, TotalBand::Initial),
        (239, TotalBand::Initial),
        (240, TotalBand::Developing),
        (319, TotalBand::Developing),
        (320, TotalBand::Consolidated),
        (400, TotalBand::Consolidated),
    ];
    for (total, band) in cases {
        assert_eq!(classify_total(total), band, "total {total}");
    }
}

#[test]
fn axis_band_boundaries() {
    let cases = [
        (39, AxisBand::CriticalWeakness),
        (40, AxisBand::Weakness),
        (59, AxisBand::Weakness),
        (60, AxisBand::Competent),
        (79, AxisBand::Competent),
        (80, AxisBand::Strength),
    ];
    for (score, band) in cases {
        assert_eq!(classify_axis_score(score), band, "score {score}");
    }
}

#[test]
fn breakdown_never_leaves_strengths_or_weaknesses_empty() {
    let all_weak = build_qualitative_breakdown(&ScoreVector::from(vec![10, 20, 30, 45]), axes());
    assert_eq!(all_weak.strengths, vec!["Tu voluntad de mejorar es tu base actual."]);
    assert_eq!(all_weak.weaknesses.len(), 4);
    assert_eq!(all_weak.threats.len(), 3);

    let all_strong = build_qualitative_breakdown(&ScoreVector::from(vec![90, 85, 70, 60]), axes());
    assert_eq!(all_strong.weaknesses, vec!["Cuidado con el exceso de confianza."]);
    assert_eq!(all_strong.strengths.len(), 4);
    assert!(all_strong.threats.is_empty());
}

#[test]
fn breakdown_places_each_axis_once() {
    let breakdown = build_qualitative_breakdown(&ScoreVector::from(vec![85, 70, 45, 20]), axes());

    assert_eq!(
        breakdown.strengths,
        vec![
            "Alto rendimiento en **Voz Editorial** (85 pts)",
            "Competencia sólida en **Audiencia**",
        ]
    );
    assert_eq!(
        breakdown.weaknesses,
        vec![
            "Debilidad en **Autoridad**",
            "Estado crítico en **Comunidad** (solo 20 pts)",
        ]
    );
    assert_eq!(breakdown.opportunities.len(), 3);
    assert_eq!(breakdown.threats.len(), 1);
    assert!(breakdown.threats[0].contains("**Comunidad**"));
}

#[test]
fn breakdown_cut_points() {
    let low = build_qualitative_breakdown(&ScoreVector::from(vec![39, 40, 59, 60]), axes());
    assert_eq!(low.strengths, vec!["Competencia sólida en **Comunidad**"]);
    assert_eq!(
        low.weaknesses,
        vec![
            "Estado crítico en **Voz Editorial** (solo 39 pts)",
            "Debilidad en **Audiencia**",
            "Debilidad en **Autoridad**",
        ]
    );
    assert_eq!(
        low.threats,
        vec!["Tu irrelevancia en **Voz Editorial** amenaza la viabilidad del proyecto."]
    );
    assert_eq!(
        low.opportunities,
        vec![
            "Mejoras rápidas en **Audiencia** tendrán alto impacto.",
            "Mejoras rápidas en **Autoridad** tendrán alto impacto.",
            "Refinar **Comunidad** para alcanzar nivel experto.",
        ]
    );

    let high = build_qualitative_breakdown(&ScoreVector::from(vec![79, 80, 60, 59]), axes());
    assert_eq!(
        high.strengths,
        vec![
            "Competencia sólida en **Voz Editorial**",
            "Alto rendimiento en **Audiencia** (80 pts)",
            "Competencia sólida en **Autoridad**",
        ]
    );
    assert_eq!(high.weaknesses, vec!["Debilidad en **Comunidad**"]);
    assert!(high.threats.is_empty());
    assert_eq!(
        high.opportunities,
        vec![
            "Refinar **Voz Editorial** para alcanzar nivel experto.",
            "Monetizar la fortaleza en **Audiencia** creando productos premium.",
            "Refinar **Autoridad** para alcanzar nivel experto.",
            "Mejoras rápidas en **Comunidad** tendrán alto impacto.",
        ]
    );
}

#[test]
fn oversized_points_saturate_the_total() {
    let mut answers = answer_all(&FICTION, |_| 0);
    answers.record(QuestionId::new(0, 0), AnswerEntry::new(u32::MAX, 0));
    answers.record(QuestionId::new(0, 1), AnswerEntry::new(1, 0));

    let report = FICTION.evaluate(&answers).unwrap();
    assert_eq!(report.scores[0].score, u32::MAX);
    assert_eq!(report.total, u32::MAX);
    assert_eq!(report.band, TotalBand::Consolidated);
}

#[test]
fn recommendations_follow_axis_bands() {
    let recs = build_recommendations(&ScoreVector::from(vec![85, 70, 45, 20]), axes());

    assert_eq!(recs.len(), 4);
    let bands: Vec<_> = recs.iter().map(|r| r.band).collect();
    assert_eq!(
        bands,
        vec![
            AxisBand::Strength,
            AxisBand::Competent,
            AxisBand::Weakness,
            AxisBand::CriticalWeakness,
        ]
    );
    assert_eq!(recs[0].axis_title, "EJE 1: IDENTIDAD Y VOZ EDITORIAL");
    assert!(recs[0].action.starts_with("Escalar"));
    assert!(recs[3].action.starts_with("Fundamentos"));
}

#[test]
fn evaluate_mixed_profile() {
    let instrument = instrument_for(Variant::Fiction);
    let answers = answers_with_axis_totals(instrument.as_ref(), [85, 70, 45, 20]);

    let report = instrument.evaluate(&answers).unwrap();
    assert_eq!(report.total, 220);
    assert_eq!(report.max_total, 400);
    assert_eq!(report.band, TotalBand::Initial);
    assert_eq!(report.band_label, "Marca Personal Inicial");

    let bands: Vec<_> = report.scores.iter().map(|s| s.band).collect();
    assert_eq!(
        bands,
        vec![
            AxisBand::Strength,
            AxisBand::Competent,
            AxisBand::Weakness,
            AxisBand::CriticalWeakness,
        ]
    );
    assert_eq!(report.score_vector().as_slice(), &[85, 70, 45, 20]);
}

#[test]
fn evaluate_rejects_answer_set_missing_one_entry() {
    let instrument = instrument_for(Variant::Nonfiction);
    let mut answers = answer_all(instrument.as_ref(), |points| points[0]);
    let missing = QuestionId::new(2, 3);
    answers.remove(&missing);

    match instrument.evaluate(&answers) {
        Err(InstrumentError::Incomplete(incomplete)) => {
            assert_eq!(incomplete.answered, 39);
            assert_eq!(incomplete.total, 40);
            assert_eq!(incomplete.first_unanswered.question_id, missing);
            assert_eq!(incomplete.first_unanswered.prompt, "Medios Tradicionales");
        }
        other => panic!("expected incomplete error, got {other:?}"),
    }
}

#[test]
fn stray_question_ids_do_not_count_towards_completeness() {
    let instrument = instrument_for(Variant::Fiction);
    let mut answers = answer_all(instrument.as_ref(), |points| points[0]);
    answers.remove(&QuestionId::new(0, 0));
    answers.record(QuestionId::new(7, 7), AnswerEntry::new(10, 0));

    assert_eq!(answers.len(), instrument.question_count());
    let err = instrument.check_complete(&answers).unwrap_err();
    assert_eq!(err.first_unanswered.question_id, QuestionId::new(0, 0));
}
