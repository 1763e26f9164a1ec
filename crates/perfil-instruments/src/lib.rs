//! perfil-instruments
//!
//! Questionnaire definitions and the scoring engine. Pure data and pure
//! functions; the caller owns the answer set and decides when to evaluate.

pub mod breakdown;
pub mod error;
pub mod instruments;
pub mod recommendations;
pub mod scoring;
pub mod session;

use perfil_core::models::answer::{AnswerSet, QuestionId};
use perfil_core::models::report::{AssessmentReport, AxisScore};
use perfil_core::models::variant::Variant;

use error::InstrumentError;
use scoring::{Axis, IncompleteAnswers, Question};

/// Trait implemented by each questionnaire variant.
pub trait Instrument: Send + Sync {
    fn variant(&self) -> Variant;

    /// Identifier used in URLs and relayed results ("fiction", "nonfiction").
    fn id(&self) -> &str {
        self.variant().as_str()
    }

    /// Title shown above the questionnaire.
    fn name(&self) -> &str;

    /// The ordered axes; an axis index is its position in this slice.
    fn axes(&self) -> &[Axis];

    fn question_count(&self) -> usize {
        self.axes().iter().map(|a| a.questions.len()).sum()
    }

    /// Highest total reachable by picking the best option everywhere.
    fn max_score(&self) -> u32 {
        self.axes().iter().map(Axis::max_score).sum()
    }

    fn question(&self, id: &QuestionId) -> Option<&Question> {
        let (axis_index, question_index) = id.indices().ok()?;
        self.axes().get(axis_index)?.questions.get(question_index)
    }

    fn check_complete(&self, answers: &AnswerSet) -> Result<(), IncompleteAnswers> {
        scoring::check_complete(self.axes(), answers)
    }

    /// Score a complete answer set into a report.
    fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentReport, InstrumentError> {
        self.check_complete(answers)?;

        let axes = self.axes();
        let (vector, total) = scoring::compute_scores(axes, answers);
        let band = scoring::classify_total(total);

        let scores = vector
            .iter()
            .zip(axes)
            .enumerate()
            .map(|(index, (score, axis))| {
                let axis_band = scoring::classify_axis_score(score);
                AxisScore {
                    index,
                    title: axis.title.clone(),
                    short_title: axis.display_name().to_string(),
                    score,
                    max_score: axis.max_score(),
                    band: axis_band,
                    band_label: axis_band.label().to_string(),
                }
            })
            .collect();

        Ok(AssessmentReport {
            variant: self.variant(),
            instrument_name: self.name().to_string(),
            scores,
            total,
            max_total: self.max_score(),
            band,
            band_label: band.label().to_string(),
            breakdown: breakdown::build_qualitative_breakdown(&vector, axes),
            recommendations: recommendations::build_recommendations(&vector, axes),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    Variant::ALL.into_iter().map(instrument_for).collect()
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

pub fn instrument_for(variant: Variant) -> Box<dyn Instrument> {
    match variant {
        Variant::Fiction => Box::new(instruments::fiction::Fiction),
        Variant::Nonfiction => Box::new(instruments::nonfiction::Nonfiction),
    }
}
