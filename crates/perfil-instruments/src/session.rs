use perfil_core::models::answer::{AnswerEntry, AnswerSet, QuestionId};
use perfil_core::models::report::AssessmentReport;
use perfil_core::models::variant::Variant;

use crate::error::InstrumentError;
use crate::{Instrument, instrument_for};

/// A respondent's in-progress assessment.
///
/// Owns the answer set for one variant. Starting, resetting or switching
/// variant always begins from an empty set.
pub struct AssessmentSession {
    instrument: Box<dyn Instrument>,
    answers: AnswerSet,
}

impl AssessmentSession {
    pub fn start(variant: Variant) -> Self {
        Self {
            instrument: instrument_for(variant),
            answers: AnswerSet::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.instrument.variant()
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Record the option chosen for a question, replacing any earlier choice.
    pub fn select(
        &mut self,
        question_id: &QuestionId,
        option_index: usize,
    ) -> Result<AnswerEntry, InstrumentError> {
        let unknown = || InstrumentError::UnknownQuestion {
            instrument_id: self.instrument.id().to_string(),
            question_id: question_id.clone(),
        };
        let (axis_index, _) = question_id.indices().map_err(|_| unknown())?;
        let question = self.instrument.question(question_id).ok_or_else(unknown)?;
        let option = question
            .option(option_index)
            .ok_or_else(|| InstrumentError::UnknownOption {
                question_id: question_id.clone(),
                option_index,
            })?;

        let entry = AnswerEntry::new(option.points, axis_index);
        self.answers.record(question_id.clone(), entry);
        Ok(entry)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.instrument.check_complete(&self.answers).is_ok()
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn switch(&mut self, variant: Variant) {
        self.instrument = instrument_for(variant);
        self.answers.clear();
    }

    /// Evaluate a snapshot of the current answers.
    pub fn evaluate(&self) -> Result<AssessmentReport, InstrumentError> {
        self.instrument.evaluate(&self.answers)
    }
}
