use perfil_core::models::answer::QuestionId;
use thiserror::Error;

use crate::scoring::IncompleteAnswers;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("incomplete answers: {0}")]
    Incomplete(#[from] IncompleteAnswers),

    #[error("unknown question '{question_id}' for instrument '{instrument_id}'")]
    UnknownQuestion {
        instrument_id: String,
        question_id: QuestionId,
    },

    #[error("question '{question_id}' has no option {option_index}")]
    UnknownOption {
        question_id: QuestionId,
        option_index: usize,
    },
}
