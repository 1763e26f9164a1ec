use perfil_core::models::answer::{AnswerSet, QuestionId};
use perfil_core::models::band::{AxisBand, TotalBand};
use perfil_core::models::report::ScoreVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One selectable answer and the points it is worth.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }
}

/// A scoring dimension. Axes are identified by their position in the
/// definition; that position is the score bucket.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Axis {
    pub title: String,
    pub short_title: String,
    pub questions: Vec<Question>,
}

impl Axis {
    /// Short title, falling back to the full title when none is set.
    pub fn display_name(&self) -> &str {
        if self.short_title.is_empty() {
            &self.title
        } else {
            &self.short_title
        }
    }

    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(Question::max_points).sum()
    }
}

/// The first question, in definition order, that has no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnansweredQuestion {
    pub question_id: QuestionId,
    pub axis_index: usize,
    pub question_index: usize,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("answered {answered} of {total} questions")]
pub struct IncompleteAnswers {
    pub answered: usize,
    pub total: usize,
    pub first_unanswered: UnansweredQuestion,
}

/// Sum selected points into one bucket per axis.
///
/// Completeness is not checked here. Entries with a missing or
/// out-of-range axis index are skipped.
pub fn compute_scores(axes: &[Axis], answers: &AnswerSet) -> (ScoreVector, u32) {
    let mut scores = ScoreVector::zeroed(axes.len());
    for entry in answers.entries() {
        if let Some(axis_index) = entry.axis_index {
            scores.add(axis_index, entry.selected_points);
        }
    }
    let total = scores.total();
    (scores, total)
}

pub fn classify_total(total: u32) -> TotalBand {
    if total >= 320 {
        TotalBand::Consolidated
    } else if total >= 240 {
        TotalBand::Developing
    } else if total < 160 {
        TotalBand::Undefined
    } else {
        TotalBand::Initial
    }
}

pub fn classify_axis_score(score: u32) -> AxisBand {
    if score >= 80 {
        AxisBand::Strength
    } else if score >= 60 {
        AxisBand::Competent
    } else if score >= 40 {
        AxisBand::Weakness
    } else {
        AxisBand::CriticalWeakness
    }
}

/// Require one answer per question of the definition.
pub fn check_complete(axes: &[Axis], answers: &AnswerSet) -> Result<(), IncompleteAnswers> {
    let mut answered = 0;
    let mut total = 0;
    let mut first_unanswered = None;

    for (axis_index, axis) in axes.iter().enumerate() {
        for (question_index, question) in axis.questions.iter().enumerate() {
            total += 1;
            let id = QuestionId::new(axis_index, question_index);
            if answers.contains(&id) {
                answered += 1;
            } else if first_unanswered.is_none() {
                first_unanswered = Some(UnansweredQuestion {
                    question_id: id,
                    axis_index,
                    question_index,
                    prompt: question.prompt.clone(),
                });
            }
        }
    }

    match first_unanswered {
        Some(first_unanswered) => Err(IncompleteAnswers {
            answered,
            total,
            first_unanswered,
        }),
        None => Ok(()),
    }
}
