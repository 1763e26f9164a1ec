use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifies a question as `q_{axis}_{question}`, both indices zero-based.
///
/// Deserialization accepts any string so that stray identifiers sent by a
/// client survive into the answer set; they simply never match a question
/// of the definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(axis_index: usize, question_index: usize) -> Self {
        Self(format!("q_{axis_index}_{question_index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the identifier back into `(axis_index, question_index)`.
    pub fn indices(&self) -> Result<(usize, usize), CoreError> {
        let invalid = || CoreError::InvalidQuestionId(self.0.clone());
        let rest = self.0.strip_prefix("q_").ok_or_else(invalid)?;
        let (axis, question) = rest.split_once('_').ok_or_else(invalid)?;
        let axis = axis.parse().map_err(|_| invalid())?;
        let question = question.parse().map_err(|_| invalid())?;
        Ok((axis, question))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuestionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self(s.to_string());
        id.indices()?;
        Ok(id)
    }
}

/// The recorded selection for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerEntry {
    pub selected_points: u32,
    /// Axis the question belongs to. `None` when the client omitted it;
    /// such entries never contribute to a score.
    #[serde(default)]
    pub axis_index: Option<usize>,
}

impl AnswerEntry {
    pub fn new(selected_points: u32, axis_index: usize) -> Self {
        Self {
            selected_points,
            axis_index: Some(axis_index),
        }
    }
}

/// One entry per answered question. Reselecting a question replaces its
/// entry rather than adding a second one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<QuestionId, AnswerEntry>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, returning the entry it replaced.
    pub fn record(&mut self, question: QuestionId, entry: AnswerEntry) -> Option<AnswerEntry> {
        self.0.insert(question, entry)
    }

    pub fn get(&self, question: &QuestionId) -> Option<&AnswerEntry> {
        self.0.get(question)
    }

    pub fn contains(&self, question: &QuestionId) -> bool {
        self.0.contains_key(question)
    }

    pub fn remove(&mut self, question: &QuestionId) -> Option<AnswerEntry> {
        self.0.remove(question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, QuestionId, AnswerEntry> {
        self.0.iter()
    }

    pub fn entries(&self) -> btree_map::Values<'_, QuestionId, AnswerEntry> {
        self.0.values()
    }
}

impl FromIterator<(QuestionId, AnswerEntry)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a QuestionId, &'a AnswerEntry);
    type IntoIter = btree_map::Iter<'a, QuestionId, AnswerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
