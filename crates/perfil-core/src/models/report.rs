use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::band::{AxisBand, TotalBand};
use super::variant::Variant;

/// Per-axis sums of selected points, indexed by axis position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ScoreVector(Vec<u32>);

impl ScoreVector {
    pub fn zeroed(axis_count: usize) -> Self {
        Self(vec![0; axis_count])
    }

    /// Add points to an axis slot, saturating at `u32::MAX`. Out-of-range
    /// indices are ignored.
    pub fn add(&mut self, axis_index: usize, points: u32) {
        if let Some(slot) = self.0.get_mut(axis_index) {
            *slot = slot.saturating_add(points);
        }
    }

    pub fn get(&self, axis_index: usize) -> Option<u32> {
        self.0.get(axis_index).copied()
    }

    pub fn total(&self) -> u32 {
        self.0.iter().fold(0, |acc, &points| acc.saturating_add(points))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for ScoreVector {
    fn from(scores: Vec<u32>) -> Self {
        Self(scores)
    }
}

/// Strengths, weaknesses, opportunities and threats derived from axis scores.
///
/// Entries are plain text with the axis name emphasised as `**name**`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Breakdown {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub axis_index: usize,
    pub axis_title: String,
    pub score: u32,
    pub band: AxisBand,
    pub rationale: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AxisScore {
    pub index: usize,
    pub title: String,
    pub short_title: String,
    pub score: u32,
    pub max_score: u32,
    pub band: AxisBand,
    pub band_label: String,
}

/// Everything the rendering layer needs to display a completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub variant: Variant,
    pub instrument_name: String,
    pub scores: Vec<AxisScore>,
    pub total: u32,
    pub max_total: u32,
    pub band: TotalBand,
    pub band_label: String,
    pub breakdown: Breakdown,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentReport {
    pub fn score_vector(&self) -> ScoreVector {
        self.scores.iter().map(|s| s.score).collect::<Vec<_>>().into()
    }
}
