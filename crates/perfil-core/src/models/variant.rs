use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The questionnaire a respondent is taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Variant {
    /// Novelists and other fiction authors.
    Fiction,
    /// Essayists and subject-matter experts.
    Nonfiction,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Fiction, Variant::Nonfiction];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Fiction => "fiction",
            Variant::Nonfiction => "nonfiction",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant(s.to_string()))
    }
}
